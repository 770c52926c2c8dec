use bevy::prelude::*;
use constants::class::{
    CLASS_SEPARATOR, EXCLUDED_CATEGORIES, GROUND_NAME, MODEL_PREFIX, WALL_ALIASES, WALL_CLASS,
};

use crate::engine::assets::category_tables::{ModelCategoryMap, SemanticColourTable};

/// Resolves shape names to semantic classes and flat label colours.
///
/// Naming conventions are an ordered chain of matchers; the first convention
/// that applies decides. Names nothing matches, and classes missing from the
/// colour table, fall back to the table's unlabelled colour.
pub struct CategoryResolver {
    models: ModelCategoryMap,
    colours: SemanticColourTable,
}

impl CategoryResolver {
    pub fn new(models: ModelCategoryMap, colours: SemanticColourTable) -> Self {
        Self { models, colours }
    }

    /// Semantic class for a shape name, if any convention matches.
    pub fn class_of(&self, name: &str) -> Option<String> {
        // A `Model#` prefix is terminal: an id the table does not know stays
        // unresolved instead of being re-parsed by later matchers.
        if name.starts_with(MODEL_PREFIX) {
            return match_model_prefix(name, &self.models);
        }
        match_ground(name).or_else(|| match_class_separator(name))
    }

    /// Flat label colour for a shape name, with a non-fatal fallback.
    pub fn colour_of(&self, name: &str) -> Vec3 {
        if let Some(class_name) = self.class_of(name) {
            if let Some(colour) = self.colours.colour(&class_name) {
                return colour;
            }
            eprintln!("No semantic colour for class {class_name} (shape {name})");
        } else {
            eprintln!("Failed to resolve a category for shape {name}");
        }
        self.colours.unlabelled_colour()
    }

    /// True for shapes whose category is never rendered
    pub fn is_excluded(&self, name: &str) -> bool {
        self.class_of(name)
            .is_some_and(|class_name| EXCLUDED_CATEGORIES.contains(&class_name.as_str()))
    }

    pub fn background_colour(&self) -> Vec3 {
        self.colours.background_colour()
    }
}

/// `Model#<id>` → category table lookup
fn match_model_prefix(name: &str, models: &ModelCategoryMap) -> Option<String> {
    let model_id = name.strip_prefix(MODEL_PREFIX)?;
    models.lookup(model_id).map(str::to_owned)
}

/// The literal ground shape
fn match_ground(name: &str) -> Option<String> {
    (name == GROUND_NAME).then(|| GROUND_NAME.to_owned())
}

/// `<Class>#<ordinal>`, with wall sub-surfaces aliased to one class
fn match_class_separator(name: &str) -> Option<String> {
    let (class_name, _) = name.split_once(CLASS_SEPARATOR)?;
    if WALL_ALIASES.contains(&class_name) {
        return Some(WALL_CLASS.to_owned());
    }
    Some(class_name.to_owned())
}
