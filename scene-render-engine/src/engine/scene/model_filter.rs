use std::collections::HashSet;
use std::fs;

use constants::class::MODEL_PREFIX;

use crate::engine::assets::scene_description::Shape;
use crate::engine::scene::category::CategoryResolver;

/// Read the model blacklist: one bare model id per line. Returns the set of
/// full shape names to drop. A missing file is a valid configuration, not an
/// error.
pub fn load_blacklist(path: &str) -> Option<HashSet<String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            println!("Could not open model blacklist {path}: {err}");
            return None;
        }
    };

    Some(
        text.lines()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| format!("{MODEL_PREFIX}{id}"))
            .collect(),
    )
}

/// Drop every shape whose full name is blacklisted
pub fn filter_blacklisted(shapes: &mut Vec<Shape>, blacklist: &HashSet<String>) {
    shapes.retain(|shape| !blacklist.contains(&shape.name));
}

/// Drop every shape whose resolved category is excluded (e.g. "person")
pub fn filter_excluded_categories(shapes: &mut Vec<Shape>, resolver: &CategoryResolver) {
    shapes.retain(|shape| !resolver.is_excluded(&shape.name));
}
