use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Model id → category name table, loaded from JSON next to the scene.
#[derive(Asset, Debug, Clone, Default, Serialize, Deserialize, TypePath)]
pub struct ModelCategoryMap {
    pub models: HashMap<String, String>,
}

impl ModelCategoryMap {
    pub fn lookup(&self, model_id: &str) -> Option<&str> {
        self.models.get(model_id).map(String::as_str)
    }
}

/// Category name → flat RGB colour, plus the designated background colour.
///
/// `unlabelled` optionally separates "shape with no known category" from
/// "empty background pixel"; when absent the background colour doubles as
/// the resolver fallback.
#[derive(Asset, Debug, Clone, Default, Serialize, Deserialize, TypePath)]
pub struct SemanticColourTable {
    pub categories: HashMap<String, [f32; 3]>,
    pub background: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlabelled: Option<[f32; 3]>,
}

impl SemanticColourTable {
    pub fn colour(&self, class_name: &str) -> Option<Vec3> {
        self.categories.get(class_name).copied().map(Vec3::from)
    }

    pub fn background_colour(&self) -> Vec3 {
        Vec3::from(self.background)
    }

    /// Fallback colour for shapes that resolve to no known category
    pub fn unlabelled_colour(&self) -> Vec3 {
        self.unlabelled
            .map(Vec3::from)
            .unwrap_or_else(|| self.background_colour())
    }

    pub fn size(&self) -> usize {
        self.categories.len()
    }
}
