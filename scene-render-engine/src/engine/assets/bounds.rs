use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Scene extents in world coordinates, used for camera framing.
///
/// Starts at infinity sentinels (min > max) and becomes valid once the first
/// vertex position is folded in.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SceneBounds {
    pub fn new() -> Self {
        Self {
            min: Vec3::INFINITY,
            max: Vec3::NEG_INFINITY,
        }
    }

    /// Expand the bounds with a new vertex position
    pub fn update(&mut self, position: Vec3) {
        self.min = self.min.min(position);
        self.max = self.max.max(position);
    }

    /// False until at least one vertex was added
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Centre point for camera positioning
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn ground_height(&self) -> f32 {
        self.min.y
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self::new()
    }
}
