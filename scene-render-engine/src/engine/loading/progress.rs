use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub scene_built: bool,
}
