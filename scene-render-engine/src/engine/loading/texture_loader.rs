use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::render_mode::SceneObjects;
use crate::engine::shaders::SceneMeshShader;

/// Downgrade objects whose diffuse texture failed to load: they keep their
/// material colours and render lighting-only from then on.
pub fn check_texture_failures(
    mut scene: ResMut<SceneObjects>,
    mut materials: ResMut<Assets<SceneMeshShader>>,
    asset_server: Res<AssetServer>,
) {
    let failed: Vec<usize> = scene
        .records
        .iter()
        .enumerate()
        .filter(|(_, object)| object.textured)
        .filter_map(|(index, object)| {
            let material = materials.get(&object.material)?;
            let handle = material.diffuse_texture.as_ref()?;
            matches!(
                asset_server.get_load_state(handle),
                Some(LoadState::Failed(_))
            )
            .then_some(index)
        })
        .collect();

    for index in failed {
        let object = &mut scene.records[index];
        println!(
            "Missing texture {} - rendering untextured",
            object.record.diffuse_texture
        );
        object.textured = false;
        if let Some(material) = materials.get_mut(&object.material) {
            material.diffuse_texture = None;
        }
        // apply_render_mode sees the table change and rebinds the active mode
    }
}
