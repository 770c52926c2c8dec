/// Render mode state and per-object uniform orchestration
use bevy::prelude::*;
use constants::render_settings::{DEFAULT_NEAR, DEFAULT_PALETTE_SEED};

use crate::engine::assets::scene_description::MaterialData;
use crate::engine::scene::scene_builder::MaterialDescriptor;
use crate::engine::shaders::{SceneMeshShader, SceneShaderParams};

/// The five aligned views produced from one loaded scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Rgb,
    Semantic,
    Instance,
    Depth,
    InvDepth,
}

#[derive(Resource, Clone)]
pub struct RenderModeState {
    pub current_mode: RenderMode,
}

impl Default for RenderModeState {
    fn default() -> Self {
        Self {
            current_mode: RenderMode::Rgb,
        }
    }
}

/// Tunables for a render session
#[derive(Resource, Clone)]
pub struct SceneSettings {
    /// minDepth parameter of the inverse-depth encoding
    pub min_depth: f32,
    /// Seed of the instance palette shuffle
    pub palette_seed: u64,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            min_depth: DEFAULT_NEAR,
            palette_seed: DEFAULT_PALETTE_SEED,
        }
    }
}

/// One spawned scene object: its material handle plus everything needed to
/// rebind uniforms when the mode changes.
pub struct SceneObjectRecord {
    pub material: Handle<SceneMeshShader>,
    pub descriptor: MaterialDescriptor,
    pub record: MaterialData,
    /// Cleared when the diffuse texture fails to load
    pub textured: bool,
}

/// Prepared mesh/material tables. Built once per scene and read-only
/// afterwards, apart from texture downgrades.
#[derive(Resource, Default)]
pub struct SceneObjects {
    pub records: Vec<SceneObjectRecord>,
}

/// Handle render mode switching via keyboard
pub fn render_mode_system(
    mut render_state: ResMut<RenderModeState>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let mut mode_changed = false;
    let mut new_mode = render_state.current_mode;

    if keyboard.just_pressed(KeyCode::KeyZ) {
        new_mode = RenderMode::Rgb;
        mode_changed = true;
        println!("Render mode: RGB");
    }

    if keyboard.just_pressed(KeyCode::KeyX) {
        new_mode = RenderMode::Semantic;
        mode_changed = true;
        println!("Render mode: Semantic classes");
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        new_mode = RenderMode::Instance;
        mode_changed = true;
        println!("Render mode: Instances");
    }

    if keyboard.just_pressed(KeyCode::KeyV) {
        new_mode = RenderMode::Depth;
        mode_changed = true;
        println!("Render mode: Depth");
    }

    if keyboard.just_pressed(KeyCode::KeyB) {
        new_mode = RenderMode::InvDepth;
        mode_changed = true;
        println!("Render mode: Inverse depth");
    }

    if mode_changed {
        render_state.current_mode = new_mode;
    }
}

/// Rewrite every object's uniforms for the active mode. Runs when the mode
/// switches and when the scene tables change (initial build, texture
/// downgrades).
pub fn apply_render_mode(
    render_state: Res<RenderModeState>,
    settings: Res<SceneSettings>,
    scene: Res<SceneObjects>,
    mut materials: ResMut<Assets<SceneMeshShader>>,
) {
    if !render_state.is_changed() && !scene.is_changed() {
        return;
    }

    for object in &scene.records {
        if let Some(material) = materials.get_mut(&object.material) {
            material.params = params_for(render_state.current_mode, object, &settings);
        }
    }
}

/// Uniforms for one object in one mode; per-object inputs only where the
/// mode uses them.
fn params_for(
    mode: RenderMode,
    object: &SceneObjectRecord,
    settings: &SceneSettings,
) -> SceneShaderParams {
    match mode {
        RenderMode::Rgb => SceneShaderParams::lit(
            Vec3::from(object.record.diffuse),
            Vec3::from(object.record.ambient),
            object.record.dissolve,
            object.textured,
        ),
        RenderMode::Semantic => SceneShaderParams::constant(object.descriptor.label_colour),
        RenderMode::Instance => SceneShaderParams::constant(object.descriptor.instance_colour),
        RenderMode::Depth => SceneShaderParams::depth(),
        RenderMode::InvDepth => SceneShaderParams::inverse_depth(settings.min_depth),
    }
}
