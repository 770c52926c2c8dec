use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::category_tables::{ModelCategoryMap, SemanticColourTable};
use crate::engine::assets::scene_description::SceneDescription;
use crate::engine::camera::viewport_camera::{camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, FpsText, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_loader::{SceneLoader, build_scene_when_ready, start_loading};
use crate::engine::loading::texture_loader::check_texture_failures;
use crate::engine::render_mode::{
    RenderModeState, SceneObjects, SceneSettings, apply_render_mode, render_mode_system,
};
use crate::engine::shaders::SceneMeshShader;

/// Create the application with the multi-view scene pipeline
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<SceneMeshShader>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers the scene inputs as loadable JSON asset types, selected
        // by their compound file extensions.
        .add_plugins(JsonAssetPlugin::<SceneDescription>::new(&["scene.json"]))
        .add_plugins(JsonAssetPlugin::<ModelCategoryMap>::new(&["categories.json"]))
        .add_plugins(JsonAssetPlugin::<SemanticColourTable>::new(&["colours.json"]));

    app.init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<SceneLoader>()
        .init_resource::<RenderModeState>()
        .init_resource::<SceneSettings>()
        .init_resource::<SceneObjects>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (build_scene_when_ready, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (
                (
                    render_mode_system,
                    apply_render_mode,
                    check_texture_failures,
                )
                    .chain(),
                camera_controller,
                fps_text_update_system,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);
    create_fps_overlay(&mut commands);
}

fn create_fps_overlay(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
