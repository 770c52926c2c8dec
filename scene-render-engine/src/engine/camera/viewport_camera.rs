use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};
use constants::render_settings::{DEFAULT_FAR, DEFAULT_NEAR};

use crate::engine::assets::bounds::SceneBounds;

/// Orbit camera state around a focus point
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: 10.0,
            pitch: -0.6,
            yaw: 0.0,
        }
    }
}

impl ViewportCamera {
    /// Frame the freshly built scene
    pub fn with_bounds(bounds: &SceneBounds) -> Self {
        Self {
            focus_point: bounds.center(),
            distance: bounds.size().length().max(1.0) * 0.8,
            pitch: -0.6,
            yaw: 0.0,
        }
    }

    fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let position = self.focus_point + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(position).looking_at(self.focus_point, Vec3::Y)
    }
}

/// Spawn the scene camera with the configured near/far planes. The depth
/// shading modes read depth back through this projection.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 2.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Mouse orbit plus scroll zoom
pub fn camera_controller(
    viewport: Option<ResMut<ViewportCamera>>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
) {
    let Some(mut viewport) = viewport else {
        return;
    };

    for event in motion.read() {
        if mouse_button.pressed(MouseButton::Left) {
            viewport.yaw -= event.delta.x * 0.005;
            viewport.pitch = (viewport.pitch - event.delta.y * 0.005).clamp(-1.5, 1.5);
        }
    }

    for event in wheel.read() {
        viewport.distance = (viewport.distance * (1.0 - event.y * 0.1)).max(DEFAULT_NEAR * 2.0);
    }

    for mut transform in &mut camera_query {
        *transform = viewport.transform();
    }
}
