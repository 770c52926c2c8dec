/// Scene mesh shader material carrying the five-mode shading protocol
use bevy::render::render_resource::ShaderType;
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::render_settings::{DEFAULT_FAR, DEFAULT_NEAR, DEPTH_CODE_MAX, DEPTH_SCALE};

/// GPU shading modes. Values match the switch in `scene_mesh.wgsl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    TextureLighting = 0,
    Lighting = 1,
    Constant = 2,
    Depth = 3,
    InvDepth = 4,
}

/// Per-object uniform block. Built through the mode constructors so each
/// mode carries exactly the inputs it uses.
#[derive(Debug, Clone, Copy, ShaderType)]
#[repr(C)]
pub struct SceneShaderParams {
    /// rgb: diffuse or flat label colour; a: dissolve (opacity)
    pub kd: Vec4,
    /// rgb: ambient coefficient
    pub ka: Vec4,
    /// x: minDepth of the inverse-depth encoding; y: true-depth scale
    pub depth_params: Vec4,
    pub mode: u32,
    pub _pad0: u32,
    pub _pad1: u32,
    pub _pad2: u32,
}

impl SceneShaderParams {
    /// Modes 0/1: lit surface, textured when a diffuse texture resolved
    pub fn lit(diffuse: Vec3, ambient: Vec3, dissolve: f32, textured: bool) -> Self {
        let mode = if textured {
            ShadingMode::TextureLighting
        } else {
            ShadingMode::Lighting
        };
        Self::with_mode(mode, diffuse.extend(dissolve), ambient.extend(0.0), Vec4::ZERO)
    }

    /// Mode 2: flat colour, no lighting. Segmentation colours stay exact.
    pub fn constant(colour: Vec3) -> Self {
        Self::with_mode(ShadingMode::Constant, colour.extend(1.0), Vec4::ZERO, Vec4::ZERO)
    }

    /// Mode 3: scaled true depth replicated into rgb
    pub fn depth() -> Self {
        Self::with_mode(
            ShadingMode::Depth,
            Vec4::ZERO,
            Vec4::ZERO,
            Vec4::new(0.0, DEPTH_SCALE, 0.0, 0.0),
        )
    }

    /// Mode 4: 16-bit inverse-depth code split across the r/g channels
    pub fn inverse_depth(min_depth: f32) -> Self {
        Self::with_mode(
            ShadingMode::InvDepth,
            Vec4::ZERO,
            Vec4::ZERO,
            Vec4::new(min_depth, DEPTH_SCALE, 0.0, 0.0),
        )
    }

    fn with_mode(mode: ShadingMode, kd: Vec4, ka: Vec4, depth_params: Vec4) -> Self {
        Self {
            kd,
            ka,
            depth_params,
            mode: mode as u32,
            _pad0: 0,
            _pad1: 0,
            _pad2: 0,
        }
    }
}

impl Default for SceneShaderParams {
    fn default() -> Self {
        Self::lit(Vec3::ONE, Vec3::ZERO, 1.0, false)
    }
}

/// Scene mesh material: one uniform block plus an optional diffuse texture
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct SceneMeshShader {
    #[uniform(0)]
    pub params: SceneShaderParams,

    #[texture(1)]
    #[sampler(2)]
    pub diffuse_texture: Option<Handle<Image>>,
}

impl Material for SceneMeshShader {
    fn fragment_shader() -> ShaderRef {
        "./shaders/scene_mesh.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        // Dissolving surfaces draw in the transparent phase, after opaques
        if self.params.kd.w < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        }
    }
}

/// Depth-buffer value (0 at the near plane, 1 at the far plane) to inverse
/// depth, mirroring the shader transform for CPU-side consumers.
pub fn inverse_depth(d: f32) -> f32 {
    let inv_near = 1.0 / DEFAULT_NEAR;
    let inv_far = 1.0 / DEFAULT_FAR;
    inv_near + d * (inv_far - inv_near)
}

/// Depth-buffer value to true camera-space depth
pub fn true_depth(d: f32) -> f32 {
    1.0 / inverse_depth(d)
}

/// Quantise inverse depth into the two-channel code emitted by mode 4
pub fn encode_inverse_depth(inv_depth: f32, min_depth: f32) -> (u8, u8) {
    let code = DEPTH_CODE_MAX * min_depth * inv_depth + 0.5;
    let high = (code / 256.0).floor();
    let low = (code - high * 256.0).floor();
    (high as u8, low as u8)
}

/// Consumer-side decode: `code = 256 * high + low`, then
/// `inverse_depth = code / (65535 * minDepth)`
pub fn decode_inverse_depth(high: u8, low: u8, min_depth: f32) -> f32 {
    let code = 256.0 * high as f32 + low as f32;
    code / (DEPTH_CODE_MAX * min_depth)
}
