/// Camera near/far planes. The camera projection, the depth codec and the
/// inverse-depth consumer contract all derive from these two values.
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// Divisor applied to true depth in the depth render mode so typical indoor
/// distances land inside the displayable [0,1] range
pub const DEPTH_SCALE: f32 = 20.0;

/// Diffuse floor for surfaces facing away from the eye
pub const MIN_DIFFUSE_SCALE: f32 = 0.3;

/// Ambient term factor applied to Ka
pub const AMBIENT_STRENGTH: f32 = 0.1;

/// Ceiling of the two-channel inverse-depth code (16 bits)
pub const DEPTH_CODE_MAX: f32 = 65535.0;

/// Default seed for the instance colour palette shuffle
pub const DEFAULT_PALETTE_SEED: u64 = 0;
