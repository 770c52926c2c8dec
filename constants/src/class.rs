/// Naming conventions for scene objects.
///
/// Shapes named `Model#<id>` are looked up in the model category table;
/// everything else is classified from the name itself.
pub const MODEL_PREFIX: &str = "Model#";

/// Literal name of the ground shape
pub const GROUND_NAME: &str = "Ground";

/// Separator between class name and object ordinal, e.g. `Wall#3`
pub const CLASS_SEPARATOR: char = '#';

/// Wall sub-surfaces that alias to a single category
pub const WALL_ALIASES: &[&str] = &["WallInside", "WallOutside"];
pub const WALL_CLASS: &str = "Wall";

/// Categories removed from every scene, independent of the blacklist
pub const EXCLUDED_CATEGORIES: &[&str] = &["person"];
