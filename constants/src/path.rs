/// Scene data directory, relative to the asset root
pub const RELATIVE_SCENE_PATH: &str = "scenes/house";

/// Scene input files. The compound extensions select the JSON asset loader
/// registered for each table type.
pub const SCENE_FILE: &str = "house.scene.json";
pub const MODEL_CATEGORY_FILE: &str = "model.categories.json";
pub const SEMANTIC_COLOUR_FILE: &str = "semantic.colours.json";

/// The blacklist lives outside the asset server: it is read directly from
/// disk and may be absent.
pub const MODEL_BLACKLIST_FILE: &str = "assets/scenes/house/model_blacklist.txt";
