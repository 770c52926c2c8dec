pub mod bounds;
pub mod category_tables;
pub mod scene_description;
