pub mod engine;

pub use engine::core::app_setup::create_app;
