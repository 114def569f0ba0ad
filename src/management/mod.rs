pub mod config;
pub mod model_registry;
