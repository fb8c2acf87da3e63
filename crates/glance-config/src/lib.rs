//! Dashboard configuration: YAML schema, loading, validation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_from_path;
pub use schema::{Config, ModuleConfig, UiConfig};
