//! Shared types and error taxonomy for the glance workspace.

pub mod errors;
pub mod position;

pub use errors::{ConfigError, UiError};
pub use position::{Horizontal, Position, Vertical};
