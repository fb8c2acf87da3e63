use std::path::PathBuf;

/// Errors surfaced by the UI binding layer.
///
/// Nothing here is retried or logged-and-swallowed by the layer itself
/// (startup stylesheet injection excepted, which is best-effort); every
/// error goes back to the direct caller, who decides whether it is fatal.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The underlying window failed to initialize. Fatal to UI construction.
    #[error("could not create window: {0}")]
    WindowCreation(String),

    /// The script-side `createModule` call failed for one module. Other
    /// modules are unaffected.
    #[error("{module}: could not create module ui element: {cause}")]
    ModuleCreation { module: String, cause: String },

    /// A script evaluation reported an error. The message is the script
    /// environment's own text, unwrapped.
    #[error("{0}")]
    Script(String),

    /// A script value's payload did not match the requested shape. Local to
    /// the one decode call; the value stays re-decodable as another shape.
    #[error("could not decode script value: {0}")]
    Decode(#[from] serde_json::Error),

    /// A non-creation window operation (load, bind, bounds, close) failed.
    #[error("window error: {0}")]
    Window(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("config validation error: {0}")]
    Validation(String),
}
