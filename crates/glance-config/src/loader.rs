//! YAML config loading.

use std::path::Path;

use glance_common::ConfigError;
use tracing::info;

use crate::schema::Config;
use crate::validation;

/// Load and validate a dashboard config from a YAML file.
///
/// The module list drives dashboard startup, so validation failures are
/// strict: an invalid config is returned as an error, not patched up.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Parse(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = serde_yaml::from_str(&content)
        .map_err(|e| ConfigError::Parse(format!("failed to parse YAML: {e}")))?;

    validation::validate(&config)?;

    info!(
        path = %path.display(),
        modules = config.modules.len(),
        "loaded dashboard config"
    );
    Ok(config)
}
