//! Config validation.

use std::collections::HashSet;

use glance_common::ConfigError;
use tracing::warn;

use crate::schema::Config;

/// Validate a parsed config.
///
/// Duplicate module names are allowed: the UI layer aliases them to the
/// same region, so they are warned about rather than rejected.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.ui.width == 0 {
        return Err(ConfigError::Validation("ui.width must be nonzero".into()));
    }
    if config.ui.height == 0 {
        return Err(ConfigError::Validation("ui.height must be nonzero".into()));
    }

    let mut seen = HashSet::new();
    for module in &config.modules {
        if module.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "module name must not be empty".into(),
            ));
        }
        if !seen.insert(module.name.as_str()) {
            warn!(
                module = %module.name,
                "duplicate module name: both entries will share one region"
            );
        }
    }

    Ok(())
}
