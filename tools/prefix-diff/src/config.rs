//! Engine configuration files
//!
//! A config file is TOML holding the fields of `EngineConfig`; missing
//! fields take their defaults.
//!
//! ```toml
//! key = "app"
//! prefix = true
//! vendors = "WEBKIT | MOZ"
//! strip_labels = true
//! ```

use std::path::Path;

use prefix_engine::EngineConfig;

use crate::error::PrefixDiffError;

/// Parse and validate a config from TOML text.
pub fn parse_config_str(text: &str) -> Result<EngineConfig, PrefixDiffError> {
    let config: EngineConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Load a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, PrefixDiffError> {
    match path {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            parse_config_str(&std::fs::read_to_string(path)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Render a config back to TOML.
pub fn to_toml(config: &EngineConfig) -> Result<String, PrefixDiffError> {
    toml::to_string(config).map_err(|e| PrefixDiffError::ConfigParse(e.to_string()))
}
