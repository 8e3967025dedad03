//! Engine configuration

use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::vendor::Vendors;

/// Style engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cache key; prefixes every generated class name.
    pub key: String,
    /// Run the default auto-prefixer after registered plugins.
    pub prefix: bool,
    /// Vendors the default prefixer may emit.
    pub vendors: Vendors,
    /// Drop `label:` declarations from output.
    pub strip_labels: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            key: String::from("css"),
            prefix: true,
            vendors: Vendors::all(),
            strip_labels: true,
        }
    }
}

impl EngineConfig {
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = String::from(key);
        self
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_vendors(mut self, vendors: Vendors) -> Self {
        self.vendors = vendors;
        self
    }

    pub fn with_strip_labels(mut self, strip_labels: bool) -> Self {
        self.strip_labels = strip_labels;
        self
    }

    /// Check the key is usable as a class-name prefix.
    pub fn validate(&self) -> Result<()> {
        let valid = !self.key.is_empty()
            && self
                .key
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b == b'-');
        if valid {
            Ok(())
        } else {
            Err(EngineError::InvalidKey(self.key.clone()))
        }
    }
}
