//! Generator configuration.
//!
//! Defaults are overridden by an optional TOML file, which is in turn
//! overridden by command-line flags:
//!
//! ```toml
//! [generator]
//! max_param = 8
//! origin = "tools/binder-gen"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::BinderError;
use crate::DEFAULT_MAX_PARAM;

pub const DEFAULT_ORIGIN: &str = "tools/binder-gen";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Largest parameter count that receives a specialization.
    pub max_param: usize,
    /// Tool name written into the banner line of the header.
    pub origin: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_param: DEFAULT_MAX_PARAM,
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    generator: GeneratorConfig,
}

impl GeneratorConfig {
    pub fn with_max_param(max_param: usize) -> Self {
        Self {
            max_param,
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, BinderError> {
        let file: ConfigFile = toml::from_str(text)?;
        file.generator.validate()
    }

    pub fn load(path: &Path) -> Result<Self, BinderError> {
        let text = fs::read_to_string(path).map_err(|source| BinderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            toml::from_str(&text).map_err(|source| BinderError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded generator config");
        file.generator.validate()
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn merge_overrides(mut self, max_param: Option<usize>) -> Self {
        if let Some(max) = max_param {
            self.max_param = max;
        }
        self
    }

    fn validate(self) -> Result<Self, BinderError> {
        // The origin lands inside a `//` comment; a line break would leak
        // the remainder into the generated unit as code.
        if self.origin.contains(|c: char| c == '\n' || c == '\r') {
            return Err(BinderError::InvalidConfig(
                "origin must be a single line".into(),
            ));
        }
        Ok(self)
    }
}
