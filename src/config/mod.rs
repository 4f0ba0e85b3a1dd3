//! Compiler configuration
//!
//! Options are plain data with defaults for every field, so a config file
//! only needs to name what it overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::error::ParseError;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "PIPEPAINT_CONFIG";

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pipepaint.yaml";

/// Options that shape the generated text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Tool name written into every module header
    pub generator: String,
    /// Pipeline package name used by the project layout
    pub pipeline_name: String,
    /// Suffix appended to a function identifier to name its step
    pub step_suffix: String,
    /// Docstring summary for functions without a description
    pub default_description: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            generator: "Kedro Pipeline Painter".to_string(),
            pipeline_name: "data_processing".to_string(),
            step_suffix: "_node".to_string(),
            default_description: "Process the input data and return the result.".to_string(),
        }
    }
}

impl CompilerOptions {
    /// Load options from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path_str = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
            path: path_str,
            source: e,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse options from a YAML string. An empty document yields defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(ParseError::from)
    }
}

/// Resolve the config file to load.
///
/// An explicit path wins, then `PIPEPAINT_CONFIG`, then `./pipepaint.yaml`
/// if it exists. `None` means built-in defaults.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    let cwd_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if cwd_config.exists() {
        return Some(cwd_config);
    }

    None
}
