//! Emitter errors

use std::fmt;

#[derive(Debug)]
pub enum EmitError {
    /// Catalog block could not be serialized
    Yaml(serde_yaml::Error),
    /// Kedro-Viz document could not be serialized
    Json(serde_json::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Yaml(err) => {
                write!(f, "Failed to serialize catalog entry: {}", err)
            }
            EmitError::Json(err) => {
                write!(f, "Failed to serialize Kedro-Viz document: {}", err)
            }
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Yaml(err) => Some(err),
            EmitError::Json(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for EmitError {
    fn from(err: serde_yaml::Error) -> Self {
        EmitError::Yaml(err)
    }
}

impl From<serde_json::Error> for EmitError {
    fn from(err: serde_json::Error) -> Self {
        EmitError::Json(err)
    }
}
