//! Error types shared by checkers, the validator, and config loading.
//!
//! `CheckError` separates repository defects (`Structure`) from broken rule
//! definitions (`Configuration`). Both are collected, never thrown.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A single diagnostic produced while checking one rule entry.
pub enum CheckError {
    /// Repository content does not satisfy a declared rule.
    #[error("{message}")]
    Structure { target: String, message: String },
    /// The rule table itself is inconsistent.
    #[error("{message}")]
    Configuration { target: String, message: String },
}

impl CheckError {
    pub fn structure(target: impl Into<String>, message: impl Into<String>) -> Self {
        CheckError::Structure {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn configuration(target: impl Into<String>, message: impl Into<String>) -> Self {
        CheckError::Configuration {
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, CheckError::Configuration { .. })
    }

    pub fn target(&self) -> &str {
        match self {
            CheckError::Structure { target, .. } | CheckError::Configuration { target, .. } => {
                target
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CheckError::Structure { message, .. } | CheckError::Configuration { message, .. } => {
                message
            }
        }
    }
}

#[derive(Debug, Error)]
/// Failure to load a rules file from disk.
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
