//! Environment providers.

use std::path::Path;

use crate::error::{Result, VenvupError};

/// A tool that can create virtual environment directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// The `virtualenv` package, run as `python -m virtualenv`.
    Virtualenv,
}

impl Provider {
    /// Look up a provider by its configured name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "virtualenv" => Ok(Self::Virtualenv),
            other => Err(VenvupError::UnsupportedProvider {
                provider: other.to_string(),
            }),
        }
    }

    /// Interpreter arguments that create (or refresh) an environment at `path`.
    pub fn create_args(self, path: &Path, clear: bool) -> Vec<String> {
        match self {
            Self::Virtualenv => {
                let mut args = vec!["-m".to_string(), "virtualenv".to_string()];
                if clear {
                    args.push("--clear".to_string());
                }
                args.push(path.to_string_lossy().to_string());
                args
            }
        }
    }
}
