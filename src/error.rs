//! Error types for venvup operations.
//!
//! This module defines [`VenvupError`], the error type returned by every
//! fallible step of the setup workflow, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - A missing requirements file is not an error; it is reported and the
//!   run continues with zero requirements
//! - Everything else aborts the run and surfaces here with a message that
//!   names the package, provider, or path involved
//! - Use `anyhow::Error` (via `VenvupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venvup operations.
#[derive(Debug, Error)]
pub enum VenvupError {
    /// The environment provider is not installed and installing it did not help.
    #[error("Unable to install {provider}")]
    ProviderUnavailable { provider: String },

    /// The configured provider is not one venvup knows how to drive.
    #[error("{provider} is not supported as environment provider")]
    UnsupportedProvider { provider: String },

    /// `pip install` exited unsuccessfully for a package.
    #[error("Failed to install '{package}' (exit code {code:?})")]
    PackageInstallFailed { package: String, code: Option<i32> },

    /// The provider ran but did not produce an environment.
    #[error("Failed to create virtual environment at {path}: {message}")]
    EnvironmentCreationFailed { path: PathBuf, message: String },

    /// The environment has no activation script where one was expected.
    #[error("Cannot activate environment, missing activation script: {script}")]
    ActivationFailed { script: PathBuf },

    /// An external command could not be run or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// pip printed a package listing that is not the expected JSON.
    #[error("Failed to parse package list from '{command}': {source}")]
    PackageListParse {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for venvup operations.
pub type Result<T> = std::result::Result<T, VenvupError>;
