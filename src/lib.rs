//! venvup - Python virtual environment bootstrapper.
//!
//! venvup makes sure a virtual-environment provider is available, creates
//! (or refreshes) an environment in the project directory, installs the
//! requirements file that matches the host platform into it and prints a
//! freeze report of the result.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration built from the command line
//! - [`environment`] - Environment creation and activation
//! - [`error`] - Error types and result aliases
//! - [`inspector`] - Installed-package listing and the freeze report
//! - [`installer`] - Package installation through pip
//! - [`platform`] - Host platform identification
//! - [`requirements`] - Requirements file selection and loading
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//! - [`workflow`] - The end-to-end setup sequence
//!
//! # Example
//!
//! ```
//! use venvup::config::Config;
//! use venvup::platform::requirements_name_for;
//!
//! let config = Config::default();
//! assert_eq!(requirements_name_for("linux", &config), Some("requirements_linux.txt"));
//! assert_eq!(requirements_name_for("freebsd", &config), None);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod inspector;
pub mod installer;
pub mod platform;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod workflow;

pub use error::{Result, VenvupError};
