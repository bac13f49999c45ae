//! Virtual environment lifecycle.
//!
//! - [`manager`] - Resolves the project home, creates and activates the environment
//! - [`provider`] - Supported environment providers
//! - [`context`] - The handle an activated environment is passed around as

pub mod context;
pub mod manager;
pub mod provider;

pub use context::{EnvContext, ACTIVATION_SCRIPT};
pub use manager::{resolve_home, CreateAction, EnvironmentManager};
pub use provider::Provider;
