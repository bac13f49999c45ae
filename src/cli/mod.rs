//! Command-line interface for venvup.
//!
//! - [`args`] - Argument definitions using clap derive macros

pub mod args;

pub use args::{normalize_args, Cli};
