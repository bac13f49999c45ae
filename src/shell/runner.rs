//! The seam between venvup and the processes it launches.
//!
//! Every pip and virtualenv invocation goes through a [`CommandRunner`], so
//! the workflow can be exercised against a scripted interpreter in tests.

use std::path::Path;

use crate::error::Result;

use super::command::{execute, CommandOptions, CommandResult};

/// Runs an external program and reports how it went.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing output.
    ///
    /// Returns `Err` only when the program cannot be started.
    fn run(&self, program: &Path, args: &[String], options: &CommandOptions)
        -> Result<CommandResult>;
}

/// Runner that spawns real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        execute(program, args, options)
    }
}
