//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. Each
//! call is recorded as an [`Invocation`] and answered by a responder closure,
//! so tests can script an interpreter and then assert on what was run.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use venvup::shell::{CommandOptions, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::succeeding();
//! runner
//!     .run(Path::new("python3"), &["--version".to_string()], &CommandOptions::default())
//!     .unwrap();
//!
//! assert_eq!(runner.calls().len(), 1);
//! assert!(runner.calls()[0].has_args(&["--version"]));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::command::{command_line, CommandOptions, CommandResult};
use super::runner::CommandRunner;

/// One recorded call to [`MockRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program that would have been launched.
    pub program: PathBuf,
    /// Arguments passed to it.
    pub args: Vec<String>,
    /// Extra environment variables.
    pub env: HashMap<String, String>,
}

impl Invocation {
    /// The invocation as a single command line.
    pub fn command_line(&self) -> String {
        command_line(&self.program, &self.args)
    }

    /// Whether `expected` appears as a contiguous run of arguments.
    pub fn has_args(&self, expected: &[&str]) -> bool {
        if expected.is_empty() {
            return true;
        }
        self.args
            .windows(expected.len())
            .any(|window| window.iter().zip(expected).all(|(a, b)| a == b))
    }
}

type Responder = Box<dyn Fn(&Invocation) -> Result<CommandResult>>;

/// Command runner that records calls and answers them from a closure.
pub struct MockRunner {
    responder: Responder,
    calls: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner answering every call with `responder`.
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&Invocation) -> Result<CommandResult> + 'static,
    {
        Self {
            responder: Box::new(responder),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// A runner where every command succeeds with empty output.
    pub fn succeeding() -> Self {
        Self::new(|_| Ok(ok("")))
    }

    /// Snapshot of every call made so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl std::fmt::Debug for MockRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockRunner")
            .field("calls", &self.calls.borrow().len())
            .finish()
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        let invocation = Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            env: options.env.clone(),
        };
        self.calls.borrow_mut().push(invocation.clone());
        (self.responder)(&invocation)
    }
}

/// Successful result carrying `stdout`.
pub fn ok(stdout: &str) -> CommandResult {
    CommandResult::success(stdout.to_string(), String::new())
}

/// Failed result with the given exit code and `stderr`.
pub fn failed(code: i32, stderr: &str) -> CommandResult {
    CommandResult::failure(Some(code), String::new(), stderr.to_string())
}
