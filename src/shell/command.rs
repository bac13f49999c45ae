//! External command execution.

use crate::error::{Result, VenvupError};
use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Environment variables (merged with the inherited environment).
    pub env: HashMap<String, String>,
}

/// Render a program and its arguments the way a user would type them.
pub fn command_line(program: &Path, args: &[String]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Execute a program directly (no shell) and capture its output.
///
/// A non-zero exit is reported through the `success` field; only a
/// failure to start the process is an error.
pub fn execute(program: &Path, args: &[String], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    let cmdline = command_line(program, args);
    tracing::debug!("Running: {}", cmdline);

    let mut cmd = Command::new(program);
    cmd.args(args);

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to start {}: {}", cmdline, e);
        VenvupError::CommandFailed {
            command: cmdline.clone(),
            code: None,
        }
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    tracing::debug!(
        "Finished {} with {:?} in {:?}",
        cmdline,
        output.status.code(),
        start.elapsed()
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_joins_program_and_args() {
        let line = command_line(
            Path::new("python3"),
            &["-m".to_string(), "pip".to_string(), "list".to_string()],
        );
        assert_eq!(line, "python3 -m pip list");
    }

    #[test]
    fn command_line_without_args_is_program() {
        assert_eq!(command_line(Path::new("/usr/bin/python3"), &[]), "/usr/bin/python3");
    }

    #[test]
    fn execute_missing_program_is_command_failed() {
        let result = execute(
            Path::new("/nonexistent/venvup-test-binary"),
            &[],
            &CommandOptions::default(),
        );
        match result {
            Err(VenvupError::CommandFailed { command, code }) => {
                assert_eq!(command, "/nonexistent/venvup-test-binary");
                assert_eq!(code, None);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn execute_captures_stdout() {
        let result = execute(
            Path::new("sh"),
            &["-c".to_string(), "echo hello".to_string()],
            &CommandOptions::default(),
        )
        .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_reports_nonzero_exit() {
        let result = execute(
            Path::new("sh"),
            &["-c".to_string(), "echo oops >&2; exit 3".to_string()],
            &CommandOptions::default(),
        )
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(result.stderr.contains("oops"));
    }

    #[cfg(unix)]
    #[test]
    fn execute_passes_env() {
        let mut env = HashMap::new();
        env.insert("VENVUP_TEST_VAR".to_string(), "from-test".to_string());
        let options = CommandOptions { env };

        let result = execute(
            Path::new("sh"),
            &["-c".to_string(), "echo $VENVUP_TEST_VAR".to_string()],
            &options,
        )
        .unwrap();

        assert!(result.stdout.contains("from-test"));
    }
}
