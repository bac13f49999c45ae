//! Activated environment handle.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::platform::{interpreter_name, scripts_dir_name};
use crate::shell::CommandOptions;

/// Name of the activation script virtualenv writes into the scripts dir.
pub const ACTIVATION_SCRIPT: &str = "activate_this.py";

/// An activated virtual environment.
///
/// Holding one of these is what "activated" means: commands that should see
/// the environment are run with [`EnvContext::command_options`] instead of
/// changing the current process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvContext {
    root: PathBuf,
    scripts_dir: PathBuf,
    interpreter: PathBuf,
}

impl EnvContext {
    /// Describe the environment at `root` laid out for `platform_id`.
    pub fn new(root: impl Into<PathBuf>, platform_id: &str) -> Self {
        let root = root.into();
        let scripts_dir = root.join(scripts_dir_name(platform_id));
        let interpreter = scripts_dir.join(interpreter_name(platform_id));
        Self {
            root,
            scripts_dir,
            interpreter,
        }
    }

    /// Environment root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the environment's scripts.
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// The environment's own interpreter.
    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    /// Path of the provider-generated activation script.
    pub fn activation_script(&self) -> PathBuf {
        self.scripts_dir.join(ACTIVATION_SCRIPT)
    }

    /// Variables a process needs to run inside the environment.
    ///
    /// `VIRTUAL_ENV` points at the root and `PATH` gets the scripts
    /// directory in front of the inherited value.
    pub fn env_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert(
            "VIRTUAL_ENV".to_string(),
            self.root.to_string_lossy().to_string(),
        );

        let inherited = std::env::var_os("PATH").unwrap_or_default();
        let mut entries = vec![self.scripts_dir.clone()];
        entries.extend(std::env::split_paths(&inherited));
        match std::env::join_paths(entries) {
            Ok(path) => {
                vars.insert("PATH".to_string(), os_to_string(path));
            }
            Err(e) => tracing::debug!("Leaving PATH untouched: {}", e),
        }
        vars
    }

    /// Command options for running a program inside the environment.
    pub fn command_options(&self) -> CommandOptions {
        CommandOptions {
            env: self.env_vars(),
        }
    }
}

fn os_to_string(value: OsString) -> String {
    value.to_string_lossy().to_string()
}
