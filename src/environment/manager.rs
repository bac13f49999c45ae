//! Environment directory management.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, VenvupError};
use crate::shell::{command_line, CommandOptions, CommandRunner};
use crate::ui::UserInterface;

use super::context::EnvContext;
use super::provider::Provider;

/// What `create` did to the environment directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    /// The directory did not exist.
    Created,
    /// The directory existed and was cleared first.
    Cleared,
    /// The directory existed and was refreshed in place.
    Updated,
}

impl CreateAction {
    /// Decide the action from the directory state and the clear flag.
    pub fn plan(exists: bool, clear: bool) -> Self {
        match (exists, clear) {
            (false, _) => Self::Created,
            (true, true) => Self::Cleared,
            (true, false) => Self::Updated,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Created => "Creating",
            Self::Cleared => "Clearing and creating",
            Self::Updated => "Updating",
        }
    }
}

impl fmt::Display for CreateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Resolve the project home from a directory or a marker file inside it.
///
/// A file yields its containing directory; anything else (including a path
/// that does not exist yet) yields the path itself. Both are absolute.
pub fn resolve_home(path_hint: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path_hint)?;
    if absolute.is_file() {
        Ok(absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(absolute))
    } else {
        Ok(absolute)
    }
}

/// Creates and activates the project's virtual environment.
pub struct EnvironmentManager<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    home: PathBuf,
    platform_id: String,
}

impl<'a> EnvironmentManager<'a> {
    /// Create a manager for `config`, resolving the project home once.
    pub fn new(
        config: &'a Config,
        runner: &'a dyn CommandRunner,
        platform_id: &str,
    ) -> Result<Self> {
        Ok(Self {
            config,
            runner,
            home: resolve_home(&config.project_dir)?,
            platform_id: platform_id.to_string(),
        })
    }

    /// The resolved project home.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Absolute path of the environment directory.
    pub fn env_path(&self) -> PathBuf {
        self.home.join(&self.config.env_name)
    }

    /// Create the environment, or refresh it if it already exists.
    ///
    /// An unsupported provider is rejected before anything runs. How
    /// `clear` wipes an existing directory is up to the provider.
    pub fn create(&self, clear: bool, ui: &mut dyn UserInterface) -> Result<CreateAction> {
        let provider = Provider::from_name(&self.config.provider)?;
        let path = self.env_path();
        let action = CreateAction::plan(path.exists(), clear);

        ui.message(&format!(
            "{} virtual environment at: {}",
            action,
            path.display()
        ));

        let args = provider.create_args(&path, clear);
        let result = self
            .runner
            .run(&self.config.python, &args, &CommandOptions::default())?;

        if ui.output_mode().shows_command_output() && !result.stdout.is_empty() {
            ui.message(result.stdout.trim_end());
        }

        if !result.success {
            let message = if result.stderr.trim().is_empty() {
                format!(
                    "'{}' exited with code {:?}",
                    command_line(&self.config.python, &args),
                    result.exit_code
                )
            } else {
                result.stderr.trim().to_string()
            };
            return Err(VenvupError::EnvironmentCreationFailed { path, message });
        }

        tracing::debug!("{:?} environment at {}", action, path.display());
        Ok(action)
    }

    /// Activate the environment by locating its activation script.
    ///
    /// Returns the context later steps use to run inside the environment;
    /// the current process is left untouched.
    pub fn activate(&self) -> Result<EnvContext> {
        let context = EnvContext::new(self.env_path(), &self.platform_id);
        let script = context.activation_script();
        if !script.is_file() {
            return Err(VenvupError::ActivationFailed { script });
        }
        tracing::debug!("Activated environment via {}", script.display());
        Ok(context)
    }
}
