//! Package installation through pip.
//!
//! Every package is installed with its own `pip install` call, in order.
//! The first failure stops the batch; nothing is retried.

use std::path::Path;

use crate::environment::EnvContext;
use crate::error::{Result, VenvupError};
use crate::shell::{CommandOptions, CommandRunner};
use crate::ui::UserInterface;

/// Installs packages by running `python -m pip install`.
pub struct PackageInstaller<'a> {
    python: &'a Path,
    runner: &'a dyn CommandRunner,
}

impl<'a> PackageInstaller<'a> {
    /// Create an installer driving the base interpreter `python`.
    pub fn new(python: &'a Path, runner: &'a dyn CommandRunner) -> Self {
        Self { python, runner }
    }

    /// Install each package into the base interpreter.
    pub fn install(&self, names: &[String], ui: &mut dyn UserInterface) -> Result<()> {
        let options = CommandOptions::default();
        for name in names {
            let args = pip_install_args(None, name);
            self.install_one(self.python, &args, &options, name, ui)?;
        }
        Ok(())
    }

    /// Install each package into the environment described by `env`.
    ///
    /// Uses the environment's interpreter with `--prefix` pointing at the
    /// environment root, so packages land inside it.
    pub fn install_into(
        &self,
        env: &EnvContext,
        names: &[String],
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let options = env.command_options();
        for name in names {
            let args = pip_install_args(Some(env.root()), name);
            self.install_one(env.interpreter(), &args, &options, name, ui)?;
        }
        Ok(())
    }

    fn install_one(
        &self,
        program: &Path,
        args: &[String],
        options: &CommandOptions,
        package: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        ui.message(&format!("Installing {}", package));
        let result = self.runner.run(program, args, options)?;

        if ui.output_mode().shows_command_output() {
            if !result.stdout.trim().is_empty() {
                ui.message(result.stdout.trim_end());
            }
            if !result.stderr.trim().is_empty() {
                ui.message(result.stderr.trim_end());
            }
        }

        if result.success {
            Ok(())
        } else {
            tracing::debug!("pip stderr for {}: {}", package, result.stderr.trim());
            Err(VenvupError::PackageInstallFailed {
                package: package.to_string(),
                code: result.exit_code,
            })
        }
    }
}

fn pip_install_args(prefix: Option<&Path>, package: &str) -> Vec<String> {
    let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
    if let Some(prefix) = prefix {
        args.push("--prefix".to_string());
        args.push(prefix.to_string_lossy().to_string());
    }
    args.push(package.to_string());
    args
}
