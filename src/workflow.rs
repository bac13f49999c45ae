//! The setup workflow.
//!
//! Runs the steps in a fixed order:
//!
//! 1. Make sure the environment provider is installed (installing it if not)
//! 2. Create or refresh the environment directory
//! 3. Activate it
//! 4. Pick and read the requirements file for the platform
//! 5. Install the requirements into the environment
//! 6. Print the freeze report
//!
//! Any error stops the run where it happens.

use std::path::PathBuf;

use crate::config::Config;
use crate::environment::{CreateAction, EnvContext, EnvironmentManager};
use crate::error::{Result, VenvupError};
use crate::inspector::{InstalledPackage, PackageInspector};
use crate::installer::PackageInstaller;
use crate::platform::host_identifier;
use crate::requirements;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// What a completed run did.
#[derive(Debug, Clone)]
pub struct SetupSummary {
    /// The provider package found (or installed) in the base interpreter.
    pub provider: InstalledPackage,
    /// How the environment directory was handled.
    pub action: CreateAction,
    /// The activated environment.
    pub env: EnvContext,
    /// Requirements file that was selected.
    pub requirements_file: PathBuf,
    /// Entries read from it, in install order.
    pub requested: Vec<String>,
    /// Packages the freeze report listed.
    pub frozen: Vec<InstalledPackage>,
}

/// Sequences the setup steps for one configuration.
pub struct SetupWorkflow<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    platform_id: String,
}

impl<'a> SetupWorkflow<'a> {
    /// Create a workflow for the host platform.
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            platform_id: host_identifier().to_string(),
        }
    }

    /// Pretend to run on `platform_id` instead of the host.
    pub fn with_platform(mut self, platform_id: &str) -> Self {
        self.platform_id = platform_id.to_string();
        self
    }

    /// Run every step.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<SetupSummary> {
        let inspector = PackageInspector::new(self.runner);
        let installer = PackageInstaller::new(&self.config.python, self.runner);

        let provider = self.ensure_provider(&inspector, &installer, ui)?;
        ui.message(&format!(
            "virtual environment provider is: {}",
            provider.key()
        ));

        let manager = EnvironmentManager::new(self.config, self.runner, &self.platform_id)?;
        let action = manager.create(self.config.clear, ui)?;
        let env = manager.activate()?;

        let requirements_file =
            requirements::select(self.config, &self.platform_id, manager.home(), ui);
        let requested = requirements::load(&requirements_file, &self.platform_id, ui);
        installer.install_into(&env, &requested, ui)?;

        let frozen = inspector.freeze(&env, ui)?;
        ui.success(&format!(
            "Environment ready at {} ({} requirements installed)",
            env.root().display(),
            requested.len()
        ));

        Ok(SetupSummary {
            provider,
            action,
            env,
            requirements_file,
            requested,
            frozen,
        })
    }

    fn ensure_provider(
        &self,
        inspector: &PackageInspector<'_>,
        installer: &PackageInstaller<'_>,
        ui: &mut dyn UserInterface,
    ) -> Result<InstalledPackage> {
        let python = &self.config.python;
        let provider = &self.config.provider;

        if let Some(found) = inspector.find_provider(python, provider)? {
            return Ok(found);
        }

        ui.warning(&format!(
            "no virtual environment provider installed, installing {}",
            provider
        ));
        if let Err(e) = installer.install(std::slice::from_ref(provider), ui) {
            tracing::debug!("Installing {} failed: {}", provider, e);
            return Err(VenvupError::ProviderUnavailable {
                provider: provider.clone(),
            });
        }

        inspector
            .find_provider(python, provider)?
            .ok_or_else(|| VenvupError::ProviderUnavailable {
                provider: provider.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::mock::{failed, ok};
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    const WITH_PROVIDER: &str =
        r#"[{"name": "virtualenv", "version": "20.26.0", "location": "/usr/lib/python3"}]"#;
    const WITHOUT_PROVIDER: &str =
        r#"[{"name": "pip", "version": "24.0", "location": "/usr/lib/python3"}]"#;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("env").join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("activate_this.py"), "").unwrap();
        temp
    }

    fn config_for(temp: &TempDir) -> Config {
        Config {
            project_dir: temp.path().to_path_buf(),
            python: PathBuf::from("python3"),
            ..Config::default()
        }
    }

    #[test]
    fn provider_is_installed_when_missing() {
        let temp = project();
        let config = config_for(&temp);
        let installed = Rc::new(Cell::new(false));
        let state = installed.clone();
        let runner = MockRunner::new(move |inv| {
            if inv.has_args(&["pip", "install", "virtualenv"]) {
                state.set(true);
                Ok(ok(""))
            } else if inv.has_args(&["pip", "list"]) && inv.program == PathBuf::from("python3") {
                Ok(ok(if state.get() { WITH_PROVIDER } else { WITHOUT_PROVIDER }))
            } else if inv.has_args(&["pip", "list"]) {
                Ok(ok("[]"))
            } else {
                Ok(ok(""))
            }
        });
        let mut ui = MockUI::new();

        let summary = SetupWorkflow::new(&config, &runner)
            .with_platform("linux")
            .run(&mut ui)
            .unwrap();

        assert!(installed.get());
        assert_eq!(summary.provider.key(), "virtualenv");
        assert!(ui.has_warning("no virtual environment provider installed, installing virtualenv"));
        assert!(ui.has_message("virtual environment provider is: virtualenv"));
    }

    #[test]
    fn provider_still_missing_after_install_is_fatal() {
        let temp = project();
        let config = config_for(&temp);
        let runner = MockRunner::new(|inv| {
            if inv.has_args(&["pip", "list"]) {
                Ok(ok(WITHOUT_PROVIDER))
            } else {
                Ok(ok(""))
            }
        });
        let mut ui = MockUI::new();

        let err = SetupWorkflow::new(&config, &runner)
            .with_platform("linux")
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, VenvupError::ProviderUnavailable { .. }));
        assert_eq!(err.to_string(), "Unable to install virtualenv");
        assert!(runner.calls().iter().all(|c| !c.has_args(&["virtualenv", "--clear"])));
    }

    #[test]
    fn provider_install_failure_is_fatal() {
        let temp = project();
        let config = config_for(&temp);
        let runner = MockRunner::new(|inv| {
            if inv.has_args(&["pip", "install"]) {
                Ok(failed(1, "network unreachable"))
            } else {
                Ok(ok(WITHOUT_PROVIDER))
            }
        });
        let mut ui = MockUI::new();

        let err = SetupWorkflow::new(&config, &runner)
            .with_platform("linux")
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, VenvupError::ProviderUnavailable { .. }));
    }

    #[test]
    fn unsupported_provider_aborts_before_creation() {
        let temp = project();
        let config = Config {
            provider: "venv".to_string(),
            ..config_for(&temp)
        };
        let runner = MockRunner::new(|inv| {
            if inv.has_args(&["pip", "list"]) {
                Ok(ok(r#"[{"name": "venv-tools", "version": "1.0", "location": "/usr/lib"}]"#))
            } else {
                Ok(ok(""))
            }
        });
        let mut ui = MockUI::new();

        let err = SetupWorkflow::new(&config, &runner)
            .with_platform("linux")
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, VenvupError::UnsupportedProvider { .. }));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn missing_requirements_file_installs_nothing() {
        let temp = project();
        let config = config_for(&temp);
        let runner = MockRunner::new(|inv| {
            if inv.has_args(&["pip", "list"]) && inv.program == PathBuf::from("python3") {
                Ok(ok(WITH_PROVIDER))
            } else if inv.has_args(&["pip", "list"]) {
                Ok(ok("[]"))
            } else {
                Ok(ok(""))
            }
        });
        let mut ui = MockUI::new();

        let summary = SetupWorkflow::new(&config, &runner)
            .with_platform("linux")
            .run(&mut ui)
            .unwrap();

        assert!(summary.requested.is_empty());
        assert!(summary.frozen.is_empty());
        assert!(ui.has_error("Cannot find requirements file at"));
        assert!(runner.calls().iter().all(|c| !c.has_args(&["pip", "install"])));
    }
}
