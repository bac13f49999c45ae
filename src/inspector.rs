//! Installed-package inspection.
//!
//! Packages are read from `pip list --format=json --verbose`, which
//! includes each package's install location. Nothing is cached: every call
//! asks the interpreter again, so a listing taken after an install sees the
//! new packages.

use serde::Deserialize;
use std::path::Path;

use crate::environment::EnvContext;
use crate::error::{Result, VenvupError};
use crate::shell::{command_line, CommandOptions, CommandRunner};
use crate::ui::UserInterface;

const REPORT_RULE: &str = "==================";

/// A package visible to an interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstalledPackage {
    /// Project name as pip reports it.
    pub name: String,
    /// Installed version.
    pub version: String,
    /// Directory the package is installed in.
    #[serde(default)]
    pub location: String,
}

impl InstalledPackage {
    /// Lower-cased project name, the form used for matching and reports.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// `name==version` line for the freeze report.
    pub fn freeze_line(&self) -> String {
        format!("{}=={}", self.key(), self.version)
    }
}

/// Parse pip's JSON package listing.
pub fn parse_package_list(json: &str) -> serde_json::Result<Vec<InstalledPackage>> {
    serde_json::from_str(json.trim())
}

/// First package whose key contains `provider` as a substring.
///
/// Substring matching means `virtualenv-clone` also matches `virtualenv`;
/// whichever pip lists first wins.
pub fn find_by_substring(packages: Vec<InstalledPackage>, provider: &str) -> Option<InstalledPackage> {
    let needle = provider.to_lowercase();
    packages.into_iter().find(|p| p.key().contains(&needle))
}

/// Packages whose location contains `env_root`, compared case-insensitively.
pub fn packages_in(packages: Vec<InstalledPackage>, env_root: &Path) -> Vec<InstalledPackage> {
    let root = env_root.to_string_lossy().to_lowercase();
    packages
        .into_iter()
        .filter(|p| p.location.to_lowercase().contains(&root))
        .collect()
}

/// Queries interpreters for their installed packages.
pub struct PackageInspector<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> PackageInspector<'a> {
    /// Create an inspector that runs pip through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Every package `python` can see, in pip's order.
    pub fn list_installed(
        &self,
        python: &Path,
        options: &CommandOptions,
    ) -> Result<Vec<InstalledPackage>> {
        let args: Vec<String> = [
            "-m",
            "pip",
            "list",
            "--format=json",
            "--verbose",
            "--disable-pip-version-check",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let command = command_line(python, &args);

        let result = self.runner.run(python, &args, options)?;
        if !result.success {
            tracing::debug!("pip list stderr: {}", result.stderr.trim());
            return Err(VenvupError::CommandFailed {
                command,
                code: result.exit_code,
            });
        }

        let packages = parse_package_list(&result.stdout)
            .map_err(|source| VenvupError::PackageListParse { command, source })?;
        tracing::debug!("{} reports {} packages", python.display(), packages.len());
        Ok(packages)
    }

    /// Look for the environment provider among the packages `python` sees.
    pub fn find_provider(&self, python: &Path, provider: &str) -> Result<Option<InstalledPackage>> {
        let packages = self.list_installed(python, &CommandOptions::default())?;
        Ok(find_by_substring(packages, provider))
    }

    /// Print the packages installed inside `env` and return them.
    pub fn freeze(
        &self,
        env: &EnvContext,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<InstalledPackage>> {
        let packages = self.list_installed(env.interpreter(), &env.command_options())?;
        let installed = packages_in(packages, env.root());

        ui.report(REPORT_RULE);
        ui.report("pip freeze");
        for package in &installed {
            ui.report(&format!("\t{}", package.freeze_line()));
        }
        ui.report(REPORT_RULE);

        Ok(installed)
    }
}
