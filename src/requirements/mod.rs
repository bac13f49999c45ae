//! Requirements file selection and loading.
//!
//! - [`locator`] - Picks the requirements file, falling back to the default
//! - [`loader`] - Reads requirement entries from the chosen file

pub mod loader;
pub mod locator;

pub use loader::{load, parse_entries};
pub use locator::locate;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::platform::requirements_name_for;
use crate::ui::UserInterface;

/// Choose the requirements file for `platform_id` under `home`.
///
/// The platform-specific name is tried first, then the configured default.
pub fn select(
    config: &Config,
    platform_id: &str,
    home: &Path,
    ui: &mut dyn UserInterface,
) -> PathBuf {
    let candidate = requirements_name_for(platform_id, config);
    if candidate.is_none() {
        tracing::debug!("Platform '{}' has no requirements file of its own", platform_id);
    }
    locate(candidate, home, &config.default_requirements, ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn select_prefers_platform_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements_darwin.txt"), "six\n").unwrap();
        fs::write(temp.path().join("requirements.txt"), "six\n").unwrap();
        let mut ui = MockUI::new();

        let path = select(&Config::default(), "darwin", temp.path(), &mut ui);

        assert_eq!(path, temp.path().join("requirements_darwin.txt"));
    }

    #[test]
    fn select_falls_back_for_missing_platform_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "six\n").unwrap();
        let mut ui = MockUI::new();

        let path = select(&Config::default(), "linux", temp.path(), &mut ui);

        assert_eq!(path, temp.path().join("requirements.txt"));
        assert!(ui.has_warning("requirements_linux.txt"));
    }

    #[test]
    fn select_falls_back_for_unknown_platform() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements_linux.txt"), "six\n").unwrap();
        let mut ui = MockUI::new();

        let path = select(&Config::default(), "freebsd", temp.path(), &mut ui);

        assert_eq!(path, temp.path().join("requirements.txt"));
        assert!(ui.has_warning("fallback"));
    }
}
