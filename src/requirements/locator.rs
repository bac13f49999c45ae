//! Requirements file selection.

use std::path::{Path, PathBuf};

use crate::ui::UserInterface;

/// Resolve a requirements filename under `home`.
///
/// When `candidate` names an existing regular file under `home`, that path
/// is returned. Otherwise a fallback notice is shown and `home` joined with
/// `default_name` is returned without checking that it exists; the loader
/// deals with a missing default.
pub fn locate(
    candidate: Option<&str>,
    home: &Path,
    default_name: &str,
    ui: &mut dyn UserInterface,
) -> PathBuf {
    let fallback = absolute(&home.join(default_name));

    let Some(candidate) = candidate else {
        ui.warning(&format!(
            "No requirements file configured for this platform, fallback to default {}",
            default_name
        ));
        return fallback;
    };

    let full_path = home.join(candidate);
    if full_path.is_file() {
        tracing::debug!("Found requirements file {}", full_path.display());
        absolute(&full_path)
    } else {
        ui.warning(&format!(
            "Unable to find {}, fallback to default {}",
            full_path.display(),
            default_name
        ));
        fallback
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_candidate_is_returned() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements_linux.txt"), "six\n").unwrap();
        let mut ui = MockUI::new();

        let path = locate(
            Some("requirements_linux.txt"),
            temp.path(),
            "requirements.txt",
            &mut ui,
        );

        assert_eq!(path, temp.path().join("requirements_linux.txt"));
        assert!(path.is_absolute());
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_candidate_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements_linux.txt"), "six\n").unwrap();
        let mut ui = MockUI::new();

        let path = locate(
            Some("requirements_custom.txt"),
            temp.path(),
            "requirements.txt",
            &mut ui,
        );

        assert_eq!(path, temp.path().join("requirements.txt"));
        assert!(path.is_absolute());
        assert!(ui.has_warning("requirements_custom.txt"));
        assert!(ui.has_warning("fallback to default requirements.txt"));
    }

    #[test]
    fn directory_candidate_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("requirements_linux.txt")).unwrap();
        let mut ui = MockUI::new();

        let path = locate(
            Some("requirements_linux.txt"),
            temp.path(),
            "requirements.txt",
            &mut ui,
        );

        assert_eq!(path, temp.path().join("requirements.txt"));
        assert!(ui.has_warning("fallback"));
    }

    #[test]
    fn unset_candidate_falls_back() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let path = locate(None, temp.path(), "requirements.txt", &mut ui);

        assert_eq!(path, temp.path().join("requirements.txt"));
        assert!(ui.has_warning("fallback to default requirements.txt"));
    }

    #[test]
    fn default_is_not_validated() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let path = locate(Some("nope.txt"), temp.path(), "also-missing.txt", &mut ui);

        assert_eq!(path, temp.path().join("also-missing.txt"));
        assert!(!path.exists());
    }
}
