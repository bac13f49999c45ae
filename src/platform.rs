//! Host platform identification.
//!
//! Platforms are named with the identifiers Python's `sys.platform` uses
//! (`win32`, `linux`, `darwin`), since those are what requirements files
//! and environment layouts are organised around.

use crate::config::Config;

/// Platform bucket that selects a requirements file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Mac,
}

impl Platform {
    /// Classify a platform identifier.
    ///
    /// Identifiers starting with `win` are windows, identifiers starting
    /// with `linux` are linux, and exactly `darwin` is mac. Anything else
    /// is unclassified.
    ///
    /// ```
    /// use venvup::platform::Platform;
    ///
    /// assert_eq!(Platform::from_identifier("win32"), Some(Platform::Windows));
    /// assert_eq!(Platform::from_identifier("linux2"), Some(Platform::Linux));
    /// assert_eq!(Platform::from_identifier("freebsd"), None);
    /// ```
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        if identifier.starts_with("win") {
            Some(Self::Windows)
        } else if identifier.starts_with("linux") {
            Some(Self::Linux)
        } else if identifier == "darwin" {
            Some(Self::Mac)
        } else {
            None
        }
    }

    /// The configured requirements filename for this platform.
    pub fn requirements_name(self, config: &Config) -> &str {
        match self {
            Self::Windows => &config.windows_requirements,
            Self::Linux => &config.linux_requirements,
            Self::Mac => &config.darwin_requirements,
        }
    }
}

/// Requirements filename for `identifier`, or `None` when the platform is
/// not one of the three known buckets.
pub fn requirements_name_for<'a>(identifier: &str, config: &'a Config) -> Option<&'a str> {
    Platform::from_identifier(identifier).map(|platform| platform.requirements_name(config))
}

/// Identifier of the platform venvup was built for.
pub fn host_identifier() -> &'static str {
    match std::env::consts::OS {
        "windows" => "win32",
        "macos" => "darwin",
        other => other,
    }
}

/// Directory inside an environment that holds its scripts and interpreter.
pub fn scripts_dir_name(identifier: &str) -> &'static str {
    if identifier.starts_with("win") {
        "Scripts"
    } else {
        "bin"
    }
}

/// File name of the interpreter inside the scripts directory.
pub fn interpreter_name(identifier: &str) -> &'static str {
    if identifier.starts_with("win") {
        "python.exe"
    } else {
        "python"
    }
}

/// Check if running in a CI environment.
///
/// Used in `main()` to pick the plain, non-interactive UI.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
