//! Run configuration.
//!
//! [`Config`] is built once from the parsed command line and handed by
//! reference to every component; nothing reads arguments or process-wide
//! state after startup.

pub mod boolean;

pub use boolean::parse_bool;

use std::path::PathBuf;

use crate::cli::Cli;
use crate::ui::OutputMode;

/// Default environment provider.
pub const DEFAULT_PROVIDER: &str = "virtualenv";
/// Default environment directory name.
pub const DEFAULT_ENV_NAME: &str = "env";
/// Default linux requirements filename.
pub const DEFAULT_LINUX_REQUIREMENTS: &str = "requirements_linux.txt";
/// Default windows requirements filename.
pub const DEFAULT_WINDOWS_REQUIREMENTS: &str = "requirements_windows.txt";
/// Default mac requirements filename.
pub const DEFAULT_DARWIN_REQUIREMENTS: &str = "requirements_darwin.txt";
/// Requirements filename used when the platform-specific one is missing.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// Base interpreter used when none is configured.
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Environment provider name (only `virtualenv` is supported).
    pub provider: String,
    /// Name of the environment directory under the project home.
    pub env_name: String,
    /// Whether an existing environment is cleared before recreation.
    pub clear: bool,
    /// Project root, or a marker file inside it.
    pub project_dir: PathBuf,
    /// Requirements filename for linux hosts.
    pub linux_requirements: String,
    /// Requirements filename for windows hosts.
    pub windows_requirements: String,
    /// Requirements filename for mac hosts.
    pub darwin_requirements: String,
    /// Fallback requirements filename.
    pub default_requirements: String,
    /// Base interpreter that runs pip and the provider.
    pub python: PathBuf,
    /// How much of the run is printed.
    pub output_mode: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            env_name: DEFAULT_ENV_NAME.to_string(),
            clear: true,
            project_dir: PathBuf::from("."),
            linux_requirements: DEFAULT_LINUX_REQUIREMENTS.to_string(),
            windows_requirements: DEFAULT_WINDOWS_REQUIREMENTS.to_string(),
            darwin_requirements: DEFAULT_DARWIN_REQUIREMENTS.to_string(),
            default_requirements: DEFAULT_REQUIREMENTS.to_string(),
            python: PathBuf::from(default_python()),
            output_mode: OutputMode::Normal,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            provider: cli.provider.clone(),
            env_name: cli.name.clone(),
            clear: cli.clear,
            project_dir: cli
                .project_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            linux_requirements: cli.lin_req.clone(),
            windows_requirements: cli.win_req.clone(),
            darwin_requirements: cli.dar_req.clone(),
            default_requirements: cli.def_req.clone(),
            python: cli
                .python
                .clone()
                .unwrap_or_else(|| PathBuf::from(default_python())),
            output_mode: OutputMode::from_flags(cli.verbose, cli.quiet),
        }
    }
}
