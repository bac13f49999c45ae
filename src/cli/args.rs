//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Flags use underscore
//! spellings (`--project_dir`, `--lin_req`, ...) and the multi-letter
//! single-dash shorthands `-lin`, `-win` and `-dar`, which clap cannot
//! express and [`normalize_args`] rewrites.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{
    parse_bool, DEFAULT_DARWIN_REQUIREMENTS, DEFAULT_ENV_NAME, DEFAULT_LINUX_REQUIREMENTS,
    DEFAULT_PROVIDER, DEFAULT_REQUIREMENTS, DEFAULT_WINDOWS_REQUIREMENTS,
};

/// Python virtualenv helper.
///
/// Creates a virtual environment in the project directory and installs the
/// requirements file matching the host platform into it.
#[derive(Debug, Parser)]
#[command(name = "venvup")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Virtual environment provider, e.g. virtualenv
    #[arg(short = 'p', long, default_value = DEFAULT_PROVIDER)]
    pub provider: String,

    /// Name of the virtual environment root dir
    #[arg(long, default_value = DEFAULT_ENV_NAME)]
    pub name: String,

    /// Whether to clear the existing env or not (yes/no, true/false, 1/0)
    #[arg(
        long,
        default_value = "true",
        value_parser = parse_bool,
        action = ArgAction::Set,
        value_name = "BOOL"
    )]
    pub clear: bool,

    /// Project root directory, or a file inside it (defaults to the current directory)
    #[arg(long = "project_dir", value_name = "PATH")]
    pub project_dir: Option<PathBuf>,

    /// Name of linux requirements file
    #[arg(long = "lin_req", default_value = DEFAULT_LINUX_REQUIREMENTS, value_name = "FILE")]
    pub lin_req: String,

    /// Name of windows requirements file
    #[arg(long = "win_req", default_value = DEFAULT_WINDOWS_REQUIREMENTS, value_name = "FILE")]
    pub win_req: String,

    /// Name of darwin requirements file
    #[arg(long = "dar_req", default_value = DEFAULT_DARWIN_REQUIREMENTS, value_name = "FILE")]
    pub dar_req: String,

    /// Name of default requirements file
    #[arg(long = "def_req", default_value = DEFAULT_REQUIREMENTS, value_name = "FILE")]
    pub def_req: String,

    /// Python interpreter used to run pip and the provider
    #[arg(long, env = "VENVUP_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Show output of pip and the provider
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the freeze report and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Single-dash shorthands and the long flags they stand for.
const LEGACY_SHORTHANDS: &[(&str, &str)] = &[
    ("-lin", "--lin_req"),
    ("-win", "--win_req"),
    ("-dar", "--dar_req"),
];

/// Rewrite `-lin`, `-win` and `-dar` (also in `-lin=FILE` form) to their
/// long flags so clap can parse them. Everything after `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            for (short, long) in LEGACY_SHORTHANDS {
                if text == *short {
                    return OsString::from(*long);
                }
                if let Some(value) = text.strip_prefix(short).and_then(|r| r.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}
