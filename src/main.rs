//! venvup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use venvup::cli::{normalize_args, Cli};
use venvup::config::Config;
use venvup::platform::is_ci;
use venvup::shell::SystemRunner;
use venvup::ui::create_ui;
use venvup::workflow::SetupWorkflow;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("venvup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("venvup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_tracing(cli.debug);

    tracing::debug!("venvup starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config = Config::from(&cli);
    let mut ui = create_ui(!is_ci(), config.output_mode);

    let runner = SystemRunner::new();

    match SetupWorkflow::new(&config, &runner).run(ui.as_mut()) {
        Ok(summary) => {
            tracing::debug!(
                "Installed {} requirements from {}",
                summary.requested.len(),
                summary.requirements_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
