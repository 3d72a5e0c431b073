//! # IPC Parser CLI
//!
//! 命令行接口入口点。

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};

use ipc_parser::commands::run_pipeline;
use ipc_parser::{Cli, CliError};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            e.print().ok();
            return ExitCode::from(CliError::usage(e.kind().to_string()).exit_code());
        }
    };

    if let Err(e) = init_logging(&cli) {
        eprintln!("{e}");
        return ExitCode::from(e.exit_code());
    }

    info!(version = env!("CARGO_PKG_VERSION"), "IPC parser starting");

    match run_pipeline(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            report_failure(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Initialize logging based on CLI options
fn init_logging(cli: &Cli) -> Result<(), CliError> {
    observability::init_with_config(observability::ObservabilityConfig {
        log_format: cli.log_format.into(),
        metrics_port: (cli.metrics_port != 0).then_some(cli.metrics_port),
        default_log_level: cli.log_level().to_string(),
    })?;
    Ok(())
}

/// User-facing message for a fatal error
fn report_failure(err: &CliError) {
    match err {
        CliError::RecordParse(_) => println!("Error: Invalid Message Input"),
        other => eprintln!("{other}"),
    }
}
