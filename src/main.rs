//! Revue CLI entrypoint for review browsing and analysis.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use revue::config::OperationMode;
use revue::{CliError, RevueConfig};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CliError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Summary => revue::cli::summary::run(&config),
        OperationMode::Export => revue::cli::export_reviews::run(&config),
        OperationMode::WordCloud => revue::cli::word_cloud::run(&config),
        OperationMode::Browse => revue::cli::browse::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CliError::Load`] when ortho-config fails to parse arguments or
/// load configuration files.
fn load_config() -> Result<RevueConfig, CliError> {
    RevueConfig::load().map_err(|error| {
        CliError::Load(revue::LoadError::Configuration {
            message: error.to_string(),
        })
    })
}
