//! Vespa document client binary

use clap::Parser;
use std::process::ExitCode;
use vespa_document::Console;
use vespa_document::http::combined_cli::{Cli, handle_cli_command, report_error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    vespa_document::telemetry::init();
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let mut console = Console::stdio();

    match handle_cli_command(&client, cli, &mut console).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            report_error(&mut console, &e);
            ExitCode::FAILURE
        }
    }
}
