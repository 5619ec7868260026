//! Combined CLI interface implementation for the Vespa document client

use crate::console::Console;
use crate::error::DocumentError;
use crate::http::document::{
    cli::{DocumentArgs, handle_document_command},
    client::Outcome,
};
use crate::target::Target;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "vespa-document")]
#[command(about = "Vespa document operations client")]
#[command(version)]
pub struct Cli {
    /// Target to talk to: 'local' or a base URL such as http://host:8080
    #[arg(
        short,
        long,
        env = "VESPA_TARGET",
        default_value = "local",
        value_parser = Target::parse
    )]
    pub target: Target,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Issue document operations (put by default)
    Document(DocumentArgs),
}

pub async fn handle_cli_command<O: Write, E: Write>(
    client: &reqwest::Client,
    cli: Cli,
    console: &mut Console<O, E>,
) -> Result<Outcome, DocumentError> {
    match cli.command {
        Commands::Document(args) => {
            handle_document_command(client, &cli.target, args, console).await
        }
    }
}

/// Reports a failure that happened before or instead of an HTTP exchange.
pub fn report_error<O: Write, E: Write>(console: &mut Console<O, E>, error: &DocumentError) {
    console.error(&[&error.to_string()]);
    if let Some(detail) = error.detail() {
        console.detail(&detail);
    }
}
