//! Document CLI interface implementation

use super::client::{Outcome, get, put};
use crate::console::Console;
use crate::error::DocumentError;
use crate::target::Target;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::PathBuf;

// =============================================================================
// DOCUMENT CLI COMMANDS
// =============================================================================

/// `document <id> <file>` is shorthand for `document put <id> <file>`.
#[derive(Args, Debug)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct DocumentArgs {
    #[command(subcommand)]
    pub command: Option<DocumentCommands>,
    /// Document id, e.g. mynamespace/mydocumenttype/myid
    #[arg(required = true, value_parser = NonEmptyStringValueParser::new())]
    pub document_id: Option<String>,
    /// File holding the document JSON
    #[arg(required = true)]
    pub json_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum DocumentCommands {
    /// Puts the document in the given file
    Put {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        document_id: String,
        json_file: PathBuf,
    },
    /// Gets a document
    Get {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        document_id: String,
    },
}

impl DocumentArgs {
    pub fn into_command(self) -> DocumentCommands {
        match self.command {
            Some(command) => command,
            None => DocumentCommands::Put {
                document_id: self.document_id.unwrap_or_default(),
                json_file: self.json_file.unwrap_or_default(),
            },
        }
    }
}

// =============================================================================
// DOCUMENT COMMAND HANDLERS
// =============================================================================

pub async fn handle_document_command<O: Write, E: Write>(
    client: &reqwest::Client,
    target: &Target,
    args: DocumentArgs,
    console: &mut Console<O, E>,
) -> Result<Outcome, DocumentError> {
    match args.into_command() {
        DocumentCommands::Put {
            document_id,
            json_file,
        } => put(client, target, &document_id, &json_file, console).await,
        DocumentCommands::Get { document_id } => get(&document_id),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
