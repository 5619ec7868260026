//! Document API operations

use crate::console::Console;
use crate::error::DocumentError;
use crate::http::client::{display_host, http_do};
use crate::target::{ServiceContext, Target};
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const DOCUMENT_API_PATH: &str = "/document/v1/";
pub const DOCUMENT_TIMEOUT: Duration = Duration::from_secs(60);
pub const SERVICE_DESCRIPTION: &str = "Container (document API)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The document API answered 4xx: the document itself was refused.
    ClientRejected,
    /// Any other status, or no response at all.
    ServerOrOther,
}

impl Outcome {
    pub fn classify(status: StatusCode) -> Self {
        if status == StatusCode::OK {
            Outcome::Success
        } else if status.is_client_error() {
            Outcome::ClientRejected
        } else {
            Outcome::ServerOrOther
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// `base_url` + `/document/v1/` + `document_id`, with the id appended verbatim.
///
/// Ids the URL parser would rewrite are rejected: dot segments (also in their
/// `%2e` spellings) collapse onto another document's path, and `?` or `#`
/// move part of the id out of the path.
pub fn document_url(base_url: &str, document_id: &str) -> Result<Url, DocumentError> {
    let raw = format!("{base_url}{DOCUMENT_API_PATH}{document_id}");
    if document_id.split('/').any(is_dot_segment) {
        return Err(DocumentError::invalid_url(
            &raw,
            "document id must not contain '.' or '..' path segments",
        ));
    }
    if document_id.contains(['?', '#']) {
        return Err(DocumentError::invalid_url(
            &raw,
            "document id must not contain '?' or '#'",
        ));
    }
    Url::parse(&raw).map_err(|e| DocumentError::invalid_url(&raw, e))
}

fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

pub async fn put<O: Write, E: Write>(
    client: &reqwest::Client,
    target: &Target,
    document_id: &str,
    json_file: &Path,
    console: &mut Console<O, E>,
) -> Result<Outcome, DocumentError> {
    let url = document_url(&target.base_url(ServiceContext::Document), document_id)?;

    let file = tokio::fs::File::open(json_file)
        .await
        .map_err(|e| DocumentError::file_open(json_file, e))?;

    let request = client
        .post(url.clone())
        .header(CONTENT_TYPE, "application/json")
        .body(file)
        .build()
        .map_err(|e| DocumentError::invalid_url(url.as_str(), e))?;

    debug!(document_id, file = %json_file.display(), "Putting document");
    let Some(response) = http_do(
        client,
        request,
        DOCUMENT_TIMEOUT,
        SERVICE_DESCRIPTION,
        console,
    )
    .await
    else {
        return Ok(Outcome::ServerOrOther);
    };

    let status = response.status();
    let outcome = Outcome::classify(status);
    match outcome {
        Outcome::Success => {
            console
                .success(&format!("put {document_id}"))
                .map_err(|source| DocumentError::Output { source })?;
        }
        Outcome::ClientRejected => {
            console.error(&["Invalid document", &format!("({status}):")]);
            console.print_response(response).await;
        }
        Outcome::ServerOrOther => {
            let description = SERVICE_DESCRIPTION.to_lowercase();
            let host = display_host(&url);
            console.error(&[
                "Error from",
                &description,
                "at",
                &host,
                &format!("({status}):"),
            ]);
            console.print_response(response).await;
        }
    }

    Ok(outcome)
}

pub fn get(document_id: &str) -> Result<Outcome, DocumentError> {
    debug!(document_id, "Document get requested");
    Err(DocumentError::NotImplemented {
        operation: "document get".to_string(),
    })
}
