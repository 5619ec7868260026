//! Shared HTTP execution helper for commands that talk to a Vespa service

use crate::console::Console;
use reqwest::Url;
use std::error::Error;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

/// Host as shown to users: the port is included only when it is not the
/// scheme default.
pub fn display_host(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Executes `request` with `timeout`.
///
/// Transport failures (refused connection, timeout, TLS errors) are reported
/// to the console here and yield `None`; callers only handle responses.
pub async fn http_do<O: Write, E: Write>(
    client: &reqwest::Client,
    mut request: reqwest::Request,
    timeout: Duration,
    service_description: &str,
    console: &mut Console<O, E>,
) -> Option<reqwest::Response> {
    *request.timeout_mut() = Some(timeout);
    let host = display_host(request.url());
    debug!(
        method = %request.method(),
        url = %request.url(),
        timeout_secs = timeout.as_secs(),
        "Sending request to {service_description}"
    );

    match client.execute(request).await {
        Ok(response) => {
            debug!(status = %response.status(), "Response from {service_description}");
            Some(response)
        }
        Err(e) => {
            debug!(error = %e, host = %host, "Request to {service_description} failed");
            let description = service_description.to_lowercase();
            console.error(&["Could not connect to", &description, "at", &host]);
            console.detail(&error_chain(&e));
            None
        }
    }
}

/// Renders `error` and its `source()` causes as one `outer: inner: ...` line.
/// A cause whose text is already part of the line is skipped.
pub fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
