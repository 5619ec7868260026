//! Resolution of named targets into per-service base URLs

use crate::error::DocumentError;
use reqwest::Url;

const LOCAL_HOST: &str = "http://127.0.0.1";
const LOCAL_DEPLOY_PORT: u16 = 19071;
const LOCAL_CONTAINER_PORT: u16 = 8080;

/// The service a command talks to on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceContext {
    Deploy,
    Query,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A Vespa instance on this machine with default ports.
    Local,
    /// An explicit base URL, used for every service context.
    Custom(String),
}

impl Target {
    /// Parses `local` or an `http(s)://` URL. Trailing slashes are dropped so
    /// that appending an absolute API path never produces `//`.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        let value = value.trim();
        if value == "local" {
            return Ok(Target::Local);
        }

        if !(value.starts_with("http://") || value.starts_with("https://")) {
            return Err(DocumentError::InvalidTarget {
                target: value.to_string(),
                reason: "expected 'local' or an http(s) URL".to_string(),
            });
        }

        let url = Url::parse(value).map_err(|e| DocumentError::InvalidTarget {
            target: value.to_string(),
            reason: e.to_string(),
        })?;
        if url.query().is_some() || url.fragment().is_some() {
            return Err(DocumentError::InvalidTarget {
                target: value.to_string(),
                reason: "URL must not carry a query or fragment".to_string(),
            });
        }

        Ok(Target::Custom(value.trim_end_matches('/').to_string()))
    }

    pub fn base_url(&self, context: ServiceContext) -> String {
        match self {
            Target::Local => {
                let port = match context {
                    ServiceContext::Deploy => LOCAL_DEPLOY_PORT,
                    ServiceContext::Query | ServiceContext::Document => LOCAL_CONTAINER_PORT,
                };
                format!("{LOCAL_HOST}:{port}")
            }
            Target::Custom(url) => url.clone(),
        }
    }
}
