use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum DocumentError {
    FileOpen {
        path: PathBuf,
        source: io::Error,
    },
    InvalidTarget {
        target: String,
        reason: String,
    },
    InvalidUrl {
        url: String,
        reason: String,
    },
    NotImplemented {
        operation: String,
    },
    Output {
        source: io::Error,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::FileOpen { path, .. } => {
                write!(f, "Could not open file at {}", path.display())
            }
            DocumentError::InvalidTarget { target, reason } => {
                write!(f, "Invalid target '{target}': {reason}")
            }
            DocumentError::InvalidUrl { url, reason } => {
                write!(f, "Invalid document API URL '{url}': {reason}")
            }
            DocumentError::NotImplemented { operation } => {
                write!(f, "Operation '{operation}' is not implemented")
            }
            DocumentError::Output { .. } => write!(f, "Could not write command output"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentError::FileOpen { source, .. } | DocumentError::Output { source } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl DocumentError {
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DocumentError::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_url(url: &str, reason: impl fmt::Display) -> Self {
        DocumentError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Supplementary diagnostic text shown below the main error line.
    pub fn detail(&self) -> Option<String> {
        match self {
            DocumentError::FileOpen { source, .. } | DocumentError::Output { source } => {
                Some(source.to_string())
            }
            _ => None,
        }
    }
}
