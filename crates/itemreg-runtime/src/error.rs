use std::fmt;

use itemreg_types::FieldError;

/// Result type for itemreg-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// The request failed or the server answered with a non-2xx status
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The response body did not match the item shape
    Decode(String),

    /// Configuration error
    Config(String),

    /// IO operation failed
    Io(std::io::Error),

    /// A draft was rejected before reaching the server
    Validation(Vec<FieldError>),

    /// Report layout or PDF serialization failed
    Report(itemreg_report::Error),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl Error {
    /// HTTP status of a transport failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport {
                status: Some(status),
                message,
            } => write!(f, "Request failed with status {}: {}", status, message),
            Error::Transport {
                status: None,
                message,
            } => write!(f, "Request failed: {}", message),
            Error::Decode(msg) => write!(f, "Unexpected response body: {}", msg),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Validation(errors) => {
                write!(f, "Invalid item:")?;
                for err in errors {
                    write!(f, "\n  - {}", err)?;
                }
                Ok(())
            }
            Error::Report(err) => write!(f, "Report error: {}", err),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Report(err) => Some(err),
            Error::Transport { .. }
            | Error::Decode(_)
            | Error::Config(_)
            | Error::Validation(_)
            | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<itemreg_report::Error> for Error {
    fn from(err: itemreg_report::Error) -> Self {
        Error::Report(err)
    }
}

impl From<itemreg_types::Error> for Error {
    fn from(err: itemreg_types::Error) -> Self {
        match err {
            itemreg_types::Error::Validation(errors) => Error::Validation(errors),
            other => Error::InvalidOperation(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::Decode(err.to_string());
        }
        Error::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
