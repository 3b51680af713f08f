use std::fmt;

/// Result type for itemreg-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while writing a report
#[derive(Debug)]
pub enum Error {
    /// Writing the output file failed
    Io(std::io::Error),

    /// The PDF backend rejected the document
    Pdf(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Pdf(msg) => write!(f, "PDF error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Pdf(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
