use std::fmt;

use crate::validation::FieldError;

/// Result type for itemreg-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A draft failed one or more field rules
    Validation(Vec<FieldError>),

    /// Unknown item type name
    InvalidItemType(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(errors) => {
                write!(f, "Invalid item:")?;
                for err in errors {
                    write!(f, "\n  - {}", err)?;
                }
                Ok(())
            }
            Error::InvalidItemType(name) => write!(
                f,
                "Unknown item type '{}' (expected material, service or other)",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
