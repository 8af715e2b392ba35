//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting a document
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// I/O failure on the input or output file
    Io(String),
    /// Failure assembling the DOCX package
    Package(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConvertError::Package(msg) => write!(f, "Package error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
