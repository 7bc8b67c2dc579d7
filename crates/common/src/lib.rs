//! Common types and utilities for openapi-rdf
//!
//! This crate contains the RDF graph model, the fixed vocabulary and the
//! error type shared by the parser, generator, and CLI components.

mod rdf;
pub mod vocab;

pub use oxrdf::IriParseError;
pub use rdf::{Graph, Iri, Literal, Term, Triple};

use std::fmt;
use thiserror::Error;

/// Errors that can occur while converting an API description
///
/// Every variant carries the best available location: a file, a
/// `file:line:column` position, a JSON Pointer or an output path.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Parse error at {location}: {message}")]
    Parse { location: String, message: String },

    #[error("Mapping error at {location}: {message}")]
    Mapping { location: String, message: String },

    #[error("Write error at {location}: {message}")]
    Write { location: String, message: String },
}

/// The three abstract error kinds reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Mapping,
    Write,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse"),
            ErrorKind::Mapping => write!(f, "mapping"),
            ErrorKind::Write => write!(f, "write"),
        }
    }
}

impl ConvertError {
    pub fn parse(location: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Parse {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn mapping(location: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Mapping {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn write(location: impl Into<String>, message: impl Into<String>) -> Self {
        ConvertError::Write {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Error kind, used by the CLI to report what stage failed
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Parse { .. } => ErrorKind::Parse,
            ConvertError::Mapping { .. } => ErrorKind::Mapping,
            ConvertError::Write { .. } => ErrorKind::Write,
        }
    }

    /// Location the error refers to
    pub fn location(&self) -> &str {
        match self {
            ConvertError::Parse { location, .. }
            | ConvertError::Mapping { location, .. }
            | ConvertError::Write { location, .. } => location,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
