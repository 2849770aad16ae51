use std::fmt;

use thiserror::Error;

/// Where a value lives: which document, which section, which key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub document: String,
    pub section: String,
    pub key: String,
}

impl Location {
    pub fn new(
        document: impl Into<String>,
        section: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            document: document.into(),
            section: section.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.document, self.section, self.key)
    }
}

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("Settings document not found: {document}")]
    MissingDocument { document: String },
    #[error("Syntax error in {document} at line {line}: {detail}")]
    MalformedDocument {
        document: String,
        line: usize,
        detail: String,
    },
    #[error("Malformed value for {location}: {detail}")]
    MalformedValue { location: Location, detail: String },
    #[error("Invalid interval for {location}: minimum {min} exceeds maximum {max}")]
    InvalidInterval {
        location: Location,
        min: String,
        max: String,
    },
    #[error("No value configured for {category}::{member} (expected {location})")]
    MissingCategoryMember {
        category: &'static str,
        member: &'static str,
        location: Location,
    },
    #[error("Invalid placeholder in {location}: {detail}")]
    InvalidPlaceholder { location: Location, detail: String },
    #[error("Error interpreting UTF-8 string: {err}")]
    FromUtf8Error {
        #[from]
        err: std::string::FromUtf8Error,
    },
    #[error("IO error")]
    IoError(#[from] std::io::Error),
}

impl ErrorKind {
    /// The location the error refers to, when it names a single key.
    pub fn location(&self) -> Option<&Location> {
        match self {
            ErrorKind::MalformedValue { location, .. }
            | ErrorKind::InvalidInterval { location, .. }
            | ErrorKind::MissingCategoryMember { location, .. }
            | ErrorKind::InvalidPlaceholder { location, .. } => Some(location),
            _ => None,
        }
    }
}

pub type IResult<T> = Result<T, ErrorKind>;
