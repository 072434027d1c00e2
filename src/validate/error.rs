//! src/validate/error.rs
use super::idn::IdnError;
use super::Policy;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("maximum email length exceeded")]
    TooLong,
    #[error("doesn't match RFC 5322")]
    GrammarMismatch,
    #[error("doesn't match {0} email pattern")]
    PatternMismatch(Policy),
    #[error("failed to convert {part} to ASCII: {source}")]
    IdnConversionFailed {
        part: Part,
        #[source]
        source: IdnError,
    },
    #[error("maximum local part length exceeded")]
    LocalTooLong,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::TooLong => ErrorKind::TooLong,
            Error::GrammarMismatch => ErrorKind::GrammarMismatch,
            Error::PatternMismatch(_) => ErrorKind::PatternMismatch,
            Error::IdnConversionFailed { .. } => ErrorKind::IdnConversionFailed,
            Error::LocalTooLong => ErrorKind::LocalTooLong,
        }
    }
}

/// Fieldless mirror of [`Error`], for reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    TooLong,
    GrammarMismatch,
    PatternMismatch,
    IdnConversionFailed,
    LocalTooLong,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TooLong => "too_long",
            ErrorKind::GrammarMismatch => "grammar_mismatch",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::IdnConversionFailed => "idn_conversion_failed",
            ErrorKind::LocalTooLong => "local_too_long",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which half of the address an IDN conversion was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Local,
    Domain,
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::Local => write!(f, "local part"),
            Part::Domain => write!(f, "domain"),
        }
    }
}
