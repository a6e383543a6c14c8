//! Patzer engine error type.

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Patzer engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Fen error kinds.
    Fen,

    /// Coordinate move parse string malformed.
    ParseMoveMalformed,
    /// Difficulty parse string malformed.
    ParseDifficultyMalformed,

    /// An illegal move was provided, and could not be applied to the position.
    IllegalMove,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Fen => "fen",

            ErrorKind::ParseMoveMalformed => "parse move malformed",
            ErrorKind::ParseDifficultyMalformed => "parse difficulty malformed",

            ErrorKind::IllegalMove => "illegal move",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the engine.
#[derive(Debug)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
    Custom(ErrorKind, Box<dyn error::Error + Send + Sync>),
}

impl Error {
    pub fn new<E>(error_kind: ErrorKind, inner_error: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Self::Custom(error_kind, inner_error.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
            Error::Custom(error_kind, ref box_error) => {
                write!(f, "{error_kind}, error: {}", *box_error)
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
