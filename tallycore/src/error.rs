//! Error taxonomy for the evaluator and the settings file

use std::num::ParseFloatError;
use std::path::PathBuf;

/// Errors that leave the calculator showing a sentinel instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Divisor is zero, dividend is not.
    DivisionByZero,
    /// Divisor and dividend are both zero.
    Undefined,
    /// Square root of a negative number.
    InvalidInput,
    /// The result does not fit in an f64.
    Overflow,
}

impl ErrorKind {
    /// Text shown in the entry line while this error is active.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "Division by zero",
            ErrorKind::Undefined => "Result is undefined",
            ErrorKind::InvalidInput => "Invalid input",
            ErrorKind::Overflow => "Overflow",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CalcError {
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is undefined")]
    Undefined,
    #[error("invalid input for square root: {0}")]
    InvalidInput(String),
    #[error("result overflowed")]
    Overflow,
    #[error("entry '{text}' is not a number: {source}")]
    Parse {
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

impl CalcError {
    /// The sentinel this error puts on screen, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CalcError::DivisionByZero => Some(ErrorKind::DivisionByZero),
            CalcError::Undefined => Some(ErrorKind::Undefined),
            CalcError::InvalidInput(_) => Some(ErrorKind::InvalidInput),
            CalcError::Overflow => Some(ErrorKind::Overflow),
            CalcError::NotADigit(_) | CalcError::Parse { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}
