#![warn(missing_docs)]
//! Error structures of the `abcd` crate
use std::{error::Error, fmt::Display};

/// Crate specific Result type
pub type AbcdResult<T> = std::result::Result<T, AbcdError>;

/// Errors that can be returned by the construction and propagation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbcdError {
    /// invalid arguments while constructing an element or beam (e.g. inconsistent mirror parameters)
    Argument(String),
    /// dimensionally inconsistent values or queries outside of the valid domain
    Domain(String),
    /// the round-trip matrix of a resonator does not support a stable mode
    Cavity(String),
    /// errors of the command line interface
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for AbcdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument(m) => {
                write!(f, "Argument:{m}")
            }
            Self::Domain(m) => {
                write!(f, "Domain:{m}")
            }
            Self::Cavity(m) => {
                write!(f, "Cavity:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Abcd Error:Other:{m}"),
        }
    }
}
impl Error for AbcdError {}

impl std::convert::From<String> for AbcdError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
