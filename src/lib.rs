//
// Copyright (c) 2024 Nathan Fiedler
//
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod data;
pub mod domain;
pub mod service;

///
/// This type represents various errors that can occur within this crate.
///
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Input was missing or malformed, detected before reaching the store.
    #[error("{0}")]
    ValidationFailed(String),
    /// Update or delete matched no record with the given identifier.
    #[error("No record with ID = {0}")]
    NotFound(i64),
    /// Store reported an error (connectivity, SQL, constraint violation).
    #[error("{0}")]
    QueryFailed(String),
}

impl Error {
    ///
    /// Return the category of this error.
    ///
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ValidationFailed(_) => ErrorKind::ValidationFailed,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::QueryFailed(_) => ErrorKind::QueryFailed,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::QueryFailed(err.to_string())
    }
}

///
/// Category of failure, used by callers to decide how to present an error.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed or missing input; always recoverable.
    ValidationFailed,
    /// Targeted record does not exist; informational.
    NotFound,
    /// Store level failure; the call did not complete.
    QueryFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::ValidationFailed => write!(f, "validation failed"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::QueryFailed => write!(f, "query failed"),
        }
    }
}
