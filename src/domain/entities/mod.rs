//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Employee entity.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// Name of the employee, never empty once persisted.
    pub name: String,
    /// Email address of the employee, never empty once persisted.
    pub email: String,
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Employee({}, {})", self.id, self.name)
    }
}

///
/// How loudly a notice should be presented to the user.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Information,
    Warning,
    Error,
}

///
/// What a notice reports: either success or one of the failure categories.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    ValidationFailed,
    NotFound,
    QueryFailed,
}

impl From<ErrorKind> for NoticeKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ValidationFailed => NoticeKind::ValidationFailed,
            ErrorKind::NotFound => NoticeKind::NotFound,
            ErrorKind::QueryFailed => NoticeKind::QueryFailed,
        }
    }
}

impl NoticeKind {
    pub fn severity(&self) -> Severity {
        match self {
            NoticeKind::Success => Severity::Information,
            NoticeKind::ValidationFailed | NoticeKind::NotFound => Severity::Warning,
            NoticeKind::QueryFailed => Severity::Error,
        }
    }
}

///
/// Categorized message for the presentation layer.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new<T: Into<String>, M: Into<String>>(kind: NoticeKind, title: T, message: M) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

///
/// Result of a successful insert, update, or delete.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Number of rows affected by the statement.
    pub affected: usize,
    pub notice: Notice,
}
