//
// Copyright (c) 2024 Nathan Fiedler
//
use anyhow::Error;
use std::cmp;
use std::fmt;

pub mod create_employee;
pub mod list_employees;
pub mod remove_employee;
pub mod update_employee;

/// `UseCase` is the interface by which all use cases are invoked.
pub trait UseCase<Type, Params> {
    fn call(&self, params: Params) -> Result<Type, Error>;
}

/// `NoParams` is the type for use cases that do not take arguments.
pub struct NoParams {}

impl fmt::Display for NoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoParams()")
    }
}

impl cmp::PartialEq for NoParams {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl cmp::Eq for NoParams {}

///
/// Parse the employee identifier from user input, ignoring surrounding
/// whitespace.
///
fn parse_id(input: &str) -> Result<i64, crate::Error> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| crate::Error::ValidationFailed("ID must be an integer.".into()))
}
