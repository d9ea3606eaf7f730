//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to add a new employee record to the repository.
///
/// Returns the number of rows inserted. The identifier is assigned by the
/// store and is not returned.
///
pub struct CreateEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl CreateEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<usize, Params> for CreateEmployee {
    fn call(&self, params: Params) -> Result<usize, Error> {
        let name = params.name.trim();
        let email = params.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(
                crate::Error::ValidationFailed("Name and Email are required.".into()).into(),
            );
        }
        let count = self.records.insert_employee(name, email)?;
        Ok(count)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Name of the new employee.
    pub name: String,
    /// Email address of the new employee.
    pub email: String,
}

impl Params {
    pub fn new<T: Into<String>>(name: T, email: T) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(name: {})", self.name)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl cmp::Eq for Params {}
