//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to change the name and email of an existing employee.
///
/// Returns the number of rows updated. Matching no record at all results in
/// a `NotFound` error rather than a count of zero.
///
pub struct UpdateEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl UpdateEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<usize, Params> for UpdateEmployee {
    fn call(&self, params: Params) -> Result<usize, Error> {
        let name = params.name.trim();
        let email = params.email.trim();
        if params.id.trim().is_empty() || name.is_empty() || email.is_empty() {
            return Err(crate::Error::ValidationFailed(
                "ID, Name, and Email are required.".into(),
            )
            .into());
        }
        let id = super::parse_id(&params.id)?;
        let count = self.records.update_employee(id, name, email)?;
        if count == 0 {
            return Err(crate::Error::NotFound(id).into());
        }
        Ok(count)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of the employee, as entered by the user.
    pub id: String,
    /// New name for the employee.
    pub name: String,
    /// New email address for the employee.
    pub email: String,
}

impl Params {
    pub fn new<T: Into<String>>(id: T, name: T, email: T) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(id: {}, name: {})", self.id, self.name)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.email == other.email
    }
}

impl cmp::Eq for Params {}
