//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to remove an employee record from the repository.
///
/// Returns the number of rows deleted, or a `NotFound` error if no record
/// had the given identifier.
///
pub struct RemoveEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl RemoveEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<usize, Params> for RemoveEmployee {
    fn call(&self, params: Params) -> Result<usize, Error> {
        if params.id.trim().is_empty() {
            return Err(crate::Error::ValidationFailed("ID is required for delete.".into()).into());
        }
        let id = super::parse_id(&params.id)?;
        let count = self.records.delete_employee(id)?;
        if count == 0 {
            return Err(crate::Error::NotFound(id).into());
        }
        Ok(count)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of the employee to be removed, as entered by the user.
    pub id: String,
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(id: {})", self.id)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl cmp::Eq for Params {}
