//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::Employee;
use crate::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};

///
/// Repository for employee records.
///
#[cfg_attr(test, automock)]
pub trait EmployeeRepository: Send + Sync {
    /// Retrieve all employee records in the order the store returns them.
    fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Insert a new employee record, returning the number of rows affected.
    fn insert_employee(&self, name: &str, email: &str) -> Result<usize, Error>;

    /// Update the employee with the given identifier.
    ///
    /// Returns the number of rows affected, zero if no such record.
    fn update_employee(&self, id: i64, name: &str, email: &str) -> Result<usize, Error>;

    /// Delete the employee with the given identifier.
    ///
    /// Returns the number of rows affected, zero if no such record.
    fn delete_employee(&self, id: i64) -> Result<usize, Error>;
}
