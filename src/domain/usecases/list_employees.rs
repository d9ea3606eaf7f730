//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::sync::Arc;

///
/// Use case to retrieve every employee record from the repository.
///
pub struct ListEmployees {
    records: Arc<dyn EmployeeRepository>,
}

impl ListEmployees {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<Vec<Employee>, super::NoParams> for ListEmployees {
    fn call(&self, _params: super::NoParams) -> Result<Vec<Employee>, Error> {
        let employees = self.records.list_employees()?;
        Ok(employees)
    }
}
