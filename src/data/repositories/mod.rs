//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EmployeeDataSource;
use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use crate::Error;
use std::sync::Arc;

///
/// Default implementation of the employee repository.
///
pub struct EmployeeRepositoryImpl {
    datasource: Arc<dyn EmployeeDataSource>,
}

impl EmployeeRepositoryImpl {
    pub fn new(datasource: Arc<dyn EmployeeDataSource>) -> Self {
        Self { datasource }
    }
}

impl EmployeeRepository for EmployeeRepositoryImpl {
    fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.datasource.list_employees()
    }

    fn insert_employee(&self, name: &str, email: &str) -> Result<usize, Error> {
        self.datasource.insert_employee(name, email)
    }

    fn update_employee(&self, id: i64, name: &str, email: &str) -> Result<usize, Error> {
        self.datasource.update_employee(id, name, email)
    }

    fn delete_employee(&self, id: i64) -> Result<usize, Error> {
        self.datasource.delete_employee(id)
    }
}
