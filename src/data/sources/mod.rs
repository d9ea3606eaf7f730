//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::Employee;
use crate::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::sync::Arc;

mod sqlite;

///
/// Data source for employee records.
///
#[cfg_attr(test, automock)]
pub trait EmployeeDataSource: Send + Sync {
    /// Retrieve all employee records in the order the store returns them.
    fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Insert a new employee record, the store assigns the identifier.
    ///
    /// Returns the number of rows affected.
    fn insert_employee(&self, name: &str, email: &str) -> Result<usize, Error>;

    /// Change the name and email of the employee with the given identifier.
    ///
    /// Returns the number of rows affected, zero if no such record.
    fn update_employee(&self, id: i64, name: &str, email: &str) -> Result<usize, Error>;

    /// Delete the employee record with the given identifier.
    ///
    /// Returns the number of rows affected, zero if no such record.
    fn delete_employee(&self, id: i64) -> Result<usize, Error>;
}

///
/// Type for creating the desired type of data source.
///
pub enum DataSourceType {
    /// SQLite resident in memory, not persistent.
    SqliteMemory,
    /// SQLite stored persistently to the given file path.
    SqliteFile(String),
}

impl DataSourceType {
    ///
    /// Choose the data source type for the given database path, where the
    /// special value `:memory:` selects the memory resident database.
    ///
    pub fn from_path<S: Into<String>>(path: S) -> Self {
        let path: String = path.into();
        if path == ":memory:" {
            DataSourceType::SqliteMemory
        } else {
            DataSourceType::SqliteFile(path)
        }
    }
}

///
/// Construct a data source appropriate for the given type.
///
pub fn build_data_source(dstype: DataSourceType) -> Result<Arc<dyn EmployeeDataSource>, Error> {
    match dstype {
        DataSourceType::SqliteMemory => {
            let source: Arc<dyn EmployeeDataSource> =
                Arc::new(sqlite::SQLiteEmployeeDataSource::new_in_memory()?);
            Ok(source)
        }
        DataSourceType::SqliteFile(path) => {
            let source: Arc<dyn EmployeeDataSource> =
                Arc::new(sqlite::SQLiteEmployeeDataSource::new(path)?);
            Ok(source)
        }
    }
}
