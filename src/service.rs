//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::repositories::EmployeeRepositoryImpl;
use crate::data::sources::{build_data_source, DataSourceType};
use crate::domain::entities::{Employee, Notice, NoticeKind, Outcome};
use crate::domain::repositories::EmployeeRepository;
use crate::domain::usecases::{
    create_employee, list_employees, remove_employee, update_employee, NoParams, UseCase,
};
use crate::ErrorKind;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

///
/// The three text inputs of the presentation layer, exactly as entered.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

///
/// The four intents a user may fire.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Title of the notice shown when the store fails during this operation.
    fn failure_title(&self) -> &'static str {
        match self {
            Operation::List => "Error Loading Data",
            Operation::Create => "Insert Error",
            Operation::Update => "Update Error",
            Operation::Delete => "Delete Error",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

///
/// Convert the error of a failed operation into a notice for the user.
///
/// Errors that did not originate in this crate are treated as store
/// failures.
///
pub fn failure_notice(operation: Operation, err: &anyhow::Error) -> Notice {
    let kind = err
        .downcast_ref::<crate::Error>()
        .map(|e| e.kind())
        .unwrap_or(ErrorKind::QueryFailed);
    let title = match kind {
        ErrorKind::ValidationFailed => "Input Error",
        ErrorKind::NotFound => "Not Found",
        ErrorKind::QueryFailed => operation.failure_title(),
    };
    Notice::new(NoticeKind::from(kind), title, err.to_string())
}

///
/// Performs the list, create, update, and delete operations on employee
/// records, converting every failure into a categorized notice.
///
/// Holds nothing between calls other than the repository itself.
///
pub struct RecordService {
    records: Arc<dyn EmployeeRepository>,
}

impl RecordService {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }

    ///
    /// Construct a service backed by the given type of data source.
    ///
    pub fn with_data_source(dstype: DataSourceType) -> Result<Self, crate::Error> {
        let source = build_data_source(dstype)?;
        let repo: Arc<dyn EmployeeRepository> = Arc::new(EmployeeRepositoryImpl::new(source));
        Ok(Self::new(repo))
    }

    /// Fetch every employee record, fresh from the store.
    pub fn list(&self) -> Result<Vec<Employee>, Notice> {
        let usecase = list_employees::ListEmployees::new(self.records.clone());
        match usecase.call(NoParams {}) {
            Ok(employees) => {
                info!("listed {} employee records", employees.len());
                Ok(employees)
            }
            Err(err) => Err(self.report(Operation::List, err)),
        }
    }

    /// Insert a new record using the name and email of the form.
    pub fn create(&self, form: &EmployeeForm) -> Result<Outcome, Notice> {
        let usecase = create_employee::CreateEmployee::new(self.records.clone());
        let params = create_employee::Params::new(form.name.as_str(), form.email.as_str());
        let result = usecase.call(params);
        self.conclude(Operation::Create, "Record inserted.", result)
    }

    /// Change the name and email of the record identified by the form.
    pub fn update(&self, form: &EmployeeForm) -> Result<Outcome, Notice> {
        let usecase = update_employee::UpdateEmployee::new(self.records.clone());
        let params = update_employee::Params::new(
            form.id.as_str(),
            form.name.as_str(),
            form.email.as_str(),
        );
        let result = usecase.call(params);
        self.conclude(Operation::Update, "Record updated.", result)
    }

    /// Remove the record identified by the form.
    pub fn delete(&self, form: &EmployeeForm) -> Result<Outcome, Notice> {
        let usecase = remove_employee::RemoveEmployee::new(self.records.clone());
        let params = remove_employee::Params {
            id: form.id.clone(),
        };
        let result = usecase.call(params);
        self.conclude(Operation::Delete, "Record deleted.", result)
    }

    fn conclude(
        &self,
        operation: Operation,
        success_message: &str,
        result: Result<usize, anyhow::Error>,
    ) -> Result<Outcome, Notice> {
        match result {
            Ok(affected) => {
                info!("{} affected {} row(s)", operation, affected);
                Ok(Outcome {
                    affected,
                    notice: Notice::new(NoticeKind::Success, "Success", success_message),
                })
            }
            Err(err) => Err(self.report(operation, err)),
        }
    }

    fn report(&self, operation: Operation, err: anyhow::Error) -> Notice {
        let notice = failure_notice(operation, &err);
        match notice.kind {
            NoticeKind::QueryFailed => error!("{} failed: {:?}", operation, err),
            _ => warn!("{} rejected: {}", operation, notice.message),
        }
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Severity;
    use crate::domain::repositories::MockEmployeeRepository;

    fn form(id: &str, name: &str, email: &str) -> EmployeeForm {
        EmployeeForm {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    fn memory_service() -> RecordService {
        RecordService::with_data_source(DataSourceType::SqliteMemory)
            .expect("memory data source")
    }

    #[test]
    fn test_failure_notice_foreign_error() {
        let err = anyhow::anyhow!("connection reset");
        let notice = failure_notice(Operation::Update, &err);
        assert_eq!(notice.kind, NoticeKind::QueryFailed);
        assert_eq!(notice.title, "Update Error");
        assert_eq!(notice.message, "connection reset");
    }

    #[test]
    fn test_list_query_failed() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records
            .expect_list_employees()
            .returning(|| Err(crate::Error::QueryFailed("unable to open database file".into())));
        // act
        let service = RecordService::new(Arc::new(records));
        let result = service.list();
        // assert
        let notice = result.unwrap_err();
        assert_eq!(notice.kind, NoticeKind::QueryFailed);
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.title, "Error Loading Data");
        assert_eq!(notice.message, "unable to open database file");
    }

    #[test]
    fn test_create_query_failed() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records
            .expect_insert_employee()
            .returning(|_, _| Err(crate::Error::QueryFailed("database is locked".into())));
        // act
        let service = RecordService::new(Arc::new(records));
        let result = service.create(&form("", "Ann", "ann@x.com"));
        // assert
        let notice = result.unwrap_err();
        assert_eq!(notice.kind, NoticeKind::QueryFailed);
        assert_eq!(notice.title, "Insert Error");
        assert_eq!(notice.message, "database is locked");
    }

    #[test]
    fn test_delete_query_failed_is_not_not_found() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records
            .expect_delete_employee()
            .returning(|_| Err(crate::Error::QueryFailed("disk I/O error".into())));
        // act
        let service = RecordService::new(Arc::new(records));
        let result = service.delete(&form("5", "", ""));
        // assert
        let notice = result.unwrap_err();
        assert_eq!(notice.kind, NoticeKind::QueryFailed);
        assert_eq!(notice.title, "Delete Error");
    }

    #[test]
    fn test_validation_never_reaches_store() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records.expect_list_employees().never();
        records.expect_insert_employee().never();
        records.expect_update_employee().never();
        records.expect_delete_employee().never();
        let service = RecordService::new(Arc::new(records));
        // act and assert
        let notice = service.create(&form("", "", "ann@x.com")).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::ValidationFailed);
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "Input Error");
        assert_eq!(notice.message, "Name and Email are required.");
        let notice = service.update(&form("x1", "Ann", "ann@x.com")).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::ValidationFailed);
        assert_eq!(notice.message, "ID must be an integer.");
        let notice = service.update(&form("1", "Ann", "")).unwrap_err();
        assert_eq!(notice.message, "ID, Name, and Email are required.");
        let notice = service.delete(&form("1.0", "", "")).unwrap_err();
        assert_eq!(notice.message, "ID must be an integer.");
        let notice = service.delete(&form("", "", "")).unwrap_err();
        assert_eq!(notice.message, "ID is required for delete.");
    }

    #[test]
    fn test_create_then_list() {
        let service = memory_service();
        let outcome = service.create(&form("", "Ann", "ann@x.com")).unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.notice.severity, Severity::Information);
        assert_eq!(outcome.notice.message, "Record inserted.");
        let employees = service.list().unwrap();
        let matching: Vec<&Employee> = employees
            .iter()
            .filter(|e| e.name == "Ann" && e.email == "ann@x.com")
            .collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn test_missing_id_leaves_store_unchanged() {
        let service = memory_service();
        service.create(&form("", "Ann", "ann@x.com")).unwrap();
        service.create(&form("", "Bob", "bob@x.com")).unwrap();
        let before = service.list().unwrap();
        let notice = service
            .update(&form("9999", "Zed", "zed@x.com"))
            .unwrap_err();
        assert_eq!(notice.kind, NoticeKind::NotFound);
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "Not Found");
        assert_eq!(notice.message, "No record with ID = 9999");
        let notice = service.delete(&form("9999", "", "")).unwrap_err();
        assert_eq!(notice.kind, NoticeKind::NotFound);
        let after = service.list().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_list_while_creating() {
        let service = Arc::new(memory_service());
        let creator = {
            let service = service.clone();
            std::thread::spawn(move || {
                (0..300)
                    .filter_map(|n| {
                        service
                            .create(&form("", &format!("Emp {}", n), "emp@x.com"))
                            .err()
                    })
                    .collect::<Vec<Notice>>()
            })
        };
        let lister = {
            let service = service.clone();
            std::thread::spawn(move || {
                (0..300)
                    .filter_map(|_| service.list().err())
                    .collect::<Vec<Notice>>()
            })
        };
        assert_eq!(creator.join().unwrap(), vec![]);
        assert_eq!(lister.join().unwrap(), vec![]);
        assert_eq!(service.list().unwrap().len(), 300);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let service = memory_service();
        // create
        let outcome = service.create(&form("", "Ann", "ann@x.com")).unwrap();
        assert_eq!(outcome.affected, 1);
        let employees = service.list().unwrap();
        assert_eq!(employees.len(), 1);
        let id = employees[0].id;
        assert_eq!(
            employees[0],
            Employee {
                id,
                name: "Ann".into(),
                email: "ann@x.com".into(),
            }
        );

        // update
        let outcome = service
            .update(&form(&id.to_string(), "Ann B", "annb@x.com"))
            .unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(outcome.notice.message, "Record updated.");
        let employees = service.list().unwrap();
        assert_eq!(
            employees,
            vec![Employee {
                id,
                name: "Ann B".into(),
                email: "annb@x.com".into(),
            }]
        );

        // delete
        let outcome = service.delete(&form(&id.to_string(), "", "")).unwrap();
        assert_eq!(outcome.affected, 1);
        assert_eq!(outcome.notice.message, "Record deleted.");
        assert!(service.list().unwrap().is_empty());

        // delete again, and again
        for _ in 0..3 {
            let notice = service.delete(&form(&id.to_string(), "", "")).unwrap_err();
            assert_eq!(notice.kind, NoticeKind::NotFound);
            assert_eq!(notice.message, format!("No record with ID = {}", id));
        }
    }
}
