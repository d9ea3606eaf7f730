//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EmployeeDataSource;
use crate::domain::entities::Employee;
use crate::Error;
use log::debug;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// distinguishes the shared-cache names of memory resident databases
static MEMORY_DB_COUNT: AtomicUsize = AtomicUsize::new(0);

///
/// Data source implementation backed by an SQLite database.
///
/// Every operation opens its own connection and closes it before returning,
/// regardless of the outcome.
///
pub struct SQLiteEmployeeDataSource {
    // path or URI given to every connection
    location: String,
    // memory databases vanish when the last connection closes
    anchor: Option<Mutex<Connection>>,
}

impl SQLiteEmployeeDataSource {
    /// Construct an SQLite-based data source that will be stored at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let location = path.as_ref().to_string_lossy().into_owned();
        let conn = Connection::open(&location)?;
        create_tables(&conn)?;
        Ok(Self {
            location,
            anchor: None,
        })
    }

    /// Construct an SQLite-based data source that will be memory resident.
    pub fn new_in_memory() -> Result<Self, Error> {
        let number = MEMORY_DB_COUNT.fetch_add(1, Ordering::SeqCst);
        let location = format!(
            "file:employees-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            number
        );
        let conn = Connection::open(&location)?;
        create_tables(&conn)?;
        Ok(Self {
            location,
            anchor: Some(Mutex::new(conn)),
        })
    }

    ///
    /// Open a connection, run the given operation with it, and close it.
    ///
    /// Shared-cache table locks fail at once rather than waiting, so
    /// operations on a memory resident database run one at a time.
    ///
    fn with_connection<T, F>(&self, op: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error>,
    {
        let _guard = match self.anchor {
            Some(ref anchor) => Some(anchor.lock().map_err(|_| {
                Error::QueryFailed("memory database lock poisoned".into())
            })?),
            None => None,
        };
        debug!("opening connection to {}", self.location);
        let db = Connection::open(&self.location)?;
        op(&db)
    }
}

impl EmployeeDataSource for SQLiteEmployeeDataSource {
    fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.with_connection(|db| {
            let mut stmt = db.prepare("SELECT id, name, email FROM employees")?;
            let rows = stmt.query_map([], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                })
            })?;
            let mut results: Vec<Employee> = Vec::new();
            for row in rows {
                results.push(row?);
            }
            Ok(results)
        })
    }

    fn insert_employee(&self, name: &str, email: &str) -> Result<usize, Error> {
        self.with_connection(|db| {
            let count = db.execute(
                "INSERT INTO employees(name, email) VALUES (?, ?)",
                params![name, email],
            )?;
            Ok(count)
        })
    }

    fn update_employee(&self, id: i64, name: &str, email: &str) -> Result<usize, Error> {
        self.with_connection(|db| {
            let count = db.execute(
                "UPDATE employees SET name=?, email=? WHERE id=?",
                params![name, email, id],
            )?;
            Ok(count)
        })
    }

    fn delete_employee(&self, id: i64) -> Result<usize, Error> {
        self.with_connection(|db| {
            let count = db.execute("DELETE FROM employees WHERE id=?", params![id])?;
            Ok(count)
        })
    }
}

//
// Create the database tables if they do not exist.
//
// AUTOINCREMENT keeps the identifiers of deleted records from being reused.
//
fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}
