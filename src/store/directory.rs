//! Employee directory: employees keyed by id, plus the next id to hand out.
//!
//! ```json
//! {
//!   "next_id": 3,
//!   "employees": {
//!     "1": { "name": "Jane Doe", "email": "jane@example.com", "hourly_wage": 20.0 }
//!   }
//! }
//! ```
//!
//! `next_id` never goes down, so the id of a deleted employee is never given
//! to someone else and ledger records keep pointing at the right person.
//! Files holding only the id map are still read; their counter starts after
//! the highest id.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, validate_email, validate_name, validate_wage};
use crate::store::json_store::{read_json, write_json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EmployeeRecord {
    name: String,
    email: String,
    hourly_wage: f64,
}

impl EmployeeRecord {
    fn to_employee(&self, id: u32) -> Employee {
        Employee {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            hourly_wage: self.hourly_wage,
        }
    }
}

impl From<&Employee> for EmployeeRecord {
    fn from(e: &Employee) -> Self {
        Self {
            name: e.name.clone(),
            email: e.email.clone(),
            hourly_wage: e.hourly_wage,
        }
    }
}

/// Fields to change with [`EmployeeDirectory::edit`]; `None` keeps the value.
#[derive(Debug, Default, Clone)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub hourly_wage: Option<f64>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.hourly_wage.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DirectoryFile {
    next_id: u32,
    employees: BTreeMap<u32, EmployeeRecord>,
}

impl Default for DirectoryFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            employees: BTreeMap::new(),
        }
    }
}

impl DirectoryFile {
    fn from_value(value: serde_json::Value) -> AppResult<Self> {
        let mut file = if value.get("employees").is_some() {
            serde_json::from_value::<DirectoryFile>(value)?
        } else {
            DirectoryFile {
                next_id: 1,
                employees: serde_json::from_value(value)?,
            }
        };

        let after_max = file.employees.keys().next_back().map_or(1, |max| max + 1);
        file.next_id = file.next_id.max(after_max);
        Ok(file)
    }

    /// Every stored record must pass the same checks as `add`/`edit`.
    fn validate(&self, path: &Path) -> AppResult<()> {
        for (id, rec) in &self.employees {
            Employee::new(*id, &rec.name, &rec.email, rec.hourly_wage).map_err(|e| {
                AppError::Config(format!("{}: employee #{}: {}", path.display(), id, e))
            })?;
        }
        Ok(())
    }
}

pub struct EmployeeDirectory {
    path: PathBuf,
    file: DirectoryFile,
}

impl EmployeeDirectory {
    /// Load the directory. A missing file is an empty directory; a corrupt
    /// one, or one holding an invalid employee, is an error so it never gets
    /// used or overwritten by accident.
    pub fn load(path: &Path) -> AppResult<Self> {
        let file = match read_json::<serde_json::Value>(path)? {
            Some(value) => DirectoryFile::from_value(value)?,
            None => DirectoryFile::default(),
        };
        file.validate(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn save(&self) -> AppResult<()> {
        write_json(&self.path, &self.file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.file.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.employees.is_empty()
    }

    /// All employees ordered by id.
    pub fn list(&self) -> Vec<Employee> {
        self.file
            .employees
            .iter()
            .map(|(id, rec)| rec.to_employee(*id))
            .collect()
    }

    pub fn find(&self, id: u32) -> Option<Employee> {
        self.file.employees.get(&id).map(|rec| rec.to_employee(id))
    }

    pub fn get(&self, id: u32) -> AppResult<Employee> {
        self.find(id).ok_or(AppError::EmployeeNotFound(id))
    }

    fn ensure_unique_email(&self, email: &str, except: Option<u32>) -> AppResult<()> {
        let taken = self
            .file
            .employees
            .iter()
            .any(|(id, rec)| Some(*id) != except && rec.email.eq_ignore_ascii_case(email));

        if taken {
            return Err(AppError::DuplicateEmail(email.to_string()));
        }
        Ok(())
    }

    /// Validate, assign the next id and persist.
    pub fn add(&mut self, name: &str, email: &str, hourly_wage: f64) -> AppResult<Employee> {
        let employee = Employee::new(self.file.next_id, name, email, hourly_wage)?;
        self.ensure_unique_email(&employee.email, None)?;

        self.file
            .employees
            .insert(employee.id, EmployeeRecord::from(&employee));
        self.file.next_id += 1;
        self.save()?;

        Ok(employee)
    }

    pub fn edit(&mut self, id: u32, update: &EmployeeUpdate) -> AppResult<Employee> {
        let mut employee = self.get(id)?;

        if let Some(name) = &update.name {
            employee.name = validate_name(name)?;
        }
        if let Some(email) = &update.email {
            let email = validate_email(email)?;
            self.ensure_unique_email(&email, Some(id))?;
            employee.email = email;
        }
        if let Some(wage) = update.hourly_wage {
            employee.hourly_wage = validate_wage(wage)?;
        }

        self.file.employees.insert(id, EmployeeRecord::from(&employee));
        self.save()?;

        Ok(employee)
    }

    pub fn delete(&mut self, id: u32) -> AppResult<Employee> {
        let removed = self
            .file
            .employees
            .remove(&id)
            .ok_or(AppError::EmployeeNotFound(id))?;
        self.save()?;

        Ok(removed.to_employee(id))
    }
}
