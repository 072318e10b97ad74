use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::store::audit;
use crate::store::directory::{EmployeeDirectory, EmployeeUpdate};
use crate::ui::messages::success;
use crate::utils::money::format_money;
use crate::utils::table::{Column, Table};

/// High-level business logic for the employee commands.
pub struct EmployeeLogic;

impl EmployeeLogic {
    pub fn add(cfg: &Config, name: &str, email: &str, wage: Option<f64>) -> AppResult<Employee> {
        let mut directory = EmployeeDirectory::load(&cfg.employees_path())?;
        let wage = wage.unwrap_or(cfg.default_hourly_wage);

        let employee = directory.add(name, email, wage)?;

        success(format!(
            "Employee #{} added: {} <{}> at {}/h",
            employee.id,
            employee.name,
            employee.email,
            format_money(employee.hourly_wage, &cfg.currency)
        ));
        audit(cfg, "add", &employee.id.to_string(), &format!("Employee {} added", employee.name));

        Ok(employee)
    }

    pub fn edit(cfg: &Config, id: u32, update: &EmployeeUpdate) -> AppResult<Employee> {
        if update.is_empty() {
            return Err(AppError::Other(
                "nothing to change: use --name, --email or --wage".into(),
            ));
        }

        let mut directory = EmployeeDirectory::load(&cfg.employees_path())?;
        let before = directory.get(id)?;
        let after = directory.edit(id, update)?;

        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("name '{}' -> '{}'", before.name, after.name));
        }
        if before.email != after.email {
            changes.push(format!("email '{}' -> '{}'", before.email, after.email));
        }
        if before.hourly_wage != after.hourly_wage {
            changes.push(format!(
                "wage {:.2} -> {:.2}",
                before.hourly_wage, after.hourly_wage
            ));
        }

        let message = if changes.is_empty() {
            "no changes".to_string()
        } else {
            changes.join(", ")
        };

        success(format!("Employee #{} updated: {}", id, message));
        audit(cfg, "edit", &id.to_string(), &message);

        Ok(after)
    }

    pub fn delete(cfg: &Config, id: u32) -> AppResult<Employee> {
        let mut directory = EmployeeDirectory::load(&cfg.employees_path())?;
        let removed = directory.delete(id)?;

        audit(cfg, "del", &id.to_string(), &format!("Employee {} deleted", removed.name));
        Ok(removed)
    }

    /// Table of all employees, or `None` when the directory is empty.
    pub fn list_table(cfg: &Config) -> AppResult<Option<String>> {
        let directory = EmployeeDirectory::load(&cfg.employees_path())?;
        if directory.is_empty() {
            return Ok(None);
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("Name", 24),
            Column::new("E-mail", 30),
            Column::right("Hourly wage", 12),
        ]);

        for e in directory.list() {
            table.add_row(vec![
                e.id.to_string(),
                e.name,
                e.email,
                format_money(e.hourly_wage, &cfg.currency),
            ]);
        }

        Ok(Some(table.render(&cfg.separator_char)))
    }
}
