use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::errors::AppResult;
use crate::store::directory::EmployeeDirectory;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        // fail on unknown ids before asking anything
        let employee = EmployeeDirectory::load(&cfg.employees_path())?.get(*id)?;

        warning(format!(
            "Delete employee #{} ({} <{}>)? Saved payroll records are kept.",
            employee.id, employee.name, employee.email
        ));
        if !ask_confirmation("Confirm")? {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = EmployeeLogic::delete(cfg, *id)?;
        success(format!("Employee #{} ({}) has been deleted.", removed.id, removed.name));
    }

    Ok(())
}
