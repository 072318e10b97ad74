use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        match EmployeeLogic::list_table(cfg)? {
            Some(table) => {
                header("👥 Employees", &cfg.separator_char);
                print!("{table}");
            }
            None => info("No employees yet. Add one with `rpayroll add --name ... --email ...`."),
        }
    }

    Ok(())
}
