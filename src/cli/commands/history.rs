use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { employee, range } = cmd {
        match HistoryLogic::table(cfg, *employee, range.as_deref())? {
            Some(table) => {
                header("📒 Payroll history", &cfg.separator_char);
                print!("{table}");
            }
            None => info("No payroll records found for the selected filters."),
        }
    }

    Ok(())
}
