use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, email, wage } = cmd {
        EmployeeLogic::add(cfg, name, email, *wage)?;
    }

    Ok(())
}
