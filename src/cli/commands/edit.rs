use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::employees::EmployeeLogic;
use crate::errors::AppResult;
use crate::store::directory::EmployeeUpdate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        email,
        wage,
    } = cmd
    {
        let update = EmployeeUpdate {
            name: name.clone(),
            email: email.clone(),
            hourly_wage: *wage,
        };
        EmployeeLogic::edit(cfg, *id, &update)?;
    }

    Ok(())
}
