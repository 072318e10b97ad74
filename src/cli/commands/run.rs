use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::payroll::{PayrollLogic, RunOptions};
use crate::errors::AppResult;
use crate::utils::date::date_or_today;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run {
        id,
        hours,
        date,
        save,
        timecard,
        force,
    } = cmd
    {
        let opts = RunOptions {
            hours: (!hours.is_empty()).then(|| hours.clone()),
            date: date_or_today(date.as_deref())?,
            save: *save,
            timecard: timecard.as_deref().map(expand_tilde),
            force: *force,
        };

        PayrollLogic::run(cfg, *id, &opts)?;
    }

    Ok(())
}
