use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timecard { index, file, force } = cmd {
        match file {
            Some(f) => HistoryLogic::write_timecard(cfg, *index, &expand_tilde(f), *force)?,
            None => {
                let card = HistoryLogic::timecard(cfg, *index)?;
                print!("{}", card.to_text(&cfg.separator_char));
            }
        }
    }

    Ok(())
}
