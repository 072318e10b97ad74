use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit_log::{LogEntry, read_log};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern must compile"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "run" => Colour::Cyan,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Colored `op (target)` cell, truncated on its visible width.
fn op_target_cell(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);

    let mut visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if visible.chars().count() > MAX_OP_WIDTH {
        visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
    }

    // only the operation word is colored
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = read_log(&cfg.log_path())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let cells: Vec<String> = entries.iter().map(op_target_cell).collect();
        let op_w = cells
            .iter()
            .map(|c| strip_ansi(c).chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries.len().to_string().len();

        println!("📜 Internal log:\n");

        for (i, (entry, cell)) in entries.iter().zip(&cells).enumerate() {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            // padding computed on the visible width, without ANSI codes
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(cell).chars().count()));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                i + 1,
                date,
                cell,
                padding,
                entry.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> LogEntry {
        LogEntry {
            date: "2025-01-01T10:00:00+00:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn cell_is_truncated_on_visible_width() {
        let long = "x".repeat(100);
        let cell = op_target_cell(&entry("export", &long));
        let visible = strip_ansi(&cell);
        assert_eq!(visible.chars().count(), MAX_OP_WIDTH);
        assert!(visible.ends_with("..."));
        assert!(visible.starts_with("export ("));
    }

    #[test]
    fn strip_ansi_removes_color_codes() {
        let painted = Colour::Green.paint("add").to_string();
        assert_eq!(strip_ansi(&painted), "add");
    }
}
