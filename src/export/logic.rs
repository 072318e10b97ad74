// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::PayrollExport;
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::store::audit;
use crate::store::ledger::PayrollLedger;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

/// High-level ledger export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export ledger records.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (see [`parse_range`])
    /// - `employee`: keep only records of this employee id
    pub fn export(
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        employee: Option<u32>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let ledger = PayrollLedger::load(&cfg.payroll_path())?;
        let rows: Vec<PayrollExport> = ledger
            .filter(employee, date_bounds)
            .into_iter()
            .map(|(i, r)| PayrollExport::from_record(i, r))
            .collect();

        if rows.is_empty() {
            warning("No payroll records found for the selected filters.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => export_pdf(&rows, path, &build_pdf_title(range))?,
        }

        audit(
            cfg,
            "export",
            file,
            &format!("{} payroll records exported as {}", rows.len(), format.as_str()),
        );

        Ok(())
    }
}

/// PDF title for the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period.as_deref().filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return "Payroll records".to_string();
    };

    if let Some((start, end)) = p.split_once(':') {
        return format!("Payroll records from {} to {}", start.trim(), end.trim());
    }

    match p.len() {
        4 => format!("Payroll records for year {}", p),
        7 => match NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
            Ok(d) => format!("Payroll records for {}", d.format("%B %Y")),
            Err(_) => format!("Payroll records for {}", p),
        },
        _ => format!("Payroll records for {}", p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_titles_follow_the_period() {
        assert_eq!(build_pdf_title(&None), "Payroll records");
        assert_eq!(build_pdf_title(&Some("all".into())), "Payroll records");
        assert_eq!(build_pdf_title(&Some("2025".into())), "Payroll records for year 2025");
        assert_eq!(
            build_pdf_title(&Some("2025-03".into())),
            "Payroll records for March 2025"
        );
        assert_eq!(
            build_pdf_title(&Some("2025-01:2025-03".into())),
            "Payroll records from 2025-01 to 2025-03"
        );
    }
}
