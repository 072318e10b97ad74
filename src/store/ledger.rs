//! Payroll ledger: an append-only JSON array of payroll summaries.

use crate::errors::{AppError, AppResult};
use crate::models::payroll_summary::PayrollSummary;
use crate::store::json_store::{read_json, write_json};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct PayrollLedger {
    path: PathBuf,
    records: Vec<PayrollSummary>,
    corrupt: bool,
}

impl PayrollLedger {
    /// Load the ledger. Missing or unreadable content counts as an empty
    /// ledger; a corrupt file is set aside on the next write.
    pub fn load(path: &Path) -> AppResult<Self> {
        let (records, corrupt) = match read_json::<Vec<PayrollSummary>>(path) {
            Ok(r) => (r.unwrap_or_default(), false),
            Err(AppError::Json(e)) => {
                warning(format!(
                    "Ledger '{}' is not valid JSON ({e}); starting with an empty ledger.",
                    path.display()
                ));
                (Vec::new(), true)
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path: path.to_path_buf(),
            records,
            corrupt,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[PayrollSummary] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append `summary` and rewrite the file. Returns its 1-based position.
    pub fn append(&mut self, summary: PayrollSummary) -> AppResult<usize> {
        if self.corrupt {
            let aside = self.path.with_extension("json.corrupt");
            fs::copy(&self.path, &aside)?;
            warning(format!("Corrupt ledger saved as '{}'.", aside.display()));
            self.corrupt = false;
        }

        self.records.push(summary);
        write_json(&self.path, &self.records)?;
        Ok(self.records.len())
    }

    /// Record at 1-based `index`, as shown by `history`.
    pub fn get(&self, index: usize) -> AppResult<&PayrollSummary> {
        index
            .checked_sub(1)
            .and_then(|i| self.records.get(i))
            .ok_or(AppError::RecordNotFound(index))
    }

    /// Records matching the optional employee id and inclusive date bounds,
    /// paired with their 1-based index.
    pub fn filter(
        &self,
        employee_id: Option<u32>,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<(usize, &PayrollSummary)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| employee_id.is_none() || r.employee_id == employee_id)
            .filter(|(_, r)| match bounds {
                Some((start, end)) => r.date >= start && r.date <= end,
                None => true,
            })
            .map(|(i, r)| (i + 1, r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rpayroll_ledger_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::remove_file(&path).ok();
        path
    }

    fn summary(name: &str, id: u32, date: &str) -> PayrollSummary {
        PayrollSummary {
            name: name.into(),
            employee_id: Some(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            hourly_wage: Some(20.0),
            total_hours: 10.0,
            overtime_hours: 0.0,
            overtime_pay: 0.0,
            gross_pay: 200.0,
            fica_tax: 15.3,
            net_pay: 184.7,
            entries: Vec::new(),
            overtime_threshold: None,
            overtime_multiplier: None,
            fica_rate: None,
        }
    }

    #[test]
    fn append_keeps_existing_records() {
        let path = temp_file("append");
        let mut ledger = PayrollLedger::load(&path).unwrap();
        assert!(ledger.is_empty());

        assert_eq!(ledger.append(summary("Ann", 1, "2025-01-03")).unwrap(), 1);
        assert_eq!(ledger.append(summary("Ben", 2, "2025-01-10")).unwrap(), 2);

        let reloaded = PayrollLedger::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(2).unwrap().name, "Ben");
        assert!(matches!(reloaded.get(0), Err(AppError::RecordNotFound(0))));
        assert!(matches!(reloaded.get(3), Err(AppError::RecordNotFound(3))));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_ledger_is_treated_as_empty_and_set_aside() {
        let path = temp_file("corrupt");
        fs::write(&path, "[{ broken").unwrap();

        let mut ledger = PayrollLedger::load(&path).unwrap();
        assert!(ledger.is_empty());
        ledger.append(summary("Ann", 1, "2025-01-03")).unwrap();

        let aside = path.with_extension("json.corrupt");
        assert_eq!(fs::read_to_string(&aside).unwrap(), "[{ broken");
        assert_eq!(PayrollLedger::load(&path).unwrap().len(), 1);
        fs::remove_file(&path).ok();
        fs::remove_file(&aside).ok();
    }

    #[test]
    fn filter_by_employee_and_dates() {
        let path = temp_file("filter");
        let mut ledger = PayrollLedger::load(&path).unwrap();
        ledger.append(summary("Ann", 1, "2025-01-03")).unwrap();
        ledger.append(summary("Ben", 2, "2025-01-10")).unwrap();
        ledger.append(summary("Ann", 1, "2025-02-07")).unwrap();

        let ann: Vec<usize> = ledger.filter(Some(1), None).iter().map(|(i, _)| *i).collect();
        assert_eq!(ann, vec![1, 3]);

        let jan = (
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        );
        let in_jan: Vec<usize> = ledger.filter(None, Some(jan)).iter().map(|(i, _)| *i).collect();
        assert_eq!(in_jan, vec![1, 2]);
        fs::remove_file(&path).ok();
    }
}
