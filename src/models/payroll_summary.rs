use crate::core::calculator::PayrollRates;
use crate::core::calculator::overtime::split_hours;
use crate::models::hours::HoursEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One payroll run as stored in the ledger.
///
/// Keys keep the title-case names of the ledger file format. Records written
/// before overtime tracking existed only carry name, date, hours and the
/// three money fields; everything else falls back to its default, and the
/// missing rates read as the standard ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Employee ID", default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<u32>,

    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Hourly Wage", default, skip_serializing_if = "Option::is_none")]
    pub hourly_wage: Option<f64>,

    #[serde(rename = "Total Hours")]
    pub total_hours: f64,

    #[serde(rename = "Overtime Hours", default)]
    pub overtime_hours: f64,

    #[serde(rename = "Overtime Pay", default)]
    pub overtime_pay: f64,

    #[serde(rename = "Gross Pay")]
    pub gross_pay: f64,

    #[serde(rename = "FICA Tax")]
    pub fica_tax: f64,

    #[serde(rename = "Net Pay")]
    pub net_pay: f64,

    #[serde(rename = "Entries", default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<HoursEntry>,

    #[serde(rename = "Overtime Threshold", default, skip_serializing_if = "Option::is_none")]
    pub overtime_threshold: Option<f64>,

    #[serde(rename = "Overtime Multiplier", default, skip_serializing_if = "Option::is_none")]
    pub overtime_multiplier: Option<f64>,

    #[serde(rename = "FICA Rate", default, skip_serializing_if = "Option::is_none")]
    pub fica_rate: Option<f64>,
}

impl PayrollSummary {
    /// Rates this record was calculated with.
    pub fn rates(&self) -> PayrollRates {
        let defaults = PayrollRates::default();
        PayrollRates {
            overtime_threshold: self.overtime_threshold.unwrap_or(defaults.overtime_threshold),
            overtime_multiplier: self
                .overtime_multiplier
                .unwrap_or(defaults.overtime_multiplier),
            fica_rate: self.fica_rate.unwrap_or(defaults.fica_rate),
        }
    }

    /// Hours paid at the regular rate: the total capped at the threshold.
    pub fn regular_hours(&self) -> f64 {
        split_hours(self.total_hours, self.rates().overtime_threshold).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_ledger_records() {
        let raw = r#"{
            "Name": "Sam",
            "Total Hours": 12.0,
            "Date": "2024-03-01",
            "Gross Pay": 240.0,
            "FICA Tax": 18.36,
            "Net Pay": 221.64
        }"#;

        let s: PayrollSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(s.name, "Sam");
        assert_eq!(s.employee_id, None);
        assert_eq!(s.overtime_hours, 0.0);
        assert!(s.entries.is_empty());
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(s.rates(), PayrollRates::default());
        assert_eq!(s.regular_hours(), 12.0);
    }

    #[test]
    fn writes_title_case_keys() {
        let s = PayrollSummary {
            name: "Sam".into(),
            employee_id: Some(4),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            hourly_wage: Some(20.0),
            total_hours: 45.0,
            overtime_hours: 5.0,
            overtime_pay: 150.0,
            gross_pay: 950.0,
            fica_tax: 72.68,
            net_pay: 877.33,
            entries: vec![HoursEntry::new(45.0).unwrap()],
            overtime_threshold: Some(40.0),
            overtime_multiplier: Some(1.5),
            fica_rate: Some(0.0765),
        };

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["Employee ID"], 4);
        assert_eq!(json["Date"], "2024-03-01");
        assert_eq!(json["FICA Tax"], 72.68);
        assert_eq!(json["Entries"][0], 45.0);
        assert_eq!(json["FICA Rate"], 0.0765);
        assert_eq!(json["Overtime Threshold"], 40.0);
    }

    #[test]
    fn regular_hours_are_capped_at_the_saved_threshold() {
        let raw = r#"{
            "Name": "Sam",
            "Total Hours": 45.0,
            "Date": "2024-03-01",
            "Overtime Hours": 10.0,
            "Gross Pay": 0.0,
            "FICA Tax": 0.0,
            "Net Pay": 0.0,
            "Overtime Threshold": 35.0
        }"#;

        let s: PayrollSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(s.regular_hours(), 35.0);
        assert_eq!(s.rates().overtime_threshold, 35.0);
        assert_eq!(s.rates().fica_rate, 0.0765);
    }
}
