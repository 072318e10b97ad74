// src/export/model.rs

use crate::models::payroll_summary::PayrollSummary;
use serde::Serialize;

/// Flat ledger row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PayrollExport {
    pub record: usize,
    pub date: String,
    pub employee_id: String,
    pub name: String,
    pub hourly_wage: String,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub overtime_pay: f64,
    pub gross_pay: f64,
    pub fica_tax: f64,
    pub net_pay: f64,
}

impl PayrollExport {
    pub fn from_record(index: usize, s: &PayrollSummary) -> Self {
        Self {
            record: index,
            date: s.date.format("%Y-%m-%d").to_string(),
            employee_id: s.employee_id.map(|id| id.to_string()).unwrap_or_default(),
            name: s.name.clone(),
            hourly_wage: s.hourly_wage.map(|w| format!("{w:.2}")).unwrap_or_default(),
            total_hours: s.total_hours,
            overtime_hours: s.overtime_hours,
            overtime_pay: s.overtime_pay,
            gross_pay: s.gross_pay,
            fica_tax: s.fica_tax,
            net_pay: s.net_pay,
        }
    }
}

/// Header per CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "record",
        "date",
        "employee_id",
        "name",
        "hourly_wage",
        "total_hours",
        "overtime_hours",
        "overtime_pay",
        "gross_pay",
        "fica_tax",
        "net_pay",
    ]
}

pub(crate) fn payroll_to_row(p: &PayrollExport) -> Vec<String> {
    vec![
        p.record.to_string(),
        p.date.clone(),
        p.employee_id.clone(),
        p.name.clone(),
        p.hourly_wage.clone(),
        format!("{:.2}", p.total_hours),
        format!("{:.2}", p.overtime_hours),
        format!("{:.2}", p.overtime_pay),
        format!("{:.2}", p.gross_pay),
        format!("{:.2}", p.fica_tax),
        format!("{:.2}", p.net_pay),
    ]
}

pub(crate) fn payroll_to_table(rows: &[PayrollExport]) -> Vec<Vec<String>> {
    rows.iter().map(payroll_to_row).collect()
}
