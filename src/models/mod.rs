pub mod employee;
pub mod hours;
pub mod payroll_summary;
pub mod timecard;
