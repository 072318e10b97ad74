pub mod backup;
pub mod calculator;
pub mod config;
pub mod employees;
pub mod history;
pub mod log;
pub mod logic;
pub mod payroll;
