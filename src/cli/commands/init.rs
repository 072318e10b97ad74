use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::payroll_summary::PayrollSummary;
use crate::store::audit;
use crate::store::directory::EmployeeDirectory;
use crate::store::json_store::write_json;

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty employee directory and payroll ledger, unless they exist
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg: Config = Config::init_all(cli.data.as_deref(), cli.test)?;

    println!("⚙️  Initializing rPayroll…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("📁 Data dir    : {}", cfg.data_path().display());

    let employees = cfg.employees_path();
    if !employees.exists() {
        EmployeeDirectory::load(&employees)?.save()?;
    }

    let ledger = cfg.payroll_path();
    if !ledger.exists() {
        write_json(&ledger, &Vec::<PayrollSummary>::new())?;
    }

    println!("✅ Employees   : {}", employees.display());
    println!("✅ Ledger      : {}", ledger.display());

    audit(
        &cfg,
        "init",
        "data",
        &format!("Data directory initialized at {}", cfg.data_path().display()),
    );

    println!("🎉 rPayroll initialization completed!");
    Ok(())
}
