use crate::core::calculator::{
    DEFAULT_FICA_RATE, DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, PayrollRates,
};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, stored as YAML in `~/.rpayroll/rpayroll.conf`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_dir: String,
    pub employees_file: String,
    pub payroll_file: String,
    pub log_file: String,
    pub currency: String,
    pub default_hourly_wage: f64,
    pub overtime_threshold: f64,
    pub overtime_multiplier: f64,
    pub fica_rate: f64,
    pub separator_char: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            employees_file: "employees.json".to_string(),
            payroll_file: "payroll_summary.json".to_string(),
            log_file: "rpayroll.log".to_string(),
            currency: "$".to_string(),
            default_hourly_wage: 20.0,
            overtime_threshold: DEFAULT_OVERTIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            fica_rate: DEFAULT_FICA_RATE,
            separator_char: "-".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpayroll")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpayroll")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpayroll.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Reject rates that would make the payroll arithmetic meaningless.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.default_hourly_wage.is_finite() && self.default_hourly_wage > 0.0) {
            return Err(AppError::Config(format!(
                "default_hourly_wage must be positive, got {}",
                self.default_hourly_wage
            )));
        }
        if !(self.overtime_threshold.is_finite() && self.overtime_threshold >= 0.0) {
            return Err(AppError::Config(format!(
                "overtime_threshold must be >= 0, got {}",
                self.overtime_threshold
            )));
        }
        if !(self.overtime_multiplier.is_finite() && self.overtime_multiplier > 0.0) {
            return Err(AppError::Config(format!(
                "overtime_multiplier must be positive, got {}",
                self.overtime_multiplier
            )));
        }
        if !(0.0..1.0).contains(&self.fica_rate) {
            return Err(AppError::Config(format!(
                "fica_rate must be in [0, 1), got {}",
                self.fica_rate
            )));
        }
        Ok(())
    }

    pub fn payroll_rates(&self) -> PayrollRates {
        PayrollRates {
            overtime_threshold: self.overtime_threshold,
            overtime_multiplier: self.overtime_multiplier,
            fica_rate: self.fica_rate,
        }
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    fn resolve(&self, file: &str) -> PathBuf {
        let p = expand_tilde(file);
        if p.is_absolute() {
            p
        } else {
            self.data_path().join(p)
        }
    }

    pub fn employees_path(&self) -> PathBuf {
        self.resolve(&self.employees_file)
    }

    pub fn payroll_path(&self) -> PathBuf {
        self.resolve(&self.payroll_file)
    }

    pub fn log_path(&self) -> PathBuf {
        self.resolve(&self.log_file)
    }

    /// Keys the default configuration has but `content` does not.
    pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
        let present: serde_yaml::Value = serde_yaml::from_str(content)?;
        let defaults = serde_yaml::to_value(Self::default())?;

        let mut missing = Vec::new();
        if let Some(map) = defaults.as_mapping() {
            for key in map.keys() {
                let found = present
                    .as_mapping()
                    .map(|m| m.contains_key(key))
                    .unwrap_or(false);
                if !found && let Some(k) = key.as_str() {
                    missing.push(k.to_string());
                }
            }
        }

        Ok(missing)
    }

    /// Initialize the configuration file and the data directory.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(data_dir: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut config = if is_test {
            Config::default()
        } else {
            Config::load()?
        };

        if let Some(dir) = data_dir {
            config.data_dir = dir.to_string();
        }

        fs::create_dir_all(config.data_path())?;

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
