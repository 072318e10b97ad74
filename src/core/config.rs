use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML (file values plus defaults and CLI
    /// overrides).
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Keys missing from the configuration file at `path`.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `rpayroll init`)",
                path.display()
            )));
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Config::missing_keys(&content)
    }

    /// Open `path` with the requested editor, falling back to `$EDITOR`,
    /// `$VISUAL`, then the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if Self::launch(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }

        if editor_to_use != default_editor {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            if Self::launch(&default_editor, path) {
                success(format!(
                    "Configuration file edited successfully using fallback '{default_editor}'"
                ));
                return Ok(());
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}'",
            path.display(),
            editor_to_use
        )))
    }

    fn launch(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_keys_absent_from_the_file() {
        let path = std::env::temp_dir().join(format!("rpayroll_cfgcheck_{}.conf", std::process::id()));
        fs::write(&path, "currency: \"$\"\nfica_rate: 0.0765\n").unwrap();

        let missing = ConfigLogic::check(&path).unwrap();
        assert!(missing.contains(&"overtime_threshold".to_string()));
        assert!(!missing.contains(&"currency".to_string()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn check_without_a_file_is_an_error() {
        let path = std::env::temp_dir().join("rpayroll_no_such_config.conf");
        assert!(ConfigLogic::check(&path).is_err());
    }
}
