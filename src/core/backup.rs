use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::audit;
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::ensure_parent_dir;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Zip the employee directory, the ledger and the audit log into
    /// `dest_file`. Files that do not exist yet are skipped.
    pub fn backup(cfg: &Config, dest_file: &str, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file).with_extension("zip");

        let sources: Vec<PathBuf> = [cfg.employees_path(), cfg.payroll_path(), cfg.log_path()]
            .into_iter()
            .filter(|p| p.exists())
            .collect();

        if sources.is_empty() {
            return Err(AppError::Other(format!(
                "nothing to back up in {}",
                cfg.data_path().display()
            )));
        }

        if dest.exists() && !force && !ask_confirmation(&format!(
            "The file '{}' already exists. Overwrite it?",
            dest.display()
        ))? {
            info("Backup cancelled.");
            return Ok(dest);
        }

        ensure_parent_dir(&dest)?;
        write_zip(&dest, &sources)?;

        success(format!("Backup created: {}", dest.display()));
        audit(
            cfg,
            "backup",
            &dest.to_string_lossy(),
            &format!("{} data files archived", sources.len()),
        );

        Ok(dest)
    }
}

fn write_zip(dest: &Path, sources: &[PathBuf]) -> AppResult<()> {
    let file = fs::File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for src in sources {
        let name = src
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::Other(format!("invalid file name: {}", src.display())))?;

        zip.start_file(name, options).map_err(std::io::Error::other)?;
        let mut f = fs::File::open(src)?;
        std::io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(std::io::Error::other)?;
    Ok(())
}
