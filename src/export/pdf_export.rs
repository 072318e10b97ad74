// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, payroll_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{PayrollExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export the ledger rows as a PDF table.
pub(crate) fn export_pdf(rows: &[PayrollExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = payroll_to_table(rows);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
