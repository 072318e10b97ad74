// src/export/timecard.rs

use crate::errors::{AppError, AppResult};
use crate::export::pdf::{PdfManager, PdfSection};
use crate::models::timecard::TimeCard;
use std::path::Path;

/// Render `card` as a one-run PDF time card.
pub fn write_timecard_pdf(card: &TimeCard, path: &Path) -> AppResult<()> {
    let header_rows = card.header_rows();
    let entry_rows = card.entry_rows();
    let totals_rows = card.totals_rows();
    let entry_headers = TimeCard::entry_headers();
    let no_entries = vec![vec!["No hours entries recorded.".to_string()]];

    let entries_section = if entry_rows.is_empty() {
        PdfSection {
            heading: Some("Hours"),
            headers: None,
            rows: &no_entries,
        }
    } else {
        PdfSection {
            heading: Some("Hours"),
            headers: Some(entry_headers.as_slice()),
            rows: &entry_rows,
        }
    };

    let sections = [
        PdfSection {
            heading: Some("Employee"),
            headers: None,
            rows: &header_rows,
        },
        entries_section,
        PdfSection {
            heading: Some("Pay"),
            headers: None,
            rows: &totals_rows,
        },
    ];

    let mut pdf = PdfManager::new();
    pdf.write_document(&card.title(), &sections);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("Time card PDF error: {e}")))
}
