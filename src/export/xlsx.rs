// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{get_headers, payroll_to_row};
use crate::export::{PayrollExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Money columns get a `0.00` number format.
const MONEY_COLUMNS: [&str; 5] = ["hourly_wage", "overtime_pay", "gross_pay", "fica_tax", "net_pay"];

/// Export XLSX with banded rows, auto column widths and a totals row.
pub(crate) fn export_xlsx(rows: &[PayrollExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Payroll").map_err(to_app_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, p) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in payroll_to_row(p).iter().enumerate() {
            let money = MONEY_COLUMNS.contains(&headers[col]);
            write_xlsx_cell(worksheet, row, col as u16, value, band_color, money)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    write_totals(worksheet, rows, &headers)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Bold row with the sums of the hour and money columns.
fn write_totals(worksheet: &mut Worksheet, rows: &[PayrollExport], headers: &[&str]) -> AppResult<()> {
    let row = (rows.len() + 1) as u32;
    let bold = Format::new().set_bold().set_border(FormatBorder::Thin);
    let bold_num = Format::new()
        .set_bold()
        .set_num_format("0.00")
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, 0, "TOTAL", &bold)
        .map_err(to_app_error)?;

    let sums: [(&str, f64); 6] = [
        ("total_hours", rows.iter().map(|r| r.total_hours).sum()),
        ("overtime_hours", rows.iter().map(|r| r.overtime_hours).sum()),
        ("overtime_pay", rows.iter().map(|r| r.overtime_pay).sum()),
        ("gross_pay", rows.iter().map(|r| r.gross_pay).sum()),
        ("fica_tax", rows.iter().map(|r| r.fica_tax).sum()),
        ("net_pay", rows.iter().map(|r| r.net_pay).sum()),
    ];

    for (name, total) in sums {
        if let Some(col) = headers.iter().position(|h| *h == name) {
            worksheet
                .write_with_format(row, col as u16, total, &bold_num)
                .map_err(to_app_error)?;
        }
    }

    Ok(())
}

/// Write a single cell, storing dates and numbers as native Excel values.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
    money: bool,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        worksheet
            .write_with_format(row, col, serial, &base.set_num_format(num_format))
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let mut fmt = base.set_align(FormatAlign::Right);
        if money {
            fmt = fmt.set_num_format("0.00");
        }
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
