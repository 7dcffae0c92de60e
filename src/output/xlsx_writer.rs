//! XLSX output writer.

use log::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::output::ExportPayload;
use crate::table::{Cell, SUBTITLE_ROW, TITLE_ROW, Table};

/// Serializes the table as a single-sheet XLSX workbook.
///
/// # Format
/// - One worksheet row per table row, in order
/// - Numbers are written as numbers, text as strings, empty cells are left blank
/// - Event name row: font size `config.title_font_size` (default 16)
/// - Round label row: font size `config.subtitle_font_size` (default 14)
pub fn write_xlsx(table: &Table, config: &ExportConfig) -> Result<ExportPayload> {
    let mut workbook = Workbook::new();

    let title = Format::new().set_font_size(config.title_font_size);
    let subtitle = Format::new().set_font_size(config.subtitle_font_size);

    {
        let worksheet = workbook.add_worksheet();
        if let Some(name) = &config.worksheet_name {
            worksheet.set_name(name)?;
        }

        for (r, row) in table.rows().iter().enumerate() {
            let format = match r {
                TITLE_ROW => Some(&title),
                SUBTITLE_ROW => Some(&subtitle),
                _ => None,
            };
            for (c, cell) in row.iter().enumerate() {
                write_cell(worksheet, r as u32, c as u16, cell, format)?;
            }
        }
    }

    let data = workbook.save_to_buffer()?;

    info!("Exporting to XLSX");

    Ok(ExportPayload::binary(
        data,
        ExportFormat::Xlsx.mime_type(),
        ExportFormat::Xlsx.extension(),
    ))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    format: Option<&Format>,
) -> Result<()> {
    match (cell, format) {
        (Cell::Empty, _) => {}
        (Cell::Integer(n), Some(f)) => {
            worksheet.write_number_with_format(row, col, *n as f64, f)?;
        }
        (Cell::Integer(n), None) => {
            worksheet.write_number(row, col, *n as f64)?;
        }
        (Cell::Float(v), Some(f)) => {
            worksheet.write_number_with_format(row, col, *v, f)?;
        }
        (Cell::Float(v), None) => {
            worksheet.write_number(row, col, *v)?;
        }
        (Cell::Text(s), Some(f)) => {
            worksheet.write_string_with_format(row, col, s, f)?;
        }
        (Cell::Text(s), None) => {
            worksheet.write_string(row, col, s)?;
        }
    }
    Ok(())
}
