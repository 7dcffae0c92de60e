//! CSV output writer.

use csv::{QuoteStyle, WriterBuilder};
use log::info;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::format::ExportFormat;
use crate::output::ExportPayload;
use crate::table::{Cell, Table};

/// Serializes the table as a CSV payload.
///
/// # Format
/// - Delimiter: `config.delimiter` (default `,`)
/// - Quoting: text cells are always quoted, numbers are bare, empty cells
///   are written as an empty field
/// - Rows keep their own length (title rows have a single cell)
/// - Encoding: UTF-8
pub fn write_csv(table: &Table, config: &ExportConfig) -> Result<ExportPayload> {
    let data = to_csv(table, config)?;

    info!("Exporting to CSV");

    Ok(ExportPayload::text(
        data,
        ExportFormat::Csv.mime_type(),
        ExportFormat::Csv.extension(),
    ))
}

/// Converts the table to a CSV string.
///
/// Same format as `write_csv`, but returns only the text.
pub fn to_csv(table: &Table, config: &ExportConfig) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(QuoteStyle::Never)
        .flexible(true)
        .from_writer(Vec::new());

    for row in table.rows() {
        writer.write_record(row.iter().map(render_field))?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Quotes by cell type, so numeric-looking text such as "007" stays text.
fn render_field(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => format!("\"{}\"", s.replace('"', "\"\"")),
        other => other.to_string(),
    }
}
