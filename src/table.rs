//! Flat row/column table handed to the format writers.
//!
//! A race summary table always has the same layout:
//!
//! | Row | Content |
//! |-----|---------|
//! | 0 | Event name |
//! | 1 | Round label (`<class> <heat> Round <id>`) |
//! | 2 | Column header |
//! | 3.. | One row per ranked pilot |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of the event name row.
pub const TITLE_ROW: usize = 0;
/// Index of the round label row.
pub const SUBTITLE_ROW: usize = 1;
/// Index of the column header row.
pub const HEADER_ROW: usize = 2;

/// A single table value.
///
/// Host results carry heterogeneous values (positions are integers, times are
/// preformatted strings, unplaced pilots have `null`), so cells keep the JSON
/// shape they arrived in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the numeric value if this cell holds a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Integer(n) => Some(*n as f64),
            Cell::Float(f) => Some(*f),
            Cell::Empty | Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Integer(n) => write!(f, "{n}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Cell::Float(value as f64), Cell::Integer)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

/// One table row.
pub type Row = Vec<Cell>;

/// An ordered sequence of rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the event name cell, if present.
    pub fn title(&self) -> Option<&Cell> {
        self.rows.get(TITLE_ROW).and_then(|row| row.first())
    }

    /// Returns the round label cell, if present.
    pub fn subtitle(&self) -> Option<&Cell> {
        self.rows.get(SUBTITLE_ROW).and_then(|row| row.first())
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.get(HEADER_ROW)
    }

    /// Rows after the header, one per ranked pilot.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(HEADER_ROW + 1..).unwrap_or(&[])
    }

    /// Whether every data row has as many cells as the header.
    pub fn is_rectangular(&self) -> bool {
        match self.header() {
            Some(header) => self.data_rows().iter().all(|row| row.len() == header.len()),
            None => true,
        }
    }
}
