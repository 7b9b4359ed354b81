//! Table types.

use super::Alignment;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular grid of text cells.
///
/// Tables can only be built through [`Table::from_rows`], which rejects
/// ragged input, so every row has `column_count()` cells. Deserialization
/// goes through the same check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct Table {
    /// Rows in the table
    rows: Vec<TableRow>,

    /// Number of header rows (rendered bold)
    pub header_rows: u8,

    /// Table alignment on the page
    pub alignment: Alignment,

    /// Whether grid lines are drawn
    pub grid_lines: bool,
}

impl Table {
    /// Build a table from rows of cell values.
    ///
    /// The first row is the header row. Every row must have as many cells
    /// as the first row; the input is checked in full before a table is
    /// produced.
    pub fn from_rows<R, C>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        let rows: Vec<Vec<CellValue>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyTable),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(Error::RaggedTable {
                row,
                expected,
                found,
            });
        }

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| {
                let cells = values.iter().map(TableCell::from_value).collect();
                if i == 0 {
                    TableRow::header(cells)
                } else {
                    TableRow::new(cells)
                }
            })
            .collect();

        Ok(Self {
            rows,
            header_rows: 1,
            alignment: Alignment::Center,
            grid_lines: true,
        })
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get header rows.
    pub fn header(&self) -> &[TableRow] {
        &self.rows[..(self.header_rows as usize).min(self.rows.len())]
    }

    /// Get body rows (non-header).
    pub fn body(&self) -> &[TableRow] {
        &self.rows[(self.header_rows as usize).min(self.rows.len())..]
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Serialized form of a [`Table`], checked before it becomes one.
#[derive(Deserialize)]
struct RawTable {
    rows: Vec<TableRow>,
    header_rows: u8,
    alignment: Alignment,
    grid_lines: bool,
}

impl TryFrom<RawTable> for Table {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        let mut table = Table::from_rows(
            raw.rows
                .into_iter()
                .map(|row| row.cells.into_iter().map(|cell| cell.text)),
        )?;

        // At least the first row stays a header.
        let row_count = u8::try_from(table.rows.len()).unwrap_or(u8::MAX);
        table.header_rows = raw.header_rows.clamp(1, row_count);
        for (i, row) in table.rows.iter_mut().enumerate() {
            row.is_header = i < table.header_rows as usize;
        }
        table.alignment = raw.alignment;
        table.grid_lines = raw.grid_lines;
        Ok(table)
    }
}

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    pub is_header: bool,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell text
    pub text: String,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    fn from_value(value: &CellValue) -> Self {
        Self::text(value.to_string())
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A raw cell value of any supported type; rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Text value
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::Text(s.clone())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Integer(n.into())
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Integer(n.into())
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&CellValue> for CellValue {
    fn from(v: &CellValue) -> Self {
        v.clone()
    }
}
