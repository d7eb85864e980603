use crate::domain::ledger::{Cell, LedgerColumns, LedgerRow};
use crate::error::{ReminderError, Result};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::from_text(s),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::from_text(s),
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

/// Reads every row of the first worksheet of an Excel or OpenDocument file.
///
/// The first row of the used range is the header.
pub fn read_workbook(path: &Path) -> Result<Vec<LedgerRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReminderError::EmptyWorkbook)??;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|d| Cell::from(d).to_string()).collect(),
        None => Vec::new(),
    };
    let columns = LedgerColumns::resolve(&headers)?;

    Ok(rows
        .enumerate()
        .map(|(index, cells)| columns.row_from_cells(index + 1, cells.iter().map(Cell::from).collect()))
        .collect())
}
