use crate::domain::ledger::{Cell, LedgerColumns, LedgerRow};
use crate::error::{ReminderError, Result};
use std::io::Read;

/// Reads ledger rows from a CSV source.
///
/// The header row is resolved eagerly so that missing columns fail before
/// any row is produced. Records may be shorter or longer than the header.
/// Cells that are not valid UTF-8 are decoded lossily.
pub struct LedgerReader<R: Read> {
    reader: csv::Reader<R>,
    columns: LedgerColumns,
}

impl<R: Read> LedgerReader<R> {
    /// Creates a new `LedgerReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        let headers: Vec<String> = reader.byte_headers()?.iter().map(decode).collect();
        let columns = LedgerColumns::resolve(&headers)?;
        Ok(Self { reader, columns })
    }

    /// Returns an iterator that lazily reads rows in file order.
    pub fn rows(self) -> impl Iterator<Item = Result<LedgerRow>> {
        let columns = self.columns;
        self.reader
            .into_byte_records()
            .enumerate()
            .map(move |(index, record)| {
                let record = record.map_err(ReminderError::from)?;
                let cells = record.iter().map(|field| Cell::from_text(&decode(field))).collect();
                Ok(columns.row_from_cells(index + 1, cells))
            })
    }
}

fn decode(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
