use crate::domain::ledger::LedgerRow;
use crate::error::{ReminderError, Result};
use crate::interfaces::csv::ledger_reader::LedgerReader;
use crate::interfaces::workbook::read_workbook;
use std::fs::File;
use std::path::Path;

/// Ledger file formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Csv,
    Workbook,
}

impl LedgerFormat {
    /// Picks a format from the file extension, rejecting anything that is not
    /// a spreadsheet.
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Self::Workbook),
            _ => Err(ReminderError::UnsupportedFormat(format!(
                "{} is not a spreadsheet; please send an Excel (.xlsx) or CSV ledger",
                path.display()
            ))),
        }
    }
}

/// Reads the whole ledger before anything is dispatched.
pub fn load_ledger(path: &Path) -> Result<Vec<LedgerRow>> {
    match LedgerFormat::detect(path)? {
        LedgerFormat::Csv => LedgerReader::new(File::open(path)?)?.rows().collect(),
        LedgerFormat::Workbook => read_workbook(path),
    }
}
