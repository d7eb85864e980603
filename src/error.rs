use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),
    #[error("Workbook has no worksheets")]
    EmptyWorkbook,
    #[error("Ledger is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Unsupported ledger format: {0}")]
    UnsupportedFormat(String),
    #[error("Relay transport error: {0}")]
    TransportError(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, ReminderError>;
