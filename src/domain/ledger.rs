use crate::error::{ReminderError, Result};
use std::fmt;

pub const LOAN_NUMBER_COLUMN: &str = "LOAN A/C NO";
pub const CUSTOMER_NAME_COLUMN: &str = "CUSTOMER NAME";
pub const MOBILE_COLUMN: &str = "MOBILE NO";
pub const EDI_COLUMN: &str = "EDI AMOUNT";
pub const OVERDUE_COLUMN: &str = "OVER DUE";
pub const ADVANCE_COLUMN: &str = "ADVANCE";

/// Name used in the greeting when the ledger carries no customer name.
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// A raw, untyped spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// Builds a cell from CSV text. Blank text is an empty cell.
    pub fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            // Spreadsheets store integers as floats; render them without ".0"
            Cell::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s.trim()),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One borrower record, in the order it appeared in the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    /// 1-based position among the data rows (header excluded).
    pub row: usize,
    pub loan_number: String,
    pub customer_name: String,
    pub mobile: Cell,
    pub edi: Cell,
    pub overdue: Cell,
    pub advance: Cell,
}

/// Strips non-breaking spaces and surrounding whitespace from a header.
pub fn normalize_header(header: &str) -> String {
    header.replace('\u{a0}', " ").trim().to_string()
}

/// Column positions resolved from a ledger's header row.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerColumns {
    loan_number: usize,
    customer_name: Option<usize>,
    mobile: usize,
    edi: usize,
    overdue: usize,
    advance: usize,
}

impl LedgerColumns {
    /// Resolves the known columns by name. Order is irrelevant and extra
    /// columns are ignored; any missing required column fails the whole ledger.
    pub fn resolve<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| normalize_header(h.as_ref()))
            .collect();
        let find = |name: &str| headers.iter().position(|h| h == name);

        let mut missing = Vec::new();
        let mut require = |name: &'static str| {
            let index = find(name);
            if index.is_none() {
                missing.push(name.to_string());
            }
            index.unwrap_or_default()
        };

        let loan_number = require(LOAN_NUMBER_COLUMN);
        let mobile = require(MOBILE_COLUMN);
        let edi = require(EDI_COLUMN);
        let overdue = require(OVERDUE_COLUMN);
        let advance = require(ADVANCE_COLUMN);

        if !missing.is_empty() {
            return Err(ReminderError::MissingColumns(missing));
        }

        Ok(Self {
            loan_number,
            customer_name: find(CUSTOMER_NAME_COLUMN),
            mobile,
            edi,
            overdue,
            advance,
        })
    }

    /// Maps one record's cells onto a `LedgerRow`. Short records read as empty cells.
    pub fn row_from_cells(&self, row: usize, mut cells: Vec<Cell>) -> LedgerRow {
        let mut take = |index: usize| {
            cells
                .get_mut(index)
                .map(std::mem::take)
                .unwrap_or_default()
        };

        let customer_name = self
            .customer_name
            .map(&mut take)
            .filter(|cell| !cell.is_empty())
            .map(|cell| cell.to_string())
            .unwrap_or_else(|| DEFAULT_CUSTOMER_NAME.to_string());

        LedgerRow {
            row,
            loan_number: take(self.loan_number).to_string(),
            customer_name,
            mobile: take(self.mobile),
            edi: take(self.edi),
            overdue: take(self.overdue),
            advance: take(self.advance),
        }
    }
}
