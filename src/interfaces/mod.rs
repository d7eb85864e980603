pub mod csv;
pub mod ledger;
pub mod workbook;
