pub mod ledger_reader;
pub mod outcome_writer;
