//! Pure domain types: ledger rows, normalized fields, rendered reminders
//! and delivery outcomes. Nothing in here performs IO.

pub mod ledger;
pub mod message;
pub mod money;
pub mod outcome;
pub mod phone;
pub mod ports;
