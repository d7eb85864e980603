//! Application layer: the delivery client and the batch dispatcher that
//! drives it over a ledger.

pub mod delivery;
pub mod dispatcher;
