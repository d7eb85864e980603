//! Relay implementations: the live WaSender HTTP client and an in-memory
//! relay for dry runs and tests.

pub mod in_memory;
pub mod wasender;
