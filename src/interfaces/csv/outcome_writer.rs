use crate::domain::outcome::DeliveryOutcome;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    row: usize,
    loan_number: &'a str,
    recipient: &'a str,
    status: String,
    success: bool,
}

/// Writes per-row delivery outcomes as CSV.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcomes<'a, I>(&mut self, outcomes: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a DeliveryOutcome>,
    {
        for outcome in outcomes {
            self.writer.serialize(OutcomeRecord {
                row: outcome.row,
                loan_number: &outcome.loan_number,
                recipient: outcome.recipient.as_ref().map_or("", |m| m.as_str()),
                status: outcome.status.label(),
                success: outcome.is_success(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
