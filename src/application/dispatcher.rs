use crate::application::delivery::DeliveryClient;
use crate::config::Config;
use crate::domain::ledger::LedgerRow;
use crate::domain::message::{ReminderDetails, ReminderMessage};
use crate::domain::money::{Money, compute_payable};
use crate::domain::outcome::BatchResult;
use crate::domain::ports::MessageRelayBox;
use crate::error::Result;
use crate::interfaces::ledger::load_ledger;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Turns ledger rows into payment reminders, one row at a time.
///
/// Rows are handled strictly in order with at most one request in flight.
/// After every row that owes money the dispatcher sleeps for the configured
/// pacing interval, whatever the delivery result. A failed row never stops
/// the batch.
pub struct BatchDispatcher {
    delivery: DeliveryClient,
    payment_link_base: String,
    pacing: Duration,
}

impl BatchDispatcher {
    pub fn new(config: &Config, relay: MessageRelayBox) -> Self {
        Self {
            delivery: DeliveryClient::new(relay),
            payment_link_base: config.payment_link_base.clone(),
            pacing: config.pacing,
        }
    }

    /// Loads a ledger file and dispatches all of it.
    ///
    /// Fails only when the file cannot be read as a ledger at all.
    pub async fn dispatch_file(&self, path: &Path) -> Result<BatchResult> {
        let rows = load_ledger(path)?;
        info!(path = %path.display(), rows = rows.len(), "Loaded ledger");
        Ok(self.dispatch(rows).await)
    }

    pub async fn dispatch<I>(&self, rows: I) -> BatchResult
    where
        I: IntoIterator<Item = LedgerRow>,
    {
        let mut result = BatchResult::default();

        for row in rows {
            let edi = Money::normalize(&row.edi);
            let overdue = Money::normalize(&row.overdue);
            let advance = Money::normalize(&row.advance);
            let Some(payable) = compute_payable(edi, overdue, advance) else {
                warn!(row = row.row, loan = %row.loan_number, "Payable amount out of range, skipping");
                result.record_ineligible();
                continue;
            };

            if !payable.is_positive() {
                debug!(row = row.row, loan = %row.loan_number, %payable, "Nothing payable, skipping");
                result.record_ineligible();
                continue;
            }

            let message = ReminderMessage::compose(
                &ReminderDetails {
                    customer_name: &row.customer_name,
                    loan_number: &row.loan_number,
                    advance,
                    edi,
                    overdue,
                    payable,
                },
                &self.payment_link_base,
            );

            let outcome = self
                .delivery
                .deliver(row.row, &row.loan_number, &row.mobile, &message)
                .await;
            result.record(outcome);

            tokio::time::sleep(self.pacing).await;
        }

        info!(
            total = result.total_rows,
            attempted = result.attempted,
            skipped = result.skipped,
            invalid_recipients = result.invalid_recipients,
            succeeded = result.succeeded,
            failed = result.failed,
            "Batch finished"
        );
        result
    }
}
