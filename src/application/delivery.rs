use crate::domain::ledger::Cell;
use crate::domain::message::ReminderMessage;
use crate::domain::outcome::{DeliveryOutcome, DeliveryStatus};
use crate::domain::phone::MobileNumber;
use crate::domain::ports::MessageRelayBox;
use tracing::{error, info, warn};

/// HTTP status the relay uses to acknowledge a message.
const RELAY_OK: u16 = 200;

/// Delivers one reminder to one borrower and reports what happened.
///
/// Never fails: invalid numbers, rejections and transport errors are all
/// captured in the returned `DeliveryOutcome`.
pub struct DeliveryClient {
    relay: MessageRelayBox,
}

impl DeliveryClient {
    pub fn new(relay: MessageRelayBox) -> Self {
        Self { relay }
    }

    pub async fn deliver(
        &self,
        row: usize,
        loan_number: &str,
        raw_mobile: &Cell,
        message: &ReminderMessage,
    ) -> DeliveryOutcome {
        let outcome = |recipient, status| DeliveryOutcome {
            row,
            loan_number: loan_number.to_string(),
            recipient,
            status,
        };

        let Some(mobile) = MobileNumber::normalize(raw_mobile) else {
            warn!(row, loan = loan_number, mobile = %raw_mobile, "Invalid mobile");
            return outcome(None, DeliveryStatus::InvalidRecipient);
        };

        let status = match self.relay.send(&mobile.international(), message.as_str()).await {
            Ok(response) => {
                info!(
                    row,
                    recipient = %mobile,
                    status = response.status,
                    body = %response.body,
                    "Sent reminder"
                );
                if response.status == RELAY_OK {
                    DeliveryStatus::Delivered {
                        status: response.status,
                    }
                } else {
                    DeliveryStatus::Rejected {
                        status: response.status,
                        body: response.body,
                    }
                }
            }
            Err(e) => {
                error!(row, recipient = %mobile, error = %e, "Error sending reminder");
                DeliveryStatus::TransportFailed {
                    detail: e.to_string(),
                }
            }
        };

        outcome(Some(mobile), status)
    }
}
