use crate::domain::phone::MobileNumber;

/// What happened when a reminder was handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The relay answered 200.
    Delivered { status: u16 },
    /// The relay answered with any other status.
    Rejected { status: u16, body: String },
    /// The request never completed (connect error, timeout, bad response).
    TransportFailed { detail: String },
    /// The mobile number failed normalization; nothing was sent.
    InvalidRecipient,
}

impl DeliveryStatus {
    /// Short label used in reports.
    pub fn label(&self) -> String {
        match self {
            DeliveryStatus::Delivered { status } => format!("delivered ({status})"),
            DeliveryStatus::Rejected { status, .. } => format!("rejected ({status})"),
            DeliveryStatus::TransportFailed { .. } => "transport error".to_string(),
            DeliveryStatus::InvalidRecipient => "invalid recipient".to_string(),
        }
    }
}

/// Per-row delivery result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub row: usize,
    pub loan_number: String,
    pub recipient: Option<MobileNumber>,
    pub status: DeliveryStatus,
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, DeliveryStatus::Delivered { .. })
    }

    /// True when a request actually reached (or tried to reach) the relay.
    pub fn was_attempted(&self) -> bool {
        !matches!(self.status, DeliveryStatus::InvalidRecipient)
    }
}

/// Aggregate of one dispatch run.
///
/// `skipped` covers rows with nothing payable and rows whose mobile number
/// was invalid; the latter are also counted in `invalid_recipients`.
/// `attempted == succeeded + failed` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub total_rows: usize,
    pub attempted: usize,
    pub skipped: usize,
    pub invalid_recipients: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<DeliveryOutcome>,
}

impl BatchResult {
    pub fn record_ineligible(&mut self) {
        self.total_rows += 1;
        self.skipped += 1;
    }

    pub fn record(&mut self, outcome: DeliveryOutcome) {
        self.total_rows += 1;
        if !outcome.was_attempted() {
            self.skipped += 1;
            self.invalid_recipients += 1;
        } else {
            self.attempted += 1;
            if outcome.is_success() {
                self.succeeded += 1;
            } else {
                self.failed += 1;
            }
        }
        self.outcomes.push(outcome);
    }
}
