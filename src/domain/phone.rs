use crate::domain::ledger::Cell;
use std::fmt;

const COUNTRY_PREFIX: &str = "91";

/// A validated 10-digit Indian mobile number starting with 6, 7, 8 or 9.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Normalizes a raw ledger value into a mobile number.
    ///
    /// Every non-digit is discarded, a leading `91` is dropped from 12-digit
    /// values, and whatever remains must be 10 digits starting with 6-9.
    /// Any other input yields `None`.
    pub fn normalize(raw: &Cell) -> Option<Self> {
        let text = raw.to_string();
        let mut digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() == 12 && digits.starts_with(COUNTRY_PREFIX) {
            digits.replace_range(..2, "");
        }

        let valid = digits.len() == 10 && matches!(digits.as_bytes()[0], b'6'..=b'9');
        valid.then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Destination in the international form the relay expects.
    pub fn international(&self) -> String {
        format!("+{}{}", COUNTRY_PREFIX, self.0)
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
