use crate::domain::ledger::Cell;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// Rupee amounts are shown and compared in paise.
const CURRENCY_DP: u32 = 2;

/// A monetary amount in rupees.
///
/// Wraps `rust_decimal::Decimal` so that `EDI + overdue - advance` is exact.
/// Inputs keep their full precision; only the payable is rounded to paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX: Self = Self(Decimal::MAX);
    pub const MIN: Self = Self(Decimal::MIN);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Normalizes a raw ledger value into an amount.
    ///
    /// Thousands separators and surrounding whitespace are removed before
    /// parsing. Empty cells, non-numeric text and non-finite numbers are zero.
    /// Finite values beyond the decimal range saturate at `MAX`/`MIN`.
    pub fn normalize(raw: &Cell) -> Self {
        let amount = match raw {
            Cell::Number(n) => from_f64(*n),
            Cell::Text(text) => parse_amount(text),
            Cell::Empty | Cell::Bool(_) => None,
        };
        amount.map(Self).unwrap_or(Self::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Rounds half away from zero to the nearest paisa.
    pub fn round_to_paise(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

fn from_f64(n: f64) -> Option<Decimal> {
    if !n.is_finite() {
        return None;
    }
    Decimal::from_f64(n).or(Some(if n.abs() < 1.0 {
        Decimal::ZERO
    } else if n > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    }))
}

fn parse_amount(text: &str) -> Option<Decimal> {
    let cleaned = text.replace(',', "");
    let cleaned = cleaned.trim();
    // Exact decimal first; fall back to float syntax such as "1.2e3" and to
    // digit strings too long for a decimal.
    Decimal::from_str(cleaned)
        .ok()
        .or_else(|| cleaned.parse::<f64>().ok().and_then(from_f64))
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut amount = self.round_to_paise().0;
        amount.rescale(CURRENCY_DP);
        write!(f, "{}", amount)
    }
}

/// The amount a borrower is asked to pay: `edi + overdue - advance`,
/// rounded to paise. `None` when the sum leaves the decimal range.
pub fn compute_payable(edi: Money, overdue: Money, advance: Money) -> Option<Money> {
    edi.checked_add(overdue)?
        .checked_sub(advance)
        .map(Money::round_to_paise)
}
