use super::numeric::Numeric;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Prefix put in front of every rendered amount.
pub const CURRENCY_PREFIX: &str = "GHS";

/// Number of decimal places amounts are shown with.
pub const DISPLAY_PLACES: u32 = 2;

/// A monetary value in Ghana cedis.
///
/// Wraps `rust_decimal::Decimal` so prices and totals never go through binary
/// floating point. Only rendering rounds; arithmetic keeps full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Multiplies by a quantity, `None` on overflow.
    pub fn checked_times(self, quantity: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Multiplies by a rate, `None` on overflow.
    pub fn checked_scale(self, rate: Decimal) -> Option<Self> {
        self.0.checked_mul(rate).map(Self)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// The value as it is shown: exactly two places, halves rounded away
    /// from zero.
    pub fn rounded(&self) -> Decimal {
        let mut shown = self
            .0
            .round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        // Only pads with zeros; the rounding above already dropped extra places.
        shown.rescale(DISPLAY_PLACES);
        shown
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", CURRENCY_PREFIX, self.rounded())
    }
}

/// Renders like a page would: a figure that could not be computed reads
/// `GHS NaN`.
impl fmt::Display for Numeric<Money> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Valid(money) => fmt::Display::fmt(money, f),
            Numeric::Invalid => write!(f, "{} NaN", CURRENCY_PREFIX),
        }
    }
}
