use super::line_item::LineItem;
use super::money::Money;
use super::numeric::Numeric;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};

/// Flat sales tax applied to every order (5%).
pub const TAX_RATE: Decimal = dec!(0.05);

/// Totals for the whole cart. Always derived from the items, never stored.
///
/// Serialized figures are the rounded amounts the page shows, so `4.2500`
/// goes out as `"4.25"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderSummary {
    #[serde(serialize_with = "serialize_shown")]
    pub subtotal: Numeric<Money>,
    #[serde(serialize_with = "serialize_shown")]
    pub taxes: Numeric<Money>,
    #[serde(serialize_with = "serialize_shown")]
    pub total: Numeric<Money>,
}

fn serialize_shown<S>(figure: &Numeric<Money>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    figure.map(|money| money.rounded()).serialize(serializer)
}

impl OrderSummary {
    /// Derives taxes and total from a subtotal.
    pub fn from_subtotal(subtotal: Numeric<Money>) -> Self {
        let taxes: Numeric<Money> = match subtotal {
            Numeric::Valid(amount) => amount.checked_scale(TAX_RATE).into(),
            Numeric::Invalid => Numeric::Invalid,
        };
        let total = subtotal.combine(taxes, Money::checked_add);
        Self {
            subtotal,
            taxes,
            total,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.subtotal.is_valid() && self.taxes.is_valid() && self.total.is_valid()
    }
}

/// Price of one line: unit price times quantity. Unreadable inputs give an
/// `Invalid` subtotal rather than an error.
pub fn compute_item_subtotal(
    unit_price: Numeric<Money>,
    quantity: Numeric<i64>,
) -> Numeric<Money> {
    unit_price.combine(quantity, Money::checked_times)
}

/// Recomputes the summary from scratch over every item.
pub fn compute_order_summary<'a, I>(items: I) -> OrderSummary
where
    I: IntoIterator<Item = &'a LineItem>,
{
    let subtotal = items
        .into_iter()
        .map(|item| compute_item_subtotal(item.unit_price(), item.quantity()))
        .fold(Numeric::Valid(Money::ZERO), |acc, line| {
            acc.combine(line, Money::checked_add)
        });
    OrderSummary::from_subtotal(subtotal)
}
