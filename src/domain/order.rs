use super::line_item::LineItem;
use super::money::Money;
use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};

/// Name used for items that were given none.
const FALLBACK_PRODUCT_NAME: &str = "Item";

/// Smallest quantity the backend stores on an order line.
const MIN_QUANTITY: i64 = 1;

/// One entry of the order payload posted to the storefront backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
}

impl OrderLine {
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_times(self.quantity)
    }
}

/// Body of a `create_order` request. `total_amount` is the pre-tax sum of the
/// line totals, matching what the backend stores on the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
    pub total_amount: Money,
}

impl OrderRequest {
    /// Snapshots the cart into a payload. Fails on an empty cart, on any
    /// field that does not read as a number, and on quantities below one.
    pub fn from_items(items: &[LineItem]) -> Result<Self> {
        if items.is_empty() {
            return Err(CheckoutError::CartError("No items provided".to_string()));
        }

        let mut lines = Vec::with_capacity(items.len());
        let mut total_amount = Money::ZERO;
        for item in items {
            let unit_price = item
                .unit_price()
                .valid()
                .ok_or_else(|| CheckoutError::InvalidField {
                    item: item.name.clone(),
                    field: "variant",
                    value: item.selected_variant().to_string(),
                })?;
            let quantity = item
                .quantity()
                .valid()
                .filter(|quantity| *quantity >= MIN_QUANTITY)
                .ok_or_else(|| CheckoutError::InvalidField {
                    item: item.name.clone(),
                    field: "quantity",
                    value: item.quantity_field().to_string(),
                })?;

            let product_name = if item.name.trim().is_empty() {
                FALLBACK_PRODUCT_NAME.to_string()
            } else {
                item.name.clone()
            };
            let line = OrderLine {
                product_name,
                quantity,
                unit_price,
            };
            total_amount = line
                .line_total()
                .and_then(|line_total| total_amount.checked_add(line_total))
                .ok_or_else(|| CheckoutError::CartError("Order total overflow".to_string()))?;
            lines.push(line);
        }

        Ok(Self {
            items: lines,
            total_amount,
        })
    }
}
