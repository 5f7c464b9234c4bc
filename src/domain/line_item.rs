use super::money::Money;
use super::numeric::{Numeric, parse_decimal, parse_integer};
use crate::error::{CheckoutError, Result};

/// One purchasable entry on the payment page.
///
/// Holds the raw field values the page exposes (the selected variant's price
/// and the quantity input) as strings, exactly as a user left them. Numbers are
/// only read out on demand, so a half-typed quantity is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Display name of the product.
    pub name: String,
    variants: Vec<String>,
    default_variant: usize,
    default_quantity: String,
    selected: String,
    quantity: String,
}

impl LineItem {
    /// Creates an item with the first variant selected.
    pub fn new(
        name: impl Into<String>,
        variants: Vec<String>,
        default_quantity: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let Some(first) = variants.first().cloned() else {
            return Err(CheckoutError::CartError(format!(
                "Item '{}' has no price variants",
                name
            )));
        };
        let default_quantity = default_quantity.into();
        Ok(Self {
            name,
            variants,
            default_variant: 0,
            quantity: default_quantity.clone(),
            default_quantity,
            selected: first,
        })
    }

    /// Makes another variant the default (and current) selection.
    pub fn with_default_variant(mut self, index: usize) -> Result<Self> {
        let Some(value) = self.variants.get(index).cloned() else {
            return Err(CheckoutError::CartError(format!(
                "Item '{}' has no variant {}",
                self.name, index
            )));
        };
        self.default_variant = index;
        self.selected = value;
        Ok(self)
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    pub fn selected_variant(&self) -> &str {
        &self.selected
    }

    pub fn quantity_field(&self) -> &str {
        &self.quantity
    }

    /// Records a new variant selection, as reported by the page.
    pub fn set_variant(&mut self, value: impl Into<String>) {
        self.selected = value.into();
    }

    /// Records the quantity input's current text.
    pub fn set_quantity(&mut self, raw: impl Into<String>) {
        self.quantity = raw.into();
    }

    pub fn unit_price(&self) -> Numeric<Money> {
        parse_decimal(&self.selected).map(Money::new)
    }

    pub fn quantity(&self) -> Numeric<i64> {
        parse_integer(&self.quantity)
    }

    /// Puts both fields back to how the page first showed them.
    pub fn reset(&mut self) {
        self.selected = self.variants[self.default_variant].clone();
        self.quantity = self.default_quantity.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fish() -> LineItem {
        LineItem::new(
            "Premium Tilapia",
            vec!["30.00".to_string(), "45.00".to_string()],
            "1",
        )
        .unwrap()
    }

    #[test]
    fn test_new_selects_first_variant() {
        let item = fish();
        assert_eq!(item.selected_variant(), "30.00");
        assert_eq!(item.unit_price(), Numeric::Valid(Money::new(dec!(30.00))));
        assert_eq!(item.quantity(), Numeric::Valid(1));
    }

    #[test]
    fn test_new_without_variants() {
        let result = LineItem::new("Empty", vec![], "1");
        assert!(matches!(result, Err(CheckoutError::CartError(_))));
    }

    #[test]
    fn test_default_variant_out_of_range() {
        assert!(fish().with_default_variant(5).is_err());
        let item = fish().with_default_variant(1).unwrap();
        assert_eq!(item.selected_variant(), "45.00");
    }

    #[test]
    fn test_edits_keep_raw_text() {
        let mut item = fish();
        item.set_quantity("");
        assert_eq!(item.quantity_field(), "");
        assert_eq!(item.quantity(), Numeric::Invalid);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut item = fish().with_default_variant(1).unwrap();
        item.set_variant("30.00");
        item.set_quantity("7");

        item.reset();
        assert_eq!(item.selected_variant(), "45.00");
        assert_eq!(item.quantity_field(), "1");
    }
}
