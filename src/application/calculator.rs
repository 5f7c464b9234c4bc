use crate::domain::line_item::LineItem;
use crate::domain::ports::SlotHandle;
use crate::domain::summary::{OrderSummary, compute_item_subtotal, compute_order_summary};
use crate::error::{CheckoutError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// The page's line items, shared between event handlers and timer tasks.
pub type SharedCart = Arc<RwLock<Vec<LineItem>>>;

/// The three summary lines of the page. Any of them may be missing.
#[derive(Clone, Default)]
pub struct SummarySlots {
    pub subtotal: Option<SlotHandle>,
    pub taxes: Option<SlotHandle>,
    pub total: Option<SlotHandle>,
}

/// Keeps the displayed subtotals and summary in step with the line items.
///
/// Every change recomputes the whole summary from the items; nothing is
/// accumulated between calls. Clones share the same cart and slots.
#[derive(Clone)]
pub struct OrderSummaryCalculator {
    items: SharedCart,
    item_slots: Arc<Vec<Option<SlotHandle>>>,
    summary_slots: Arc<SummarySlots>,
}

impl OrderSummaryCalculator {
    /// Wires the calculator to its slots and renders the summary once.
    ///
    /// `item_slots[i]` is the subtotal cell of `items[i]`. Item cells are left
    /// untouched until that item changes.
    pub async fn init(
        items: SharedCart,
        item_slots: Vec<Option<SlotHandle>>,
        summary_slots: SummarySlots,
    ) -> Self {
        let calculator = Self {
            items,
            item_slots: Arc::new(item_slots),
            summary_slots: Arc::new(summary_slots),
        };
        calculator.render_summary().await;
        calculator
    }

    pub fn items(&self) -> SharedCart {
        Arc::clone(&self.items)
    }

    /// Handles a variant selection change on item `index`.
    pub async fn on_variant_change(&self, index: usize, value: &str) -> Result<OrderSummary> {
        self.update_item(index, |item| item.set_variant(value)).await
    }

    /// Handles typing in the quantity input of item `index`.
    pub async fn on_quantity_input(&self, index: usize, raw: &str) -> Result<OrderSummary> {
        self.update_item(index, |item| item.set_quantity(raw)).await
    }

    /// Applies `edit`, then writes the item's own subtotal before the summary.
    async fn update_item<F>(&self, index: usize, edit: F) -> Result<OrderSummary>
    where
        F: FnOnce(&mut LineItem),
    {
        {
            let mut items = self.items.write().await;
            let item = items
                .get_mut(index)
                .ok_or(CheckoutError::UnknownItem(index))?;
            edit(item);

            let subtotal = compute_item_subtotal(item.unit_price(), item.quantity());
            if !subtotal.is_valid() {
                warn!(
                    item = %item.name,
                    variant = item.selected_variant(),
                    quantity = item.quantity_field(),
                    "Line item has an unreadable field"
                );
            }
            if let Some(Some(slot)) = self.item_slots.get(index) {
                slot.set_text(&subtotal.to_string());
            }
        }

        Ok(self.render_summary().await)
    }

    /// Recomputes the summary over all items and writes the three summary slots.
    pub async fn render_summary(&self) -> OrderSummary {
        let summary = {
            let items = self.items.read().await;
            compute_order_summary(items.iter())
        };
        debug!(
            subtotal = %summary.subtotal,
            taxes = %summary.taxes,
            total = %summary.total,
            "Order summary recomputed"
        );

        let slots = &self.summary_slots;
        if let Some(slot) = &slots.subtotal {
            slot.set_text(&summary.subtotal.to_string());
        }
        if let Some(slot) = &slots.taxes {
            slot.set_text(&summary.taxes.to_string());
        }
        if let Some(slot) = &slots.total {
            slot.set_text(&summary.total.to_string());
        }
        summary
    }

    /// Puts every item back to its defaults, rewrites each item's subtotal cell
    /// and re-renders the summary, so cells and summary agree afterwards.
    pub async fn reset_items(&self) -> OrderSummary {
        {
            let mut items = self.items.write().await;
            for (index, item) in items.iter_mut().enumerate() {
                item.reset();
                if let Some(Some(slot)) = self.item_slots.get(index) {
                    let subtotal = compute_item_subtotal(item.unit_price(), item.quantity());
                    slot.set_text(&subtotal.to_string());
                }
            }
        }
        self.render_summary().await
    }
}
