#![allow(dead_code)]

use powerot_checkout::application::calculator::SummarySlots;
use powerot_checkout::application::page::{CheckoutPage, ItemCard, PageContext};
use powerot_checkout::config::SimulatorConfig;
use powerot_checkout::domain::line_item::LineItem;
use powerot_checkout::infrastructure::in_memory::InMemorySlot;
use std::io::{Error, Write};
use std::sync::Arc;
use tempfile::NamedTempFile;

pub fn item(price: &str, quantity: &str) -> LineItem {
    LineItem::new("Item", vec![price.to_string()], quantity).unwrap()
}

/// A page whose every slot is an `InMemorySlot` the test can inspect.
pub struct TestPage {
    pub page: CheckoutPage,
    pub item_slots: Vec<InMemorySlot>,
    pub subtotal: InMemorySlot,
    pub taxes: InMemorySlot,
    pub total: InMemorySlot,
    pub message: InMemorySlot,
}

impl TestPage {
    pub async fn new(items: Vec<LineItem>, config: SimulatorConfig) -> Self {
        let item_slots: Vec<InMemorySlot> = items.iter().map(|_| InMemorySlot::new()).collect();
        let subtotal = InMemorySlot::new();
        let taxes = InMemorySlot::new();
        let total = InMemorySlot::new();
        let message = InMemorySlot::new();

        let cards = items
            .into_iter()
            .zip(&item_slots)
            .map(|(item, slot)| ItemCard::new(item).with_subtotal_slot(Arc::new(slot.clone())))
            .collect();
        let context = PageContext {
            cards,
            summary: SummarySlots {
                subtotal: Some(Arc::new(subtotal.clone())),
                taxes: Some(Arc::new(taxes.clone())),
                total: Some(Arc::new(total.clone())),
            },
            has_form: true,
            message_slot: Some(Arc::new(message.clone())),
        };
        let page = CheckoutPage::init(context, config).await;

        Self {
            page,
            item_slots,
            subtotal,
            taxes,
            total,
            message,
        }
    }

    pub fn summary_texts(&self) -> (String, String, String) {
        (self.subtotal.text(), self.taxes.text(), self.total.text())
    }
}

pub fn write_cart(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "name, prices, quantity")?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}
