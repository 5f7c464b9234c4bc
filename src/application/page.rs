use super::calculator::{OrderSummaryCalculator, SharedCart, SummarySlots};
use super::simulator::{SubmissionHandle, SubmissionSimulator};
use crate::config::SimulatorConfig;
use crate::domain::line_item::LineItem;
use crate::domain::ports::{SlotHandle, SubmitEvent};
use crate::domain::summary::{OrderSummary, compute_order_summary};
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// One line item card as found on the page: its fields and its subtotal cell.
pub struct ItemCard {
    pub item: LineItem,
    pub subtotal_slot: Option<SlotHandle>,
}

impl ItemCard {
    pub fn new(item: LineItem) -> Self {
        Self {
            item,
            subtotal_slot: None,
        }
    }

    pub fn with_subtotal_slot(mut self, slot: SlotHandle) -> Self {
        self.subtotal_slot = Some(slot);
        self
    }
}

/// Everything the checkout needs from the page, handed over explicitly.
#[derive(Default)]
pub struct PageContext {
    pub cards: Vec<ItemCard>,
    pub summary: SummarySlots,
    /// Whether the page has a payment form at all.
    pub has_form: bool,
    pub message_slot: Option<SlotHandle>,
}

/// A wired-up payment page: the calculator plus, if there is a form, the
/// submission simulator.
pub struct CheckoutPage {
    calculator: OrderSummaryCalculator,
    simulator: Option<SubmissionSimulator>,
}

impl CheckoutPage {
    /// Connects the components to the page and renders the initial summary.
    pub async fn init(context: PageContext, config: SimulatorConfig) -> Self {
        let PageContext {
            cards,
            summary,
            has_form,
            message_slot,
        } = context;

        let (items, item_slots): (Vec<_>, Vec<_>) = cards
            .into_iter()
            .map(|card| (card.item, card.subtotal_slot))
            .unzip();
        debug!(items = items.len(), has_form, "Initialising checkout page");

        let cart: SharedCart = Arc::new(RwLock::new(items));
        let calculator = OrderSummaryCalculator::init(cart, item_slots, summary).await;
        let simulator = has_form
            .then(|| SubmissionSimulator::new(calculator.clone(), message_slot, config));

        Self {
            calculator,
            simulator,
        }
    }

    pub fn calculator(&self) -> &OrderSummaryCalculator {
        &self.calculator
    }

    pub fn simulator(&self) -> Option<&SubmissionSimulator> {
        self.simulator.as_ref()
    }

    pub async fn on_variant_change(&self, index: usize, value: &str) -> Result<OrderSummary> {
        self.calculator.on_variant_change(index, value).await
    }

    pub async fn on_quantity_input(&self, index: usize, raw: &str) -> Result<OrderSummary> {
        self.calculator.on_quantity_input(index, raw).await
    }

    /// Forwards a submit to the simulator. A page without a form has nothing
    /// listening, so the event is left untouched.
    pub fn on_submit(&self, event: &mut SubmitEvent) -> Option<SubmissionHandle> {
        self.simulator.as_ref()?.submit(event)
    }

    /// Current contents of the cart.
    pub async fn items(&self) -> Vec<LineItem> {
        self.calculator.items().read().await.clone()
    }

    pub async fn summary(&self) -> OrderSummary {
        let items = self.calculator.items();
        let items = items.read().await;
        compute_order_summary(items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::InMemorySlot;

    fn card(price: &str, quantity: &str) -> ItemCard {
        ItemCard::new(LineItem::new("Item", vec![price.to_string()], quantity).unwrap())
    }

    #[tokio::test]
    async fn test_page_without_form_ignores_submit() {
        let page = CheckoutPage::init(
            PageContext {
                cards: vec![card("10.00", "1")],
                ..Default::default()
            },
            SimulatorConfig::default(),
        )
        .await;

        let mut event = SubmitEvent::new();
        assert!(page.on_submit(&mut event).is_none());
        assert!(!event.default_prevented());
        assert!(page.simulator().is_none());
    }

    #[tokio::test]
    async fn test_page_routes_edits_to_item_slots() {
        let first = InMemorySlot::new();
        let second = InMemorySlot::new();
        let page = CheckoutPage::init(
            PageContext {
                cards: vec![
                    card("5.00", "3").with_subtotal_slot(Arc::new(first.clone())),
                    card("2.50", "4").with_subtotal_slot(Arc::new(second.clone())),
                ],
                ..Default::default()
            },
            SimulatorConfig::default(),
        )
        .await;

        page.on_quantity_input(1, "2").await.unwrap();
        assert!(first.writes().is_empty());
        assert_eq!(second.text(), "GHS 5.00");
        assert_eq!(page.summary().await.subtotal.to_string(), "GHS 20.00");
        assert_eq!(page.items().await[1].quantity_field(), "2");
    }
}
