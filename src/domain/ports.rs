use super::submission::MessageColor;
use std::sync::Arc;

/// A place on the page that shows text: a subtotal cell, a summary line, the
/// payment status banner.
///
/// Writes cannot fail from the caller's point of view. Implementations use
/// interior mutability since slots are shared with timer tasks.
pub trait DisplaySlot: Send + Sync {
    fn set_text(&self, text: &str);
    fn set_color(&self, color: MessageColor);
}

pub type SlotHandle = Arc<dyn DisplaySlot>;

/// The form's submit signal. Handlers cancel the browser's default navigation
/// through it.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
