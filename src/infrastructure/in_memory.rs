use crate::domain::ports::DisplaySlot;
use crate::domain::submission::MessageColor;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct SlotState {
    text: String,
    color: Option<MessageColor>,
    writes: Vec<String>,
}

/// A display slot that keeps what was written to it.
///
/// Clones share the same state, so a test can hand one clone to the page and
/// inspect the other. Every `set_text` call is also appended to a write log.
#[derive(Debug, Default, Clone)]
pub struct InMemorySlot {
    state: Arc<RwLock<SlotState>>,
}

impl InMemorySlot {
    /// Creates a new, empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.text.clone()
    }

    pub fn color(&self) -> Option<MessageColor> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.color
    }

    /// Every text written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.writes.clone()
    }
}

impl DisplaySlot for InMemorySlot {
    fn set_text(&self, text: &str) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.text = text.to_string();
        state.writes.push(text.to_string());
    }

    fn set_color(&self, color: MessageColor) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.color = Some(color);
    }
}
