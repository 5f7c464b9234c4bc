use serde::Serialize;

pub const PROCESSING_MESSAGE: &str = "Processing your payment...";
pub const SUCCESS_MESSAGE: &str = "Payment successful! Thank you for your order.";

/// Colour a status message is painted in. Maps onto the page's theme variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageColor {
    InProgress,
    Success,
}

impl MessageColor {
    pub fn css_value(&self) -> &'static str {
        match self {
            MessageColor::InProgress => "var(--accent-primary)",
            MessageColor::Success => "var(--success-green)",
        }
    }
}

/// Where the simulated payment currently is. Driven by timers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
    Succeeded,
}

impl SubmissionState {
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "",
            SubmissionState::Processing => PROCESSING_MESSAGE,
            SubmissionState::Succeeded => SUCCESS_MESSAGE,
        }
    }

    /// Idle only clears the text; the last colour stays on the slot.
    pub fn color(&self) -> Option<MessageColor> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Processing => Some(MessageColor::InProgress),
            SubmissionState::Succeeded => Some(MessageColor::Success),
        }
    }
}
