use super::calculator::OrderSummaryCalculator;
use crate::config::{OverlapPolicy, SimulatorConfig};
use crate::domain::ports::{SlotHandle, SubmitEvent};
use crate::domain::submission::SubmissionState;
use std::panic;
use std::sync::{Arc, Mutex};
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

/// The status message slot plus the state it currently shows.
#[derive(Clone)]
struct StatusBanner {
    slot: SlotHandle,
    state: Arc<Mutex<SubmissionState>>,
}

impl StatusBanner {
    fn show(&self, next: SubmissionState) {
        {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            *state = next;
        }
        self.slot.set_text(next.message());
        if let Some(color) = next.color() {
            self.slot.set_color(color);
        }
        info!(state = ?next, "Payment status changed");
    }
}

/// The two timers scheduled by one submit.
///
/// Dropping the handle does not stop the cycle; call [`cancel`](Self::cancel).
#[derive(Debug)]
pub struct SubmissionHandle {
    success: JoinHandle<()>,
    clear: JoinHandle<()>,
}

impl SubmissionHandle {
    /// Stops whatever part of the cycle has not run yet.
    pub fn cancel(&self) {
        self.success.abort();
        self.clear.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.success.is_finished() && self.clear.is_finished()
    }

    /// Waits until both timers have fired or been cancelled.
    ///
    /// A cancelled timer counts as finished. A timer that panicked re-raises
    /// its panic here.
    pub async fn finished(self) {
        for task in [self.success, self.clear] {
            if let Err(e) = task.await
                && e.is_panic()
            {
                warn!(error = %e, "Payment timer task panicked");
                panic::resume_unwind(e.into_panic());
            }
        }
    }

    fn abort_handles(&self) -> [AbortHandle; 2] {
        [self.success.abort_handle(), self.clear.abort_handle()]
    }
}

/// Fakes a payment: shows a processing message, then a success message, then
/// clears it. Nothing leaves the process.
pub struct SubmissionSimulator {
    calculator: OrderSummaryCalculator,
    banner: Option<StatusBanner>,
    config: SimulatorConfig,
    in_flight: Mutex<Vec<AbortHandle>>,
}

impl SubmissionSimulator {
    pub fn new(
        calculator: OrderSummaryCalculator,
        message_slot: Option<SlotHandle>,
        config: SimulatorConfig,
    ) -> Self {
        Self {
            calculator,
            banner: message_slot.map(|slot| StatusBanner {
                slot,
                state: Arc::new(Mutex::new(SubmissionState::Idle)),
            }),
            config,
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// The state the status slot currently shows.
    pub fn state(&self) -> SubmissionState {
        match &self.banner {
            Some(banner) => *banner.state.lock().unwrap_or_else(|e| e.into_inner()),
            None => SubmissionState::Idle,
        }
    }

    /// Handles the form's submit signal.
    ///
    /// Always cancels the default navigation. Without a message slot nothing
    /// else happens and `None` is returned. Otherwise the processing message is
    /// shown right away and the rest of the cycle is scheduled on the tokio
    /// runtime; this must be called from within one.
    pub fn submit(&self, event: &mut SubmitEvent) -> Option<SubmissionHandle> {
        event.prevent_default();
        let banner = self.banner.as_ref()?;

        if self.config.overlap_policy == OverlapPolicy::Restart {
            self.cancel_in_flight();
        }

        banner.show(SubmissionState::Processing);
        // Deadlines are fixed now, not when the tasks first get polled.
        let submitted_at = Instant::now();

        let success = {
            let banner = banner.clone();
            let calculator = self.calculator.clone();
            let deadline = submitted_at + self.config.processing_delay;
            tokio::spawn(async move {
                sleep_until(deadline).await;
                banner.show(SubmissionState::Succeeded);
                calculator.reset_items().await;
                debug!("Line items reset to defaults");
            })
        };

        let clear = {
            let banner = banner.clone();
            let deadline = submitted_at + self.config.idle_delay;
            tokio::spawn(async move {
                sleep_until(deadline).await;
                banner.show(SubmissionState::Idle);
            })
        };

        let handle = SubmissionHandle { success, clear };
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        in_flight.retain(|task| !task.is_finished());
        in_flight.extend(handle.abort_handles());
        Some(handle)
    }

    /// Cancels every cycle that is still running.
    pub fn cancel_in_flight(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        let pending = in_flight.iter().filter(|task| !task.is_finished()).count();
        if pending > 0 {
            debug!(pending, "Cancelling running payment cycle");
        }
        for task in in_flight.drain(..) {
            task.abort();
        }
    }
}
