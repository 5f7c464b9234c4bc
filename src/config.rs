use clap::ValueEnum;
use std::time::Duration;

/// Time from submit until the success message shows.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Time from submit until the status message is cleared.
pub const IDLE_DELAY: Duration = Duration::from_millis(7000);

/// What a submit does to a payment cycle that is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverlapPolicy {
    /// Leave earlier cycles running. Their timers keep writing to the status
    /// slot, so the last timer to fire wins.
    Overlap,
    /// Cancel the running cycle before starting the new one.
    #[default]
    Restart,
}

/// Timing and overlap behaviour of the submission simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub processing_delay: Duration,
    /// Measured from submit, not from the success message.
    pub idle_delay: Duration,
    pub overlap_policy: OverlapPolicy,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            processing_delay: PROCESSING_DELAY,
            idle_delay: IDLE_DELAY,
            overlap_policy: OverlapPolicy::default(),
        }
    }
}

impl SimulatorConfig {
    pub fn with_overlap_policy(mut self, overlap_policy: OverlapPolicy) -> Self {
        self.overlap_policy = overlap_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.processing_delay, Duration::from_millis(2000));
        assert_eq!(config.idle_delay, Duration::from_millis(7000));
        assert_eq!(config.overlap_policy, OverlapPolicy::Restart);
    }

    #[test]
    fn test_with_overlap_policy() {
        let config = SimulatorConfig::default().with_overlap_policy(OverlapPolicy::Overlap);
        assert_eq!(config.overlap_policy, OverlapPolicy::Overlap);
        assert_eq!(config.idle_delay, IDLE_DELAY);
    }
}
