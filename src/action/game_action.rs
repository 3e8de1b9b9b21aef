use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;

use super::button::Button;

/// One timed input: tap every button in order when `hold` is zero, otherwise
/// hold them all down together for the duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionStep {
    pub buttons: Vec<Button>,
    pub hold: Duration,
}

impl ActionStep {
    pub fn tap(buttons: Vec<Button>) -> Self {
        Self {
            buttons,
            hold: Duration::ZERO,
        }
    }

    pub fn hold(buttons: Vec<Button>, hold: Duration) -> Self {
        Self { buttons, hold }
    }
}

/// An ordered, timed input sequence produced by one decision. Immutable once
/// built and consumed exactly once by the sequencer. Carries the capture time
/// of the frame it was decided from plus the decision time, so staleness can
/// be measured end to end.
#[derive(Debug, Clone)]
pub struct Action {
    steps: Vec<ActionStep>,
    captured_at: DateTime<Utc>,
    decided_at: DateTime<Utc>,
}

impl Action {
    pub fn new(captured_at: DateTime<Utc>, steps: Vec<ActionStep>) -> Self {
        Self {
            steps,
            captured_at,
            decided_at: Utc::now(),
        }
    }

    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn decided_at(&self) -> DateTime<Utc> {
        self.decided_at
    }

    /// Frame-to-decision lag.
    pub fn decision_latency(&self) -> Duration {
        (self.decided_at - self.captured_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{:?} for {:?}. ", step.buttons, step.hold)?;
        }
        Ok(())
    }
}
