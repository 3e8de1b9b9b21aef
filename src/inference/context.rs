use std::sync::Arc;
use tokio::sync::Mutex;

use crate::common::Frame;
use crate::state::{GameStateTracker, SelectionGrid};

/// Mutable state shared across the steps of one chain invocation: the frame
/// under inspection plus handles to the tracker and selection grid. Built
/// fresh per frame and discarded afterwards; nothing step-local survives
/// between invocations except what steps write through these handles.
pub struct PipelineContext {
    pub frame: Frame,
    pub tracker: Arc<Mutex<GameStateTracker>>,
    pub grid: Arc<Mutex<SelectionGrid>>,
    halted: bool,
}

impl PipelineContext {
    pub fn new(
        frame: Frame,
        tracker: Arc<Mutex<GameStateTracker>>,
        grid: Arc<Mutex<SelectionGrid>>,
    ) -> Self {
        Self {
            frame,
            tracker,
            grid,
            halted: false,
        }
    }

    /// Short-circuits the remainder of the current chain invocation only;
    /// the next frame starts with a fresh context.
    pub fn stop(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}
