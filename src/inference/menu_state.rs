use async_trait::async_trait;
use std::sync::Arc;

use super::context::PipelineContext;
use super::step::InferenceStep;
use crate::error::BotError;
use crate::ports::Classifier;
use crate::state::{GameMode, MenuState};

/// Maps the menu classifier's top class onto a menu sub-state. Low confidence
/// is not an error: it resolves to `MenuState::Unknown`, and the act loop
/// simply does nothing for an unknown menu.
pub struct MenuStateStep {
    classifier: Arc<dyn Classifier>,
    confidence_threshold: f32,
}

impl MenuStateStep {
    pub fn new(classifier: Arc<dyn Classifier>, confidence_threshold: f32) -> Self {
        Self {
            classifier,
            confidence_threshold,
        }
    }
}

#[async_trait]
impl InferenceStep for MenuStateStep {
    async fn infer(&mut self, context: &mut PipelineContext) -> Result<(), BotError> {
        if context.tracker.lock().await.mode() != GameMode::InMenu {
            return Ok(());
        }
        let classification = self
            .classifier
            .classify(&context.frame, MenuState::labels())
            .await?;
        let state = if classification.max_confidence() > self.confidence_threshold {
            MenuState::from_label(&classification.label).unwrap_or(MenuState::Unknown)
        } else {
            MenuState::Unknown
        };
        context.tracker.lock().await.set_menu_state(state);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "menu_state"
    }
}
