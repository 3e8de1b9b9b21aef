use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::context::PipelineContext;
use super::step::InferenceStep;
use crate::error::BotError;
use crate::ports::Classifier;
use crate::state::{GameMode, ModeDebouncer};

/// Two-class menu-vs-match classification. Raw results feed the debouncer so
/// a single misread frame cannot flip the mode.
pub struct GameModeStep {
    classifier: Arc<dyn Classifier>,
    debouncer: ModeDebouncer,
}

impl GameModeStep {
    pub fn new(classifier: Arc<dyn Classifier>, debouncer: ModeDebouncer) -> Self {
        Self {
            classifier,
            debouncer,
        }
    }
}

#[async_trait]
impl InferenceStep for GameModeStep {
    async fn infer(&mut self, context: &mut PipelineContext) -> Result<(), BotError> {
        let classification = self
            .classifier
            .classify(&context.frame, GameMode::labels())
            .await?;
        let Some(mode) = GameMode::from_label(&classification.label) else {
            warn!("unknown game mode label: {}", classification.label);
            return Ok(());
        };
        if let Some(stable) = self.debouncer.observe(mode) {
            context.tracker.lock().await.set_game_mode(stable);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "game_mode"
    }
}
