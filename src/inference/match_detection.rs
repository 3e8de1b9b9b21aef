use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::context::PipelineContext;
use super::step::InferenceStep;
use crate::error::BotError;
use crate::ports::{Detection, Detector};
use crate::state::GameMode;

/// Classes the on-pitch detector reports that count as match evidence even
/// below the confidence threshold.
const ALWAYS_QUALIFYING: [&str; 2] = ["ball", "user-controlled-player"];

/// Coarse "is a match on screen" check, run first because it is the cheapest
/// way to skip menu classification entirely: any qualifying detection means a
/// live pitch, so the step flips the mode and short-circuits the chain.
pub struct MatchDetectionStep {
    detector: Arc<dyn Detector>,
    confidence_threshold: f32,
}

impl MatchDetectionStep {
    pub fn new(detector: Arc<dyn Detector>, confidence_threshold: f32) -> Self {
        Self {
            detector,
            confidence_threshold,
        }
    }

    fn qualifies(&self, detection: &Detection) -> bool {
        ALWAYS_QUALIFYING.contains(&detection.label.as_str())
            || detection.confidence > self.confidence_threshold
    }
}

#[async_trait]
impl InferenceStep for MatchDetectionStep {
    async fn infer(&mut self, context: &mut PipelineContext) -> Result<(), BotError> {
        let detections = self.detector.detect(context.frame.image()).await?;
        let qualifying = detections.iter().filter(|d| self.qualifies(d)).count();
        if qualifying > 0 {
            debug!(qualifying, "match detections found, short-circuiting chain");
            context.tracker.lock().await.set_game_mode(GameMode::InMatch);
            context.stop();
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "match_detection"
    }
}
