use async_trait::async_trait;
use image::DynamicImage;
use tracing::debug;

use crate::action::Button;
use crate::common::Frame;
use crate::error::BotError;
use crate::ports::{Classification, Classifier, Detection, Detector, InputDriver};

/// Logs inputs instead of injecting them. For dry runs and tests.
pub struct NoopKeyboard;

impl InputDriver for NoopKeyboard {
    fn press(&self, button: Button) -> Result<(), BotError> {
        debug!(?button, "[noop] press");
        Ok(())
    }

    fn release(&self, button: Button) -> Result<(), BotError> {
        debug!(?button, "[noop] release");
        Ok(())
    }
}

/// Always answers with the last label at zero confidence, which every
/// threshold rejects; downstream the state stays unknown and the bot idles.
pub struct NullClassifier;

#[async_trait]
impl Classifier for NullClassifier {
    async fn classify(&self, _frame: &Frame, labels: &[&str]) -> Result<Classification, BotError> {
        Ok(Classification {
            label: labels.last().copied().unwrap_or_default().to_string(),
            confidences: vec![0.0; labels.len()],
        })
    }
}

/// Never detects anything.
pub struct NullDetector;

#[async_trait]
impl Detector for NullDetector {
    async fn detect(&self, _image: &DynamicImage) -> Result<Vec<Detection>, BotError> {
        Ok(Vec::new())
    }
}
