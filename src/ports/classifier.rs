use async_trait::async_trait;

use crate::common::Frame;
use crate::error::BotError;

/// Output of one classification call: the winning label plus the full
/// confidence vector, index-aligned with the label set that was passed in.
#[derive(Debug, Clone)]
pub struct Classification {
    pub label: String,
    pub confidences: Vec<f32>,
}

impl Classification {
    pub fn max_confidence(&self) -> f32 {
        self.confidences.iter().copied().fold(0.0, f32::max)
    }
}

/// Image-classifier collaborator. Stateless per call; may take non-trivial
/// wall-clock time, which is why inference runs on its own loop.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, frame: &Frame, labels: &[&str]) -> Result<Classification, BotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_confidence_over_vector() {
        let classification = Classification {
            label: "IN_MENU".to_string(),
            confidences: vec![0.2, 0.7, 0.1],
        };
        assert_eq!(classification.max_confidence(), 0.7);
    }

    #[test]
    fn max_confidence_of_empty_vector_is_zero() {
        let classification = Classification {
            label: "IN_MENU".to_string(),
            confidences: vec![],
        };
        assert_eq!(classification.max_confidence(), 0.0);
    }
}
