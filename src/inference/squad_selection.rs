use async_trait::async_trait;
use image::imageops::FilterType;
use image::DynamicImage;
use std::sync::Arc;
use tracing::debug;

use super::context::PipelineContext;
use super::step::InferenceStep;
use crate::config::{Configuration, CropRegion};
use crate::error::BotError;
use crate::ports::{Detection, Detector};
use crate::state::squad_grid::GridObservation;
use crate::state::MenuState;

/// Detector class for a squad card already played this rotation.
pub const PLAYED_LABEL: &str = "squad-played";
/// Detector class for the squad card the cursor currently sits on.
pub const SELECTED_LABEL: &str = "squad-selected";

/// Reads the squad-selection menu. The on-screen list is three rows of two
/// cards probed at six fixed points:
///
/// ```text
/// [0] [1]
/// [2] [3]
/// [4] [5]
/// ```
///
/// Only the bottom two rows are playable; a "selected" hit on the top row
/// yields the -1 row sentinel that the strategy normalizes away.
pub struct SquadSelectionStep {
    detector: Arc<dyn Detector>,
    expected_size: (u32, u32),
    upscale_size: (u32, u32),
    crop: CropRegion,
    points: Vec<(u32, u32)>,
}

impl SquadSelectionStep {
    pub fn new(detector: Arc<dyn Detector>, configuration: &Configuration) -> Self {
        Self {
            detector,
            expected_size: configuration.expected_frame_size,
            upscale_size: configuration.upscale_frame_size,
            crop: configuration.squad_selection_crop,
            points: configuration.squad_selection_points.clone(),
        }
    }

    /// Upscales a 720p frame to the detector's training resolution, rejects
    /// anything else that is not already at that resolution, then crops out
    /// the squad-list region.
    fn prepare(&self, image: &DynamicImage) -> Result<DynamicImage, BotError> {
        let dimensions = (image.width(), image.height());
        let scaled;
        let source = if dimensions == self.expected_size {
            image
        } else if dimensions == self.upscale_size {
            scaled = image.resize_exact(self.expected_size.0, self.expected_size.1, FilterType::Triangle);
            &scaled
        } else {
            return Err(BotError::Inference(format!(
                "input frame dimensions are expected to be {}x{}, received {}x{}",
                self.expected_size.0, self.expected_size.1, dimensions.0, dimensions.1
            )));
        };
        Ok(source.crop_imm(
            self.crop.left,
            self.crop.top,
            self.crop.width(),
            self.crop.height(),
        ))
    }

    fn evaluate(&self, detections: &[Detection]) -> GridObservation {
        let mut observation = GridObservation::default();
        for detection in detections {
            for (index, &point) in self.points.iter().enumerate() {
                if !detection.bbox.contains(point) {
                    continue;
                }
                match detection.label.as_str() {
                    SELECTED_LABEL => {
                        let col = (index % 2) as i8;
                        let row = match index {
                            0 | 1 => -1,
                            2 | 3 => 0,
                            _ => 1,
                        };
                        observation.cursor = Some((row, col));
                    }
                    PLAYED_LABEL => {
                        let cell = match index {
                            2 => Some((0, 0)),
                            3 => Some((0, 1)),
                            4 => Some((1, 0)),
                            5 => Some((1, 1)),
                            _ => None,
                        };
                        if let Some((row, col)) = cell {
                            observation.played[row][col] = true;
                        }
                    }
                    _ => {}
                }
            }
        }
        observation
    }
}

#[async_trait]
impl InferenceStep for SquadSelectionStep {
    async fn infer(&mut self, context: &mut PipelineContext) -> Result<(), BotError> {
        if context.tracker.lock().await.menu_state() != Some(MenuState::SquadSelection) {
            return Ok(());
        }
        let region = self.prepare(context.frame.image())?;
        let detections = self.detector.detect(&region).await?;
        let observation = self.evaluate(&detections);
        debug!(?observation, "squad selection observed");
        context.grid.lock().await.merge_observation(&observation);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "squad_selection"
    }
}
