use async_trait::async_trait;
use image::DynamicImage;

use crate::error::BotError;

/// Axis-aligned detection box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn contains(&self, point: (u32, u32)) -> bool {
        let (px, py) = point;
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// One object-detector output. Consumed within a single inference step and
/// never retained across frames.
#[derive(Debug, Clone)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

/// Object-detector collaborator. Takes the (possibly cropped) image rather
/// than a `Frame` because steps pre-process the region they care about.
#[async_trait]
pub trait Detector: Send + Sync {
    async fn detect(&self, image: &DynamicImage) -> Result<Vec<Detection>, BotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_contains_inclusive_edges() {
        let bbox = BoundingBox {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
        };
        assert!(bbox.contains((10, 20)));
        assert!(bbox.contains((40, 60)));
        assert!(bbox.contains((25, 35)));
        assert!(!bbox.contains((9, 20)));
        assert!(!bbox.contains((41, 35)));
        assert!(!bbox.contains((25, 61)));
    }
}
