use chrono::{DateTime, Utc};
use image::DynamicImage;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// One captured image plus its capture timestamp. Cloning shares the pixel
/// buffer; the image itself is never mutated after capture.
#[derive(Clone)]
pub struct Frame {
    image: Arc<DynamicImage>,
    captured_at: DateTime<Utc>,
    frame_id: Uuid,
}

impl Frame {
    pub fn new(image: DynamicImage, captured_at: DateTime<Utc>) -> Self {
        Self {
            image: Arc::new(image),
            captured_at,
            frame_id: Uuid::new_v4(),
        }
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self::new(image, Utc::now())
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn frame_id(&self) -> Uuid {
        self.frame_id
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// How old this frame is right now.
    pub fn staleness(&self) -> Duration {
        (Utc::now() - self.captured_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
