use async_trait::async_trait;
use std::path::PathBuf;

use crate::common::Frame;
use crate::error::BotError;
use crate::ports::FrameSource;

/// Serves a fixed image from disk instead of live window capture. Useful for
/// throttled debugging of the inference side without the game running.
pub struct StaticImageSource {
    path: PathBuf,
}

impl StaticImageSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FrameSource for StaticImageSource {
    async fn capture(&self) -> Result<Frame, BotError> {
        let path = self.path.clone();
        let image = tokio::task::spawn_blocking(move || image::open(path))
            .await
            .map_err(|e| BotError::Capture(e.to_string()))??;
        Ok(Frame::from_image(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    #[tokio::test]
    async fn serves_the_image_on_every_capture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.png");
        DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            32,
            16,
            Rgb([9, 9, 9]),
        ))
        .save(&path)
        .unwrap();

        let source = StaticImageSource::new(path);
        let first = source.capture().await.unwrap();
        let second = source.capture().await.unwrap();
        assert_eq!((first.width(), first.height()), (32, 16));
        assert_ne!(first.frame_id(), second.frame_id());
    }

    #[tokio::test]
    async fn missing_file_is_a_recoverable_capture_error() {
        let source = StaticImageSource::new(PathBuf::from("/nonexistent/frame.png"));
        assert!(source.capture().await.is_err());
    }
}
