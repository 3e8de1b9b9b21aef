use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Capture error: {0}")]
    Capture(String),
    #[error("Inference error: {0}")]
    Inference(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Pipeline error: {0}")]
    Pipeline(String),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Action cancelled")]
    Cancelled,
}

impl BotError {
    /// Only configuration failures are allowed to terminate the process;
    /// everything else is recovered inside its loop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BotError::Config(_))
    }
}
