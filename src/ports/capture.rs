use async_trait::async_trait;

use crate::common::Frame;
use crate::error::BotError;

/// Window-capture collaborator. A failed capture is recoverable: the capture
/// loop logs it and tries again on the next iteration, so implementations
/// should not retry internally.
#[async_trait]
pub trait FrameSource: Send + Sync {
    async fn capture(&self) -> Result<Frame, BotError>;
}
