use async_trait::async_trait;
use tracing::debug;

use super::context::PipelineContext;
use crate::error::BotError;

/// Chain of Responsibility pattern for the inference pipeline. Steps run in
/// declared order and may call [`PipelineContext::stop`] to skip the rest of
/// the current invocation.
#[async_trait]
pub trait InferenceStep: Send + Sync {
    async fn infer(&mut self, context: &mut PipelineContext) -> Result<(), BotError>;
    fn name(&self) -> &'static str;
}

/// Runs frames through an ordered list of inference steps. A step error
/// aborts the remainder of the invocation and is surfaced to the caller,
/// which logs it and moves on to the next frame; one bad classification must
/// never take the pipeline down.
pub struct InferenceChain {
    steps: Vec<Box<dyn InferenceStep>>,
}

impl InferenceChain {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(mut self, step: Box<dyn InferenceStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub async fn run(&mut self, context: &mut PipelineContext) -> Result<(), BotError> {
        for step in &mut self.steps {
            if context.is_halted() {
                debug!("chain short-circuited before step: {}", step.name());
                break;
            }
            debug!("running inference step: {}", step.name());
            step.infer(context).await?;
        }
        Ok(())
    }
}

impl Default for InferenceChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Frame;
    use crate::state::{GameStateTracker, SelectionGrid};
    use image::{DynamicImage, ImageBuffer, Rgb};
    use std::sync::{Arc, Mutex as StdMutex};
    use tokio::sync::Mutex;

    fn context_with_frame_width(width: u32) -> PipelineContext {
        let image = DynamicImage::ImageRgb8(ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(
            width,
            8,
            Rgb([0, 0, 0]),
        ));
        PipelineContext::new(
            Frame::from_image(image),
            Arc::new(Mutex::new(GameStateTracker::new())),
            Arc::new(Mutex::new(SelectionGrid::new())),
        )
    }

    struct RecordingStep {
        name: &'static str,
        log: Arc<StdMutex<Vec<&'static str>>>,
        stop_on_even_width: bool,
        fail: bool,
    }

    #[async_trait]
    impl InferenceStep for RecordingStep {
        async fn infer(&mut self, context: &mut PipelineContext) -> Result<(), BotError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                return Err(BotError::Inference("injected step failure".to_string()));
            }
            if self.stop_on_even_width && context.frame.width() % 2 == 0 {
                context.stop();
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    fn chain(log: &Arc<StdMutex<Vec<&'static str>>>, fail_second: bool) -> InferenceChain {
        InferenceChain::new()
            .add_step(Box::new(RecordingStep {
                name: "s1",
                log: log.clone(),
                stop_on_even_width: true,
                fail: false,
            }))
            .add_step(Box::new(RecordingStep {
                name: "s2",
                log: log.clone(),
                stop_on_even_width: false,
                fail: fail_second,
            }))
            .add_step(Box::new(RecordingStep {
                name: "s3",
                log: log.clone(),
                stop_on_even_width: false,
                fail: false,
            }))
    }

    #[tokio::test]
    async fn stop_skips_the_rest_of_the_invocation() {
        let log = Arc::new(StdMutex::new(Vec::new()));
        let mut chain = chain(&log, false);

        let mut even = context_with_frame_width(2);
        chain.run(&mut even).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s1"]);
    }

    #[tokio::test]
    async fn stop_does_not_leak_into_the_next_invocation() {
        let log = Arc::new(StdMutex::new(Vec::new()));
        let mut chain = chain(&log, false);

        let mut even = context_with_frame_width(2);
        chain.run(&mut even).await.unwrap();
        let mut odd = context_with_frame_width(3);
        chain.run(&mut odd).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["s1", "s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn step_error_aborts_only_the_current_invocation() {
        let log = Arc::new(StdMutex::new(Vec::new()));
        let mut chain = chain(&log, true);

        let mut first = context_with_frame_width(3);
        assert!(chain.run(&mut first).await.is_err());
        assert_eq!(*log.lock().unwrap(), vec!["s1", "s2"]);

        // The chain stays usable for the next frame.
        let mut second = context_with_frame_width(2);
        chain.run(&mut second).await.unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["s1", "s2", "s1"]);
    }
}
