use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::action::{Action, ActionSequencer};
use crate::common::{Frame, LatestSlot};
use crate::config::Configuration;
use crate::error::BotError;
use crate::inference::{
    GameModeStep, InferenceChain, MatchDetectionStep, MenuStateStep, PipelineContext,
    SquadSelectionStep,
};
use crate::ports::{Classifier, Detector, FrameSource, InputDriver};
use crate::state::{GameStateTracker, ModeDebouncer, SelectionGrid};
use crate::strategy;

/// Owns the three pipeline loops (capture, infer, act) and the shutdown
/// signal they all share. The loops talk through two single-slot channels
/// and the mutex-guarded tracker, never directly to each other.
pub struct Coordinator {
    cancel_token: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl Coordinator {
    fn start(
        configuration: Configuration,
        frame_source: Arc<dyn FrameSource>,
        chain: InferenceChain,
        input_driver: Arc<dyn InputDriver>,
    ) -> Self {
        let cancel_token = CancellationToken::new();
        let frames = Arc::new(LatestSlot::new());
        let actions = Arc::new(LatestSlot::new());
        let tracker = Arc::new(Mutex::new(GameStateTracker::new()));
        let grid = Arc::new(Mutex::new(SelectionGrid::new()));

        let tasks = vec![
            spawn_capture_loop(
                frame_source,
                frames.clone(),
                configuration.clone(),
                cancel_token.clone(),
            ),
            spawn_infer_loop(
                chain,
                frames,
                tracker.clone(),
                grid.clone(),
                configuration.clone(),
                cancel_token.clone(),
            ),
            spawn_act_loop(
                ActionSequencer::new(input_driver),
                actions,
                tracker,
                grid,
                configuration,
                cancel_token.clone(),
            ),
        ];

        Self {
            cancel_token,
            tasks,
        }
    }

    /// Signals all loops to exit at their next iteration boundary. An action
    /// mid-hold observes the same token and releases its keys on the way out.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }

    pub async fn shutdown(mut self) {
        self.cancel_token.cancel();
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                error!("pipeline task panicked: {e}");
            }
        }
        info!("pipeline stopped");
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

fn spawn_capture_loop(
    source: Arc<dyn FrameSource>,
    frames: Arc<LatestSlot<Frame>>,
    configuration: Configuration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("capture loop started");
        loop {
            if cancel_token.is_cancelled() {
                break;
            }
            match source.capture().await {
                Ok(frame) => {
                    if configuration.save_screenshots {
                        persist_screenshot(frame.clone(), configuration.screenshots_dir.clone());
                    }
                    if frames.put(frame).await {
                        debug!("evicted an unread frame");
                    }
                }
                Err(e) => error!("capture failed: {e}"),
            }
            if !idle_wait(&cancel_token, configuration.capture_delay()).await {
                break;
            }
        }
        info!("capture loop stopped");
    })
}

fn spawn_infer_loop(
    mut chain: InferenceChain,
    frames: Arc<LatestSlot<Frame>>,
    tracker: Arc<Mutex<GameStateTracker>>,
    grid: Arc<Mutex<SelectionGrid>>,
    configuration: Configuration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("inference loop started");
        loop {
            if cancel_token.is_cancelled() {
                break;
            }
            if let Some(frame) = frames.try_take().await {
                let captured_at = frame.captured_at();
                let staleness = frame.staleness();
                let started = Instant::now();
                let mut context = PipelineContext::new(frame, tracker.clone(), grid.clone());
                match chain.run(&mut context).await {
                    Ok(()) => {
                        tracker.lock().await.record_frame(captured_at);
                        debug!(?staleness, latency = ?started.elapsed(), "frame inferred");
                    }
                    Err(e) => warn!("inference abandoned for this frame: {e}"),
                }
            }
            if !idle_wait(&cancel_token, configuration.infer_delay()).await {
                break;
            }
        }
        info!("inference loop stopped");
    })
}

fn spawn_act_loop(
    sequencer: ActionSequencer,
    actions: Arc<LatestSlot<Action>>,
    tracker: Arc<Mutex<GameStateTracker>>,
    grid: Arc<Mutex<SelectionGrid>>,
    configuration: Configuration,
    cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("act loop started");
        loop {
            if cancel_token.is_cancelled() {
                break;
            }
            let snapshot = tracker.lock().await.snapshot();
            let decided = {
                let mut grid = grid.lock().await;
                strategy::decide(&snapshot, &mut grid)
            };
            if let Some(action) = decided {
                if actions.put(action).await {
                    debug!("evicted an undispatched action");
                }
            }
            // One action at a time: apply runs to completion (or cancellation)
            // before the next decision dispatches.
            if let Some(action) = actions.try_take().await {
                match sequencer.apply(action, &cancel_token).await {
                    Ok(()) => {}
                    Err(BotError::Cancelled) => break,
                    Err(e) => warn!("action aborted mid-sequence: {e}"),
                }
            }
            if !idle_wait(&cancel_token, configuration.act_delay()).await {
                break;
            }
        }
        info!("act loop stopped");
    })
}

/// End-of-iteration pause. Yields at least once even for a zero delay so
/// sibling loops on the same scheduler always get a turn; returns false once
/// shutdown is signalled.
async fn idle_wait(cancel_token: &CancellationToken, delay: Duration) -> bool {
    if delay.is_zero() {
        tokio::task::yield_now().await;
        return !cancel_token.is_cancelled();
    }
    tokio::select! {
        _ = cancel_token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

/// Best-effort screenshot persistence; failures are logged, never fatal.
fn persist_screenshot(frame: Frame, dir: PathBuf) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!("failed to create screenshot directory: {e}");
            return;
        }
        let filename = dir.join(format!(
            "screenshot-{}-{}.png",
            frame.captured_at().timestamp_millis(),
            frame.frame_id()
        ));
        if let Err(e) = frame.image().save(&filename) {
            warn!("failed to save screenshot: {e}");
        }
    });
}

pub struct CoordinatorBuilder {
    configuration: Configuration,
    frame_source: Option<Arc<dyn FrameSource>>,
    input_driver: Option<Arc<dyn InputDriver>>,
    match_detector: Option<Arc<dyn Detector>>,
    mode_classifier: Option<Arc<dyn Classifier>>,
    menu_classifier: Option<Arc<dyn Classifier>>,
    squad_detector: Option<Arc<dyn Detector>>,
    chain: Option<InferenceChain>,
}

impl CoordinatorBuilder {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            frame_source: None,
            input_driver: None,
            match_detector: None,
            mode_classifier: None,
            menu_classifier: None,
            squad_detector: None,
            chain: None,
        }
    }

    pub fn frame_source(mut self, frame_source: Arc<dyn FrameSource>) -> Self {
        self.frame_source = Some(frame_source);
        self
    }

    pub fn input_driver(mut self, input_driver: Arc<dyn InputDriver>) -> Self {
        self.input_driver = Some(input_driver);
        self
    }

    pub fn match_detector(mut self, detector: Arc<dyn Detector>) -> Self {
        self.match_detector = Some(detector);
        self
    }

    pub fn mode_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.mode_classifier = Some(classifier);
        self
    }

    pub fn menu_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.menu_classifier = Some(classifier);
        self
    }

    pub fn squad_detector(mut self, detector: Arc<dyn Detector>) -> Self {
        self.squad_detector = Some(detector);
        self
    }

    /// Replaces the canonical four-step chain entirely. Intended for tests
    /// and experiments; the model collaborators are ignored when set.
    pub fn chain(mut self, chain: InferenceChain) -> Self {
        self.chain = Some(chain);
        self
    }

    fn build_chain(&mut self) -> Result<InferenceChain, BotError> {
        if let Some(chain) = self.chain.take() {
            return Ok(chain);
        }
        let match_detector = self
            .match_detector
            .take()
            .ok_or_else(|| BotError::Pipeline("match detector not set".to_string()))?;
        let mode_classifier = self
            .mode_classifier
            .take()
            .ok_or_else(|| BotError::Pipeline("mode classifier not set".to_string()))?;
        let menu_classifier = self
            .menu_classifier
            .take()
            .ok_or_else(|| BotError::Pipeline("menu classifier not set".to_string()))?;
        let squad_detector = self
            .squad_detector
            .take()
            .ok_or_else(|| BotError::Pipeline("squad detector not set".to_string()))?;
        Ok(InferenceChain::new()
            .add_step(Box::new(MatchDetectionStep::new(
                match_detector,
                self.configuration.detector_confidence_threshold,
            )))
            .add_step(Box::new(GameModeStep::new(
                mode_classifier,
                ModeDebouncer::new(self.configuration.mode_debounce_frames),
            )))
            .add_step(Box::new(MenuStateStep::new(
                menu_classifier,
                self.configuration.classifier_confidence_threshold,
            )))
            .add_step(Box::new(SquadSelectionStep::new(
                squad_detector,
                &self.configuration,
            ))))
    }

    pub fn build(mut self) -> Result<Coordinator, BotError> {
        let chain = self.build_chain()?;
        let frame_source = self
            .frame_source
            .take()
            .ok_or_else(|| BotError::Pipeline("frame source not set".to_string()))?;
        let input_driver = self
            .input_driver
            .take()
            .ok_or_else(|| BotError::Pipeline("input driver not set".to_string()))?;
        Ok(Coordinator::start(
            self.configuration,
            frame_source,
            chain,
            input_driver,
        ))
    }
}
