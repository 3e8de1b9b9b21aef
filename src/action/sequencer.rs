use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::button::Button;
use super::game_action::{Action, ActionStep};
use crate::error::BotError;
use crate::ports::InputDriver;

/// Executes one action at a time against the input driver. The single worst
/// failure mode here is a key left held down after the sequencer stops, so
/// every press is tracked by a [`HeldButtons`] guard that releases on every
/// exit path: completion, cancellation mid-hold, and driver errors.
pub struct ActionSequencer {
    driver: Arc<dyn InputDriver>,
}

impl ActionSequencer {
    pub fn new(driver: Arc<dyn InputDriver>) -> Self {
        Self { driver }
    }

    /// Runs the action's steps strictly in order. A cancellation observed at
    /// a step boundary or mid-hold releases everything currently held and
    /// surfaces as `BotError::Cancelled`.
    pub async fn apply(&self, action: Action, cancel: &CancellationToken) -> Result<(), BotError> {
        debug!(latency = ?action.decision_latency(), "applying action: {}", action);
        for step in action.steps() {
            if cancel.is_cancelled() {
                return Err(BotError::Cancelled);
            }
            if step.hold.is_zero() {
                self.execute_taps(step)?;
            } else {
                self.execute_hold(step, cancel).await?;
            }
        }
        Ok(())
    }

    fn execute_taps(&self, step: &ActionStep) -> Result<(), BotError> {
        for &button in &step.buttons {
            self.driver.tap(button)?;
        }
        Ok(())
    }

    async fn execute_hold(
        &self,
        step: &ActionStep,
        cancel: &CancellationToken,
    ) -> Result<(), BotError> {
        let mut held = HeldButtons::new(self.driver.as_ref());
        for &button in &step.buttons {
            held.press(button)?;
        }
        tokio::select! {
            _ = cancel.cancelled() => {
                held.release_all();
                Err(BotError::Cancelled)
            }
            _ = tokio::time::sleep(step.hold) => {
                held.release_all();
                Ok(())
            }
        }
    }
}

/// Records exactly which buttons have been pressed and releases them when
/// told to or when dropped. A button enters the list only after its press
/// succeeded, so an error partway through a chord still releases the keys
/// that did go down, and nothing is ever double-released.
struct HeldButtons<'a> {
    driver: &'a dyn InputDriver,
    held: Vec<Button>,
}

impl<'a> HeldButtons<'a> {
    fn new(driver: &'a dyn InputDriver) -> Self {
        Self {
            driver,
            held: Vec::new(),
        }
    }

    fn press(&mut self, button: Button) -> Result<(), BotError> {
        self.driver.press(button)?;
        self.held.push(button);
        Ok(())
    }

    fn release_all(&mut self) {
        for button in self.held.drain(..) {
            if let Err(e) = self.driver.release(button) {
                warn!("failed to release {:?}: {}", button, e);
            }
        }
    }
}

impl Drop for HeldButtons<'_> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum InputEvent {
        Press(Button),
        Release(Button),
    }

    #[derive(Default)]
    struct RecordingDriver {
        events: Mutex<Vec<InputEvent>>,
        fail_press_of: Option<Button>,
    }

    impl RecordingDriver {
        fn failing_on(button: Button) -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                fail_press_of: Some(button),
            }
        }

        fn events(&self) -> Vec<InputEvent> {
            self.events.lock().unwrap().clone()
        }

        fn held_now(&self) -> Vec<Button> {
            let mut held = Vec::new();
            for event in self.events().iter() {
                match event {
                    InputEvent::Press(b) => held.push(*b),
                    InputEvent::Release(b) => held.retain(|h| h != b),
                }
            }
            held
        }
    }

    impl InputDriver for RecordingDriver {
        fn press(&self, button: Button) -> Result<(), BotError> {
            if self.fail_press_of == Some(button) {
                return Err(BotError::Input(format!("injected failure on {:?}", button)));
            }
            self.events.lock().unwrap().push(InputEvent::Press(button));
            Ok(())
        }

        fn release(&self, button: Button) -> Result<(), BotError> {
            self.events.lock().unwrap().push(InputEvent::Release(button));
            Ok(())
        }
    }

    fn action(steps: Vec<ActionStep>) -> Action {
        Action::new(Utc::now(), steps)
    }

    #[tokio::test(start_paused = true)]
    async fn taps_then_holds_in_declared_order() {
        let driver = Arc::new(RecordingDriver::default());
        let sequencer = ActionSequencer::new(driver.clone());
        let started = tokio::time::Instant::now();

        sequencer
            .apply(
                action(vec![
                    ActionStep::tap(vec![Button::Cross, Button::Moon]),
                    ActionStep::hold(vec![Button::L2], Duration::from_millis(300)),
                ]),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(
            driver.events(),
            vec![
                InputEvent::Press(Button::Cross),
                InputEvent::Release(Button::Cross),
                InputEvent::Press(Button::Moon),
                InputEvent::Release(Button::Moon),
                InputEvent::Press(Button::L2),
                InputEvent::Release(Button::L2),
            ]
        );
        assert_eq!(started.elapsed(), Duration::from_millis(300));
        assert!(driver.held_now().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn chord_holds_all_buttons_concurrently() {
        let driver = Arc::new(RecordingDriver::default());
        let sequencer = ActionSequencer::new(driver.clone());

        sequencer
            .apply(
                action(vec![ActionStep::hold(
                    vec![Button::L2, Button::LStickLeft],
                    Duration::from_millis(250),
                )]),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let events = driver.events();
        // Both presses land before either release.
        assert_eq!(events[0], InputEvent::Press(Button::L2));
        assert_eq!(events[1], InputEvent::Press(Button::LStickLeft));
        assert!(matches!(events[2], InputEvent::Release(_)));
        assert!(driver.held_now().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_mid_hold_releases_and_stops() {
        let driver = Arc::new(RecordingDriver::default());
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let cancel = cancel.clone();
            let driver = driver.clone();
            async move {
                let sequencer = ActionSequencer::new(driver);
                sequencer
                    .apply(
                        action(vec![
                            ActionStep::tap(vec![Button::Cross]),
                            ActionStep::hold(vec![Button::L2], Duration::from_millis(300)),
                            ActionStep::tap(vec![Button::Pyramid]),
                        ]),
                        &cancel,
                    )
                    .await
            }
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
        let result = task.await.unwrap();

        assert!(matches!(result, Err(BotError::Cancelled)));
        assert!(driver.held_now().is_empty(), "stuck input after cancel");
        assert!(
            !driver
                .events()
                .iter()
                .any(|e| *e == InputEvent::Press(Button::Pyramid)),
            "steps after the cancelled hold must not execute"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_at_step_boundary_runs_nothing_further() {
        let driver = Arc::new(RecordingDriver::default());
        let sequencer = ActionSequencer::new(driver.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = sequencer
            .apply(action(vec![ActionStep::tap(vec![Button::Cross])]), &cancel)
            .await;

        assert!(matches!(result, Err(BotError::Cancelled)));
        assert!(driver.events().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn press_failure_mid_chord_releases_what_went_down() {
        let driver = Arc::new(RecordingDriver::failing_on(Button::LStickLeft));
        let sequencer = ActionSequencer::new(driver.clone());

        let result = sequencer
            .apply(
                action(vec![ActionStep::hold(
                    vec![Button::L2, Button::LStickLeft],
                    Duration::from_millis(250),
                )]),
                &CancellationToken::new(),
            )
            .await;

        assert!(matches!(result, Err(BotError::Input(_))));
        assert!(driver.held_now().is_empty(), "stuck input after press error");
    }
}
