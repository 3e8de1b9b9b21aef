use std::time::Duration;

use super::{action_origin, ActionStrategy};
use crate::action::{Action, ActionStep, Button};
use crate::state::{SelectionGrid, StateSnapshot};

const DRIBBLE_HOLD: Duration = Duration::from_millis(250);

/// Keeps a live match moving: a held-trigger dribble square (left, up, right,
/// down) followed by a pass. Enough to run down the clock unattended.
pub struct InMatchStrategy;

impl ActionStrategy for InMatchStrategy {
    fn name(&self) -> &'static str {
        "in_match"
    }

    fn determine_action(
        &self,
        snapshot: &StateSnapshot,
        _grid: &mut SelectionGrid,
    ) -> Option<Action> {
        let steps = vec![
            ActionStep::hold(vec![Button::L2, Button::LStickLeft], DRIBBLE_HOLD),
            ActionStep::hold(vec![Button::L2, Button::LStickUp], DRIBBLE_HOLD),
            ActionStep::hold(vec![Button::L2, Button::LStickRight], DRIBBLE_HOLD),
            ActionStep::hold(vec![Button::L2, Button::LStickDown], DRIBBLE_HOLD),
            ActionStep::tap(vec![Button::Cross]),
        ];
        Some(Action::new(action_origin(snapshot), steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{GameMode, GameStateTracker};

    #[test]
    fn dribble_square_then_pass() {
        let mut tracker = GameStateTracker::new();
        tracker.set_game_mode(GameMode::InMatch);
        let action = InMatchStrategy
            .determine_action(&tracker.snapshot(), &mut SelectionGrid::new())
            .unwrap();

        let steps = action.steps();
        assert_eq!(steps.len(), 5);
        for step in &steps[..4] {
            assert_eq!(step.hold, DRIBBLE_HOLD);
            assert!(step.buttons.contains(&Button::L2));
        }
        assert_eq!(steps[4], ActionStep::tap(vec![Button::Cross]));
    }
}
