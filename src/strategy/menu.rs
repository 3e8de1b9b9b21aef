use super::{action_origin, ActionStrategy};
use crate::action::{Action, ActionStep, Button};
use crate::state::{SelectionGrid, StateSnapshot};

/// Full-time, half-time, and post-match summary screens all dismiss the same
/// way: confirm and move on.
pub struct MenuAdvanceStrategy;

impl ActionStrategy for MenuAdvanceStrategy {
    fn name(&self) -> &'static str {
        "menu_advance"
    }

    fn determine_action(
        &self,
        snapshot: &StateSnapshot,
        _grid: &mut SelectionGrid,
    ) -> Option<Action> {
        Some(Action::new(
            action_origin(snapshot),
            vec![ActionStep::tap(vec![Button::Cross])],
        ))
    }
}
