use super::{action_origin, ActionStrategy};
use crate::action::{Action, ActionStep};
use crate::state::{SelectionGrid, StateSnapshot};

/// Works through the 2x2 opponent grid: normalize whatever the detector last
/// reported, then let the grid pick the inputs that play the next match. One
/// tap per input keeps menu navigation deliberate; the game animates between
/// selections and chorded d-pad presses get swallowed.
pub struct SquadSelectionStrategy;

impl ActionStrategy for SquadSelectionStrategy {
    fn name(&self) -> &'static str {
        "squad_selection"
    }

    fn determine_action(
        &self,
        snapshot: &StateSnapshot,
        grid: &mut SelectionGrid,
    ) -> Option<Action> {
        grid.normalize();
        let steps = grid
            .play_current()
            .into_iter()
            .map(|button| ActionStep::tap(vec![button]))
            .collect();
        Some(Action::new(action_origin(snapshot), steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Button;
    use crate::state::squad_grid::GridObservation;
    use crate::state::{GameStateTracker, MenuState};

    fn snapshot() -> StateSnapshot {
        let mut tracker = GameStateTracker::new();
        tracker.set_menu_state(MenuState::SquadSelection);
        tracker.snapshot()
    }

    #[test]
    fn fresh_grid_confirms_in_place() {
        let mut grid = SelectionGrid::new();
        let action = SquadSelectionStrategy
            .determine_action(&snapshot(), &mut grid)
            .unwrap();
        assert_eq!(action.steps(), &[ActionStep::tap(vec![Button::Cross])]);
    }

    #[test]
    fn played_cell_navigates_before_confirming() {
        let mut grid = SelectionGrid::new();
        grid.merge_observation(&GridObservation {
            cursor: Some((0, 0)),
            played: [[true, false], [false, false]],
        });
        let action = SquadSelectionStrategy
            .determine_action(&snapshot(), &mut grid)
            .unwrap();
        assert_eq!(
            action.steps(),
            &[
                ActionStep::tap(vec![Button::DPadRight]),
                ActionStep::tap(vec![Button::Cross]),
            ]
        );
    }

    #[test]
    fn top_row_sentinel_is_normalized_before_playing() {
        let mut grid = SelectionGrid::new();
        grid.merge_observation(&GridObservation {
            cursor: Some((-1, 0)),
            played: [[false; 2]; 2],
        });
        let action = SquadSelectionStrategy
            .determine_action(&snapshot(), &mut grid)
            .unwrap();
        // Clamped to (0,0), which is unplayed: a plain confirm.
        assert_eq!(action.steps(), &[ActionStep::tap(vec![Button::Cross])]);
        assert_eq!(grid.cursor(), (0, 0));
    }
}
