pub mod in_match;
pub mod menu;
pub mod squad_selection;

pub use in_match::InMatchStrategy;
pub use menu::MenuAdvanceStrategy;
pub use squad_selection::SquadSelectionStrategy;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::action::Action;
use crate::state::{GameMode, MenuState, SelectionGrid, StateSnapshot};

/// Strategy pattern for per-state decisions: each implementor turns the
/// current tracker snapshot into the input sequence appropriate for that
/// screen.
pub trait ActionStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn determine_action(&self, snapshot: &StateSnapshot, grid: &mut SelectionGrid)
        -> Option<Action>;
}

/// Capture timestamp an action should carry: the frame the decision was
/// inferred from, falling back to now before the first frame lands.
pub(crate) fn action_origin(snapshot: &StateSnapshot) -> DateTime<Utc> {
    snapshot.last_frame_at.unwrap_or_else(Utc::now)
}

/// The act loop's single entry point: picks the strategy for the current
/// state and asks it for an action. Unknown menus deliberately produce
/// nothing, waiting for a confident classification instead of guessing.
pub fn decide(snapshot: &StateSnapshot, grid: &mut SelectionGrid) -> Option<Action> {
    let strategy: &dyn ActionStrategy = match snapshot.mode {
        GameMode::InMatch => &InMatchStrategy,
        GameMode::InMenu => match snapshot.menu_state {
            Some(MenuState::SquadSelection) => &SquadSelectionStrategy,
            Some(MenuState::FullTime | MenuState::HalfTime | MenuState::PostMatchSummary) => {
                &MenuAdvanceStrategy
            }
            Some(MenuState::Unknown) | None => return None,
        },
    };
    let action = strategy.determine_action(snapshot, grid);
    if let Some(action) = &action {
        debug!(strategy = strategy.name(), "decided action: {}", action);
    }
    action
}
