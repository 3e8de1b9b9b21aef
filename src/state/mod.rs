pub mod debounce;
pub mod modes;
pub mod squad_grid;
pub mod tracker;

pub use debounce::ModeDebouncer;
pub use modes::{GameMode, MatchState, MenuState};
pub use squad_grid::SelectionGrid;
pub use tracker::{GameStateTracker, StateSnapshot};
