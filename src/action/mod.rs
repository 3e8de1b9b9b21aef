pub mod button;
pub mod game_action;
pub mod sequencer;

pub use button::Button;
pub use game_action::{Action, ActionStep};
pub use sequencer::ActionSequencer;
