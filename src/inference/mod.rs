pub mod context;
pub mod game_mode;
pub mod match_detection;
pub mod menu_state;
pub mod squad_selection;
pub mod step;

pub use context::PipelineContext;
pub use game_mode::GameModeStep;
pub use match_detection::MatchDetectionStep;
pub use menu_state::MenuStateStep;
pub use squad_selection::SquadSelectionStep;
pub use step::{InferenceChain, InferenceStep};
