//! Default collaborator implementations: an enigo-backed keyboard mapped to
//! the PlayStation layout, a static-image capture source for offline runs,
//! and no-op stand-ins for dry runs where the trained models are not wired.

pub mod noop;
pub mod playstation;
pub mod static_capture;

pub use noop::{NoopKeyboard, NullClassifier, NullDetector};
pub use playstation::PlaystationKeyboard;
pub use static_capture::StaticImageSource;
