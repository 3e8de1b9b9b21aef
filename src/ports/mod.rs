//! Interfaces for the external collaborators the pipeline is glued around:
//! window capture, classification, object detection, and key injection. The
//! core only ever talks to these traits; the trained models and OS bindings
//! live behind them.

pub mod capture;
pub mod classifier;
pub mod detector;
pub mod input;

pub use capture::FrameSource;
pub use classifier::{Classification, Classifier};
pub use detector::{BoundingBox, Detection, Detector};
pub use input::InputDriver;
