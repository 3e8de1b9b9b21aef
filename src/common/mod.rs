pub mod frame;
pub mod latest;

pub use frame::Frame;
pub use latest::LatestSlot;
