//! Screen-only autoplayer for FC24 squad battles over a game stream.
//!
//! The bot never reads game memory or network traffic. It captures frames
//! from the streaming window, runs them through a chain of inference steps
//! to track what the game is showing, and injects keyboard input mapped to
//! the PlayStation pad layout. Three loops run concurrently and exchange
//! data through single-slot latest-value channels, so a slow consumer sees
//! the freshest frame or action rather than a backlog.

pub mod action;
pub mod common;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod inference;
pub mod io;
pub mod ports;
pub mod state;
pub mod strategy;

pub use config::Configuration;
pub use coordinator::{Coordinator, CoordinatorBuilder};
pub use error::BotError;
