#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod pacing;
pub mod prelude;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use pacing::{drive_computer_turn, forward_events, EventLog, EventSink};
