//! Core of a bicycle workout tracker: a session state machine that turns a
//! stream of GPS fixes into a distance/duration summary, a stopwatch, track
//! geometry helpers, and a file-backed store for completed workouts.

pub mod cli;
pub mod error;
pub mod geo;
pub mod session;
pub mod stopwatch;
pub mod store;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
