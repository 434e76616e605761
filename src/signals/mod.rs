//! Signal classification and composite scoring.

pub mod decision;
pub mod engine;
pub mod moving_averages;
pub mod oscillators;
pub mod pivots;

pub use decision::overall_signal;
pub use engine::{TaEngine, MIN_BARS};
