pub mod pivots;

pub use pivots::{calculate_all_pivots, calculate_pivots};
