//! Pure indicator calculations over OHLCV series.
//!
//! Every function is deterministic and returns `None` (or a documented
//! fallback) when the series is shorter than the indicator's minimum window.

pub mod momentum;
pub mod structure;
pub mod trend;
