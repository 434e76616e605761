//! Composite technical-analysis scoring engine.
//!
//! Consumes one chronological OHLCV window and produces a weighted
//! buy/sell/neutral verdict across three indicator families
//! (oscillators, moving averages, pivot levels).

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod signals;

pub use error::TaError;
pub use models::bar::PriceBar;
pub use models::summary::{CompositeVerdict, OverallSignal, TaSummary};
pub use signals::engine::{TaEngine, MIN_BARS};
