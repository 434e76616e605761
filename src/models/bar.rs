use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV sample. Series are chronological, oldest first.
///
/// The usual candle ordering invariant
/// (`high >= max(open, close) >= min(open, close) >= low`) is assumed from
/// the data provider and not enforced here; [`PriceBar::validate`] only
/// rejects structurally broken bars (non-finite or non-positive prices,
/// negative volume).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl PriceBar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Midpoint of the bar's range, used by the Awesome Oscillator.
    pub fn hl2(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    /// Boundary validation: every price field finite and positive,
    /// volume finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} is not finite"));
            }
            if value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        if !self.volume.is_finite() {
            return Err("volume is not finite".to_string());
        }
        if self.volume < 0.0 {
            return Err(format!("volume must be non-negative, got {}", self.volume));
        }
        Ok(())
    }
}
