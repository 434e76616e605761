//! Oscillator family: computation and threshold classification.
//!
//! The family has a fixed size of 11. An oscillator that cannot be
//! computed (window too short, degenerate denominator) casts no vote;
//! the denominator stays 11 and the missing vote lands in neutral.

use crate::indicators::momentum::{
    calculate_awesome_oscillator, calculate_bull_bear_power, calculate_macd_default,
    calculate_momentum, calculate_rsi_default, calculate_stoch_k, calculate_stoch_rsi_k,
    calculate_ultimate_oscillator, calculate_williams_r,
};
use crate::indicators::momentum::cci::calculate_cci_default;
use crate::indicators::trend::calculate_adx_default;
use crate::models::bar::PriceBar;
use crate::models::indicators::{AdxIndicator, MacdIndicator, RsiIndicator};
use crate::models::summary::{CategoryTally, Classification};

/// Fixed denominator for the oscillator family.
pub const OSCILLATOR_COUNT: u32 = 11;

/// Raw oscillator values for one series snapshot.
#[derive(Debug, Clone, Default)]
pub struct OscillatorReadings {
    pub rsi: Option<RsiIndicator>,
    pub stochastic_k: Option<f64>,
    pub cci: Option<f64>,
    pub adx: Option<AdxIndicator>,
    pub awesome_oscillator: Option<f64>,
    pub momentum: f64,
    pub macd: Option<MacdIndicator>,
    pub stoch_rsi_k: Option<f64>,
    pub williams_r: Option<f64>,
    pub ultimate_oscillator: Option<f64>,
    pub bull_bear_power: Option<f64>,
}

/// Compute every oscillator in the family.
pub fn compute(bars: &[PriceBar]) -> OscillatorReadings {
    OscillatorReadings {
        rsi: calculate_rsi_default(bars),
        stochastic_k: calculate_stoch_k(bars, 14),
        cci: calculate_cci_default(bars),
        adx: calculate_adx_default(bars),
        awesome_oscillator: calculate_awesome_oscillator(bars),
        momentum: calculate_momentum(bars, 10),
        macd: calculate_macd_default(bars),
        stoch_rsi_k: calculate_stoch_rsi_k(bars, 14, 14),
        williams_r: calculate_williams_r(bars, 14),
        ultimate_oscillator: calculate_ultimate_oscillator(bars, 7, 14, 28),
        bull_bear_power: calculate_bull_bear_power(bars),
    }
}

/// Classify every available oscillator and tally the family.
pub fn classify(readings: &OscillatorReadings) -> CategoryTally {
    let votes = [
        readings.rsi.as_ref().map(|r| classify_rsi(r.value)),
        readings.stochastic_k.map(classify_stochastic),
        readings.cci.map(classify_cci),
        readings.adx.as_ref().and_then(classify_adx),
        readings.awesome_oscillator.map(classify_awesome),
        Some(classify_momentum(readings.momentum)),
        readings.macd.as_ref().map(classify_macd_slope),
        readings.stoch_rsi_k.map(classify_stoch_rsi),
        readings.williams_r.map(classify_williams),
        readings.ultimate_oscillator.map(classify_ultimate),
        readings.bull_bear_power.map(classify_bull_bear),
    ];

    let mut buy = 0;
    let mut sell = 0;
    for vote in votes.iter().flatten() {
        match vote {
            Classification::Buy => buy += 1,
            Classification::Sell => sell += 1,
            Classification::Neutral => {}
        }
    }
    CategoryTally {
        buy,
        sell,
        neutral: OSCILLATOR_COUNT - buy - sell,
    }
}

pub fn classify_rsi(value: f64) -> Classification {
    if value < 30.0 {
        Classification::Buy
    } else if value > 70.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

pub fn classify_stochastic(value: f64) -> Classification {
    if value < 20.0 {
        Classification::Buy
    } else if value > 80.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

pub fn classify_cci(value: f64) -> Classification {
    if value < -100.0 {
        Classification::Buy
    } else if value > 100.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

/// ADX only votes when the trend is strong (ADX > 25); direction comes
/// from the DI lines.
pub fn classify_adx(adx: &AdxIndicator) -> Option<Classification> {
    if adx.value <= 25.0 {
        return None;
    }
    if adx.plus_di > adx.minus_di {
        Some(Classification::Buy)
    } else if adx.minus_di > adx.plus_di {
        Some(Classification::Sell)
    } else {
        Some(Classification::Neutral)
    }
}

pub fn classify_awesome(value: f64) -> Classification {
    if value > 0.0 {
        Classification::Buy
    } else if value < 0.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

/// Momentum is a deliberate binary split: never neutral.
pub fn classify_momentum(value: f64) -> Classification {
    if value > 0.0 {
        Classification::Buy
    } else {
        Classification::Sell
    }
}

/// MACD votes on histogram slope: rising is a buy, anything else a sell.
pub fn classify_macd_slope(macd: &MacdIndicator) -> Classification {
    if macd.histogram > macd.prev_histogram {
        Classification::Buy
    } else {
        Classification::Sell
    }
}

pub fn classify_stoch_rsi(value: f64) -> Classification {
    if value < 20.0 {
        Classification::Buy
    } else if value > 80.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

/// Williams %R thresholds as historically implemented: buy below -80,
/// sell above -20. Values in [-80, -20] are neutral; the sign convention
/// is intentionally asymmetric and must not be "fixed" here.
pub fn classify_williams(value: f64) -> Classification {
    if value < -80.0 {
        Classification::Buy
    } else if value > -20.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

pub fn classify_ultimate(value: f64) -> Classification {
    if value < 30.0 {
        Classification::Buy
    } else if value > 70.0 {
        Classification::Sell
    } else {
        Classification::Neutral
    }
}

/// Bull/Bear Power is a binary split like momentum.
pub fn classify_bull_bear(value: f64) -> Classification {
    if value > 0.0 {
        Classification::Buy
    } else {
        Classification::Sell
    }
}
