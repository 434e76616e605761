use serde::{Deserialize, Serialize};

use crate::models::indicators::{AdxIndicator, MacdIndicator, PivotLevels, RsiIndicator};

/// Per-indicator vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Buy,
    Sell,
    Neutral,
}

/// Aggregated verdict across all families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallSignal {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl std::fmt::Display for OverallSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OverallSignal::StrongBuy => "STRONG BUY",
            OverallSignal::Buy => "BUY",
            OverallSignal::Neutral => "NEUTRAL",
            OverallSignal::Sell => "SELL",
            OverallSignal::StrongSell => "STRONG SELL",
        };
        f.write_str(label)
    }
}

/// Buy/sell/neutral counts within one indicator family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub buy: u32,
    pub sell: u32,
    pub neutral: u32,
}

impl CategoryTally {
    pub fn total(&self) -> u32 {
        self.buy + self.sell + self.neutral
    }

    pub fn count(&mut self, classification: Classification) {
        match classification {
            Classification::Buy => self.buy += 1,
            Classification::Sell => self.sell += 1,
            Classification::Neutral => self.neutral += 1,
        }
    }
}

/// One moving-average ladder entry with its vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaEntry {
    pub name: String,
    pub value: f64,
    pub signal: Classification,
}

/// Every raw indicator value the scorer computed, for callers that render
/// structured data or their own report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stochastic_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cci: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adx: Option<AdxIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awesome_oscillator: Option<f64>,
    pub momentum: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoch_rsi_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub williams_r: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimate_oscillator: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bull_bear_power: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub moving_averages: Vec<MaEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub pivots: Vec<PivotLevels>,
}

/// Aggregated score totals and the overall signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeVerdict {
    pub buy_total: u32,
    pub sell_total: u32,
    pub neutral_total: u32,
    pub total_possible: u32,
    pub buy_pct: f64,
    pub sell_pct: f64,
    pub neutral_pct: f64,
    pub overall: OverallSignal,
}

/// Full result of one composite evaluation.
///
/// Computed fresh from one series snapshot on every call; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaSummary {
    pub pair: String,
    pub timeframe: String,
    pub price: f64,
    pub oscillators: CategoryTally,
    pub moving_averages: CategoryTally,
    pub pivots: CategoryTally,
    pub verdict: CompositeVerdict,
    pub snapshot: IndicatorSnapshot,
}
