//! Composite scoring engine.

use tracing::debug;

use crate::error::TaError;
use crate::indicators::structure::calculate_all_pivots;
use crate::models::bar::PriceBar;
use crate::models::summary::{CompositeVerdict, IndicatorSnapshot, TaSummary};
use crate::signals::{decision, moving_averages, oscillators, pivots};

/// Minimum series length the composite scorer accepts.
pub const MIN_BARS: usize = 50;

pub struct TaEngine;

impl TaEngine {
    /// Evaluate one OHLCV window into a composite verdict.
    ///
    /// `pair` and `timeframe` are labels only; they never affect scoring.
    /// The input series is not mutated and the result depends on nothing
    /// but the series: evaluating the same bars twice yields identical
    /// summaries.
    pub fn evaluate(
        bars: &[PriceBar],
        pair: &str,
        timeframe: &str,
    ) -> Result<TaSummary, TaError> {
        for (index, bar) in bars.iter().enumerate() {
            bar.validate()
                .map_err(|reason| TaError::MalformedInput { index, reason })?;
        }
        if bars.len() < MIN_BARS {
            return Err(TaError::InsufficientData {
                got: bars.len(),
                required: MIN_BARS,
            });
        }

        let price = bars[bars.len() - 1].close;

        let readings = oscillators::compute(bars);
        let osc_tally = oscillators::classify(&readings);

        let ma_entries = moving_averages::compute(bars);
        let ma_tally = moving_averages::tally(&ma_entries);

        let pivot_levels = calculate_all_pivots(bars);
        let pivot_tally = pivots::tally(&pivot_levels, price);

        let buy_total = osc_tally.buy + ma_tally.buy + pivot_tally.buy;
        let sell_total = osc_tally.sell + ma_tally.sell + pivot_tally.sell;
        let neutral_total = osc_tally.neutral + ma_tally.neutral + pivot_tally.neutral;
        let total_possible = osc_tally.total() + ma_tally.total() + pivot_tally.total();

        let buy_pct = buy_total as f64 / total_possible as f64 * 100.0;
        let sell_pct = sell_total as f64 / total_possible as f64 * 100.0;
        let neutral_pct = neutral_total as f64 / total_possible as f64 * 100.0;

        let overall =
            decision::overall_signal(buy_pct, sell_pct, &osc_tally, &ma_tally, &pivot_tally);

        debug!(
            pair,
            timeframe,
            buy_total,
            sell_total,
            neutral_total,
            total_possible,
            overall = %overall,
            "composite evaluation complete"
        );

        Ok(TaSummary {
            pair: pair.to_string(),
            timeframe: timeframe.to_string(),
            price,
            oscillators: osc_tally,
            moving_averages: ma_tally,
            pivots: pivot_tally,
            verdict: CompositeVerdict {
                buy_total,
                sell_total,
                neutral_total,
                total_possible,
                buy_pct,
                sell_pct,
                neutral_pct,
                overall,
            },
            snapshot: IndicatorSnapshot {
                rsi: readings.rsi,
                stochastic_k: readings.stochastic_k,
                cci: readings.cci,
                adx: readings.adx,
                awesome_oscillator: readings.awesome_oscillator,
                momentum: readings.momentum,
                macd: readings.macd,
                stoch_rsi_k: readings.stoch_rsi_k,
                williams_r: readings.williams_r,
                ultimate_oscillator: readings.ultimate_oscillator,
                bull_bear_power: readings.bull_bear_power,
                moving_averages: ma_entries,
                pivots: pivot_levels,
            },
        })
    }
}
