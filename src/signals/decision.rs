//! Overall-signal decision rule.

use crate::models::summary::{CategoryTally, OverallSignal};

/// Derive the overall signal. Checked in strict order, first match wins:
///
/// 1. STRONG BUY: buy% > 60 and oscillators, MAs both net-buy, pivots
///    at least tied toward buy.
/// 2. BUY: buy% > 50.
/// 3. STRONG SELL: mirror of 1.
/// 4. SELL: sell% > 50.
/// 5. NEUTRAL otherwise.
pub fn overall_signal(
    buy_pct: f64,
    sell_pct: f64,
    oscillators: &CategoryTally,
    moving_averages: &CategoryTally,
    pivots: &CategoryTally,
) -> OverallSignal {
    if buy_pct > 60.0
        && oscillators.buy > oscillators.sell
        && moving_averages.buy > moving_averages.sell
        && pivots.buy >= pivots.sell
    {
        OverallSignal::StrongBuy
    } else if buy_pct > 50.0 {
        OverallSignal::Buy
    } else if sell_pct > 60.0
        && oscillators.sell > oscillators.buy
        && moving_averages.sell > moving_averages.buy
        && pivots.sell >= pivots.buy
    {
        OverallSignal::StrongSell
    } else if sell_pct > 50.0 {
        OverallSignal::Sell
    } else {
        OverallSignal::Neutral
    }
}
