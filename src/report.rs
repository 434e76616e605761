//! Text rendering of a composite summary.
//!
//! Mirrors the chat-assistant output: timestamp header, overall-signal
//! banner, score breakdown, per-family component analysis and key
//! indicator lines. The timestamp is an explicit argument so rendering
//! stays as deterministic as the evaluation itself.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::models::summary::TaSummary;
use crate::signals::oscillators::OSCILLATOR_COUNT;
use crate::signals::pivots::PIVOT_COUNT;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn render_summary(summary: &TaSummary, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let v = &summary.verdict;

    let _ = writeln!(
        out,
        "🕐 {} Technical Analysis Summary {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        summary.pair
    );
    let _ = writeln!(out, "Timeframe: {}", summary.timeframe);
    let _ = writeln!(out, "Current Price: {:.6}", summary.price);
    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Overall Signal: {}", v.overall);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 Score Breakdown:");
    let _ = writeln!(
        out,
        "  BUY:     {}/{} ({:.1}%)",
        v.buy_total, v.total_possible, v.buy_pct
    );
    let _ = writeln!(
        out,
        "  SELL:    {}/{} ({:.1}%)",
        v.sell_total, v.total_possible, v.sell_pct
    );
    let _ = writeln!(
        out,
        "  NEUTRAL: {}/{} ({:.1}%)",
        v.neutral_total, v.total_possible, v.neutral_pct
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Component Analysis:");
    let _ = writeln!(out, "  Oscillators ({OSCILLATOR_COUNT}):");
    let _ = writeln!(
        out,
        "    BUY: {} | SELL: {} | NEUTRAL: {}",
        summary.oscillators.buy, summary.oscillators.sell, summary.oscillators.neutral
    );
    let _ = writeln!(out, "  Moving Averages ({}):", summary.moving_averages.total());
    let _ = writeln!(
        out,
        "    BUY: {} | SELL: {} | NEUTRAL: {}",
        summary.moving_averages.buy, summary.moving_averages.sell, summary.moving_averages.neutral
    );
    let _ = writeln!(out, "  Pivots ({PIVOT_COUNT}):");
    let _ = writeln!(
        out,
        "    BUY: {} | SELL: {} | NEUTRAL: {}",
        summary.pivots.buy, summary.pivots.sell, summary.pivots.neutral
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Key Indicators:");

    if let Some(rsi) = &summary.snapshot.rsi {
        let zone = if rsi.value < 30.0 {
            "(Oversold)"
        } else if rsi.value > 70.0 {
            "(Overbought)"
        } else {
            "(Neutral)"
        };
        let _ = writeln!(out, "  RSI(14): {:.2} {zone}", rsi.value);
    }
    if let Some(stoch) = summary.snapshot.stochastic_k {
        let _ = writeln!(out, "  Stochastic %K: {stoch:.2}");
    }
    if let Some(macd) = &summary.snapshot.macd {
        let bias = if macd.histogram > macd.prev_histogram {
            "Bullish"
        } else {
            "Bearish"
        };
        let _ = writeln!(out, "  MACD: {bias} (hist {:+.6})", macd.histogram);
    }
    let _ = writeln!(out, "  Momentum(10): {:+.6}", summary.snapshot.momentum);
    if let Some(adx) = &summary.snapshot.adx {
        let _ = writeln!(
            out,
            "  ADX(14): {:.2} (+DI {:.2} / -DI {:.2})",
            adx.value, adx.plus_di, adx.minus_di
        );
    }
    if let Some(uo) = summary.snapshot.ultimate_oscillator {
        let _ = writeln!(out, "  Ultimate Oscillator: {uo:.2}");
    }

    out
}
