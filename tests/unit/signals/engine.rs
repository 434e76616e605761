//! Unit tests for the composite engine boundary and invariants

use chrono::Utc;
use cryage::error::TaError;
use cryage::models::bar::PriceBar;
use cryage::signals::engine::{TaEngine, MIN_BARS};
use cryage::signals::oscillators::classify_momentum;
use cryage::models::summary::Classification;

fn trending_bars(count: usize) -> Vec<PriceBar> {
    let mut bars = Vec::new();
    let mut close = 100.0_f64;
    for i in 0..count {
        let open = close;
        close *= 1.0 + 0.003 * ((i % 5) as f64 - 1.5);
        let high = open.max(close) * 1.001;
        let low = open.min(close) * 0.999;
        bars.push(PriceBar::new(open, high, low, close, 1200.0, Utc::now()));
    }
    bars
}

#[test]
fn test_refuses_below_minimum() {
    let bars = trending_bars(MIN_BARS - 1);
    let err = TaEngine::evaluate(&bars, "BTC/USDT", "1h").unwrap_err();
    assert_eq!(
        err,
        TaError::InsufficientData {
            got: MIN_BARS - 1,
            required: MIN_BARS,
        }
    );
}

#[test]
fn test_accepts_exactly_minimum() {
    let bars = trending_bars(MIN_BARS);
    assert!(TaEngine::evaluate(&bars, "BTC/USDT", "1h").is_ok());
}

#[test]
fn test_rejects_non_finite_bar() {
    let mut bars = trending_bars(80);
    bars[3].close = f64::NAN;
    match TaEngine::evaluate(&bars, "BTC/USDT", "1h") {
        Err(TaError::MalformedInput { index, .. }) => assert_eq!(index, 3),
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn test_rejects_non_positive_price() {
    let mut bars = trending_bars(80);
    bars[10].low = -1.0;
    assert!(matches!(
        TaEngine::evaluate(&bars, "BTC/USDT", "1h"),
        Err(TaError::MalformedInput { index: 10, .. })
    ));
}

#[test]
fn test_rejects_negative_volume() {
    let mut bars = trending_bars(80);
    bars[5].volume = -10.0;
    assert!(matches!(
        TaEngine::evaluate(&bars, "BTC/USDT", "1h"),
        Err(TaError::MalformedInput { index: 5, .. })
    ));
}

#[test]
fn test_tally_conservation() {
    for count in [50, 60, 120, 200] {
        let bars = trending_bars(count);
        let summary = TaEngine::evaluate(&bars, "ETH/USDT", "4h").unwrap();
        let v = &summary.verdict;
        assert_eq!(v.buy_total + v.sell_total + v.neutral_total, v.total_possible);
        assert!((v.buy_pct + v.sell_pct + v.neutral_pct - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_labels_and_price_pass_through() {
    let bars = trending_bars(100);
    let summary = TaEngine::evaluate(&bars, "SOL/USDT", "15m").unwrap();
    assert_eq!(summary.pair, "SOL/USDT");
    assert_eq!(summary.timeframe, "15m");
    assert_eq!(summary.price, bars.last().unwrap().close);
}

#[test]
fn test_evaluation_is_deterministic() {
    let bars = trending_bars(150);
    let first = TaEngine::evaluate(&bars, "BTC/USDT", "1h").unwrap();
    let second = TaEngine::evaluate(&bars, "BTC/USDT", "1h").unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_momentum_vote_is_binary() {
    assert_eq!(classify_momentum(1.0), Classification::Buy);
    assert_eq!(classify_momentum(0.0), Classification::Sell);
    assert_eq!(classify_momentum(-1.0), Classification::Sell);
}
