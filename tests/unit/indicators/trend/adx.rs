//! Unit tests for ADX

use chrono::Utc;
use cryage::indicators::trend::{calculate_adx, calculate_adx_default};
use cryage::models::bar::PriceBar;

fn trending_bars(count: usize, step: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| {
            let close = 100.0 + i as f64 * step;
            PriceBar::new(close, close + 0.3, close - 0.2, close + 0.1, 1000.0, Utc::now())
        })
        .collect()
}

#[test]
fn test_adx_insufficient_data() {
    assert!(calculate_adx(&trending_bars(15, 1.0), 14).is_none());
    assert!(calculate_adx(&trending_bars(16, 1.0), 14).is_some());
}

#[test]
fn test_adx_one_way_trend_is_strong() {
    let adx = calculate_adx_default(&trending_bars(60, 1.0)).unwrap();
    // Highs rise and lows never fall: all directional movement is positive.
    assert!(adx.plus_di > adx.minus_di);
    assert_eq!(adx.minus_di, 0.0);
    assert!(adx.value > 25.0);
    assert_eq!(adx.period, 14);
}

#[test]
fn test_adx_downtrend_direction() {
    let bars: Vec<PriceBar> = (0..60)
        .map(|i| {
            let close = 200.0 - i as f64;
            PriceBar::new(close, close + 0.2, close - 0.3, close - 0.1, 1000.0, Utc::now())
        })
        .collect();
    let adx = calculate_adx_default(&bars).unwrap();
    assert!(adx.minus_di > adx.plus_di);
}

#[test]
fn test_adx_flat_series_undefined() {
    let bars: Vec<PriceBar> = (0..60)
        .map(|_| PriceBar::new(100.0, 100.0, 100.0, 100.0, 1000.0, Utc::now()))
        .collect();
    assert!(calculate_adx_default(&bars).is_none());
}
