//! Unit tests for the moving-average calculations

use chrono::Utc;
use cryage::indicators::trend::{
    calculate_ema, calculate_hma, calculate_ichimoku_baseline, calculate_sma, calculate_vwma,
    calculate_wma,
};
use cryage::models::bar::PriceBar;

fn flat_bars(count: usize) -> Vec<PriceBar> {
    (0..count)
        .map(|_| PriceBar::new(100.0, 100.0, 100.0, 100.0, 1000.0, Utc::now()))
        .collect()
}

fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .map(|&c| PriceBar::new(c, c + 0.05, c - 0.05, c, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_sma_exact_window() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(calculate_sma(&bars, 5), Some(3.0));
    assert_eq!(calculate_sma(&bars, 6), None);
}

#[test]
fn test_ema_constant_is_exact() {
    assert_eq!(calculate_ema(&flat_bars(50), 21), Some(100.0));
}

#[test]
fn test_ema_insufficient_data() {
    assert!(calculate_ema(&flat_bars(20), 21).is_none());
}

#[test]
fn test_wma_known_value() {
    let bars = bars_from_closes(&[1.0, 2.0, 3.0]);
    let wma = calculate_wma(&bars, 3).unwrap();
    assert!((wma - 14.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_hma_constant_is_exact() {
    assert_eq!(calculate_hma(&flat_bars(30), 9), Some(100.0));
}

#[test]
fn test_hma_needs_difference_window() {
    assert!(calculate_hma(&flat_bars(8), 9).is_none());
}

#[test]
fn test_hma_tracks_trend_closely() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let bars = bars_from_closes(&closes);
    let hma = calculate_hma(&bars, 9).unwrap();
    let price = *closes.last().unwrap();
    // Hull MA is nearly lag-free on a clean trend.
    assert!((hma - price).abs() < 1.0);
}

#[test]
fn test_vwma_constant_price() {
    let mut bars = flat_bars(30);
    for (i, bar) in bars.iter_mut().enumerate() {
        bar.volume = 500.0 + i as f64 * 10.0;
    }
    assert_eq!(calculate_vwma(&bars, 20), Some(100.0));
}

#[test]
fn test_vwma_zero_volume_undefined() {
    let mut bars = flat_bars(30);
    for bar in bars.iter_mut() {
        bar.volume = 0.0;
    }
    assert!(calculate_vwma(&bars, 20).is_none());
}

#[test]
fn test_vwma_weights_by_volume() {
    // Two-bar window: heavy volume on the 200 close pulls the mean up.
    let mut bars = bars_from_closes(&[100.0, 200.0]);
    bars[0].volume = 1.0;
    bars[1].volume = 3.0;
    let vwma = calculate_vwma(&bars, 2).unwrap();
    assert!((vwma - 175.0).abs() < 1e-9);
}

#[test]
fn test_ichimoku_baseline_midpoint() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.1).collect();
    let bars = bars_from_closes(&closes);
    let baseline = calculate_ichimoku_baseline(&bars, 26).unwrap();
    // Highest high is the last bar, lowest low is 25 bars back.
    let expected = ((105.9 + 0.05) + (103.4 - 0.05)) / 2.0;
    assert!((baseline - expected).abs() < 1e-9);
}

#[test]
fn test_ichimoku_baseline_insufficient_data() {
    assert!(calculate_ichimoku_baseline(&flat_bars(25), 26).is_none());
}
