//! Unit tests for shared math helpers

use cryage::common::math;

#[test]
fn test_sma_exact() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(math::sma(&data, 5), Some(3.0));
}

#[test]
fn test_sma_uses_last_window() {
    let data = [10.0, 1.0, 2.0, 3.0];
    assert_eq!(math::sma(&data, 3), Some(2.0));
}

#[test]
fn test_sma_insufficient_data() {
    assert_eq!(math::sma(&[1.0, 2.0], 3), None);
    assert_eq!(math::sma(&[1.0, 2.0], 0), None);
}

#[test]
fn test_ema_constant_series_is_exact() {
    let data = [100.0; 40];
    assert_eq!(math::ema(&data, 12), Some(100.0));
}

#[test]
fn test_ema_insufficient_data() {
    assert_eq!(math::ema(&[1.0; 5], 6), None);
}

#[test]
fn test_ema_tracks_rising_series() {
    let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let ema = math::ema(&data, 10).unwrap();
    // Lags below the last value but above the window mean.
    assert!(ema < *data.last().unwrap());
    assert!(ema > data[40]);
}

#[test]
fn test_ema_from_previous_step() {
    // period 19 -> k = 0.1
    assert_eq!(math::ema_from_previous(110.0, 100.0, 19), 101.0);
}

#[test]
fn test_ema_running_length_and_last() {
    let data: Vec<f64> = (0..30).map(|i| 50.0 + i as f64 * 0.5).collect();
    let running = math::ema_running(&data, 5);
    assert_eq!(running.len(), data.len());
    assert_eq!(*running.last().unwrap(), math::ema(&data, 5).unwrap());
}

#[test]
fn test_wma_weights_favor_recent() {
    let data = [1.0, 2.0, 3.0];
    let wma = math::wma(&data, 3).unwrap();
    assert!((wma - 14.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_wma_insufficient_data() {
    assert_eq!(math::wma(&[1.0, 2.0], 3), None);
}

#[test]
fn test_stddev_population() {
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sd = math::stddev(&data, 8).unwrap();
    assert!((sd - 2.0).abs() < 1e-12);
}

#[test]
fn test_stddev_requires_period_above_one() {
    assert_eq!(math::stddev(&[1.0, 2.0], 1), None);
}

#[test]
fn test_true_range_gap() {
    // Gap down: previous close above the bar's high.
    assert_eq!(math::true_range(10.0, 8.0, 11.0), 3.0);
    // Plain range.
    assert_eq!(math::true_range(10.0, 8.0, 9.0), 2.0);
}

#[test]
fn test_highest_lowest_window() {
    let data = [5.0, 9.0, 1.0, 4.0];
    assert_eq!(math::highest(&data, 3), Some(9.0));
    assert_eq!(math::lowest(&data, 3), Some(1.0));
    assert_eq!(math::highest(&data, 2), Some(4.0));
    assert_eq!(math::highest(&data, 5), None);
}
