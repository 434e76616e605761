//! Shared numeric helpers for indicator calculations

/// Simple Moving Average over the last `period` values.
pub fn sma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let sum: f64 = data[data.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential Moving Average, seeded with the first value and applied
/// left-to-right over the entire slice.
///
/// Uses the `e += k * (p - e)` form so a constant series stays exactly
/// constant under floating point.
pub fn ema(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut e = data[0];
    for &price in &data[1..] {
        e += k * (price - e);
    }
    Some(e)
}

/// One EMA recurrence step from a previous value.
pub fn ema_from_previous(price: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    previous + k * (price - previous)
}

/// Running EMA value at every index of the slice (same seeding as [`ema`]).
pub fn ema_running(data: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(data.len());
    let mut e = match data.first() {
        Some(&first) => first,
        None => return out,
    };
    out.push(e);
    for &price in &data[1..] {
        e = ema_from_previous(price, e, period);
        out.push(e);
    }
    out
}

/// Linearly Weighted Moving Average over the last `period` values,
/// weights 1..period from oldest to newest.
pub fn wma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let window = &data[data.len() - period..];
    let mut weighted = 0.0;
    for (i, &value) in window.iter().enumerate() {
        weighted += (i as f64 + 1.0) * value;
    }
    let weight_sum = (period * (period + 1)) as f64 / 2.0;
    Some(weighted / weight_sum)
}

/// Population standard deviation over the last `period` values.
pub fn stddev(data: &[f64], period: usize) -> Option<f64> {
    if period <= 1 || data.len() < period {
        return None;
    }
    let window = &data[data.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|x| (x - mean) * (x - mean))
        .sum::<f64>()
        / period as f64;
    Some(variance.sqrt())
}

/// Wilder's true range for one bar.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Highest value over the last `period` entries.
pub fn highest(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    data[data.len() - period..]
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, x| match acc {
            Some(m) => Some(m.max(x)),
            None => Some(x),
        })
}

/// Lowest value over the last `period` entries.
pub fn lowest(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    data[data.len() - period..]
        .iter()
        .copied()
        .fold(None, |acc: Option<f64>, x| match acc {
            Some(m) => Some(m.min(x)),
            None => Some(x),
        })
}
