//! Relative Strength Index with Wilder's smoothing.
//!
//! Seed: simple mean of gains/losses over the first `window` one-day deltas,
//! which lands at price index `window` (the delta at price index 0 does not
//! exist). Every later value comes from the recurrence
//!
//!   avg[i] = (avg[i-1] * (window - 1) + current[i]) / window
//!
//! a strict left-to-right scan carrying one (avg_gain, avg_loss) pair; it is
//! not a rolling window over raw gains and losses.
//!
//! Degenerate windows: avg_loss == 0 with avg_gain > 0 gives RSI 100; a flat
//! window (both averages zero) gives the neutral 50 rather than NaN.

use crate::domain::error::RatescopeError;
use crate::domain::series::{IndicatorKind, IndicatorSeries, SeriesPoint};
use crate::domain::timeseries::TimeSeries;

pub fn calculate_rsi(
    series: &TimeSeries,
    window: usize,
) -> Result<IndicatorSeries, RatescopeError> {
    if window < 2 {
        return Err(RatescopeError::InvalidWindow {
            window,
            reason: "must be at least 2".into(),
        });
    }
    if window >= series.len() {
        return Err(RatescopeError::InvalidWindow {
            window,
            reason: format!(
                "must be below the series length of {}",
                series.len()
            ),
        });
    }

    // gains[i - 1] / losses[i - 1] belong to price index i.
    let mut gains = Vec::with_capacity(series.len() - 1);
    let mut losses = Vec::with_capacity(series.len() - 1);
    for i in 1..series.len() {
        let delta = series.mid_at(i) - series.mid_at(i - 1);
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let mut points = Vec::with_capacity(series.len());
    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for i in 0..series.len() {
        let value = if i < window {
            None
        } else if i == window {
            avg_gain = gains[..window].iter().sum::<f64>() / window as f64;
            avg_loss = losses[..window].iter().sum::<f64>() / window as f64;
            Some(rsi_value(avg_gain, avg_loss))
        } else {
            avg_gain = (avg_gain * (window - 1) as f64 + gains[i - 1]) / window as f64;
            avg_loss = (avg_loss * (window - 1) as f64 + losses[i - 1]) / window as f64;
            Some(rsi_value(avg_gain, avg_loss))
        };
        points.push(SeriesPoint {
            date: series.date_at(i),
            value,
        });
    }

    Ok(IndicatorSeries {
        kind: IndicatorKind::Rsi(window),
        points,
    })
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 { 100.0 } else { 50.0 }
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
