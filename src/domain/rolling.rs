//! Trailing-window statistics: moving average of rates, volatility of returns.
//!
//! Both share one windowing discipline: for window length w, entries at
//! index < w-1 are undefined; entry i covers the w source values ending at i.
//! Volatility is the sample standard deviation (divisor w-1) and a window
//! containing any undefined return is itself undefined.
//!
//! A window longer than the series is not an error; every entry is simply
//! undefined. A window below 2 is a caller mistake and fails.

use crate::domain::error::RatescopeError;
use crate::domain::series::{IndicatorKind, IndicatorSeries, SeriesPoint};
use crate::domain::timeseries::TimeSeries;

const MIN_WINDOW: usize = 2;

fn check_window(window: usize) -> Result<(), RatescopeError> {
    if window < MIN_WINDOW {
        return Err(RatescopeError::InvalidWindow {
            window,
            reason: format!("must be at least {}", MIN_WINDOW),
        });
    }
    Ok(())
}

pub fn moving_average(
    series: &TimeSeries,
    window: usize,
) -> Result<IndicatorSeries, RatescopeError> {
    check_window(window)?;

    let mids: Vec<f64> = series.mids().collect();
    let mut points = Vec::with_capacity(series.len());

    for i in 0..series.len() {
        let value = if i + 1 >= window {
            let slice = &mids[i + 1 - window..=i];
            Some(slice.iter().sum::<f64>() / window as f64)
        } else {
            None
        };
        points.push(SeriesPoint {
            date: series.date_at(i),
            value,
        });
    }

    Ok(IndicatorSeries {
        kind: IndicatorKind::Sma(window),
        points,
    })
}

pub fn rolling_volatility(
    returns: &IndicatorSeries,
    window: usize,
) -> Result<IndicatorSeries, RatescopeError> {
    check_window(window)?;

    let mut points = Vec::with_capacity(returns.points.len());

    for i in 0..returns.points.len() {
        let value = if i + 1 >= window {
            window_stdev(&returns.points[i + 1 - window..=i], window)
        } else {
            None
        };
        points.push(SeriesPoint {
            date: returns.points[i].date,
            value,
        });
    }

    Ok(IndicatorSeries {
        kind: IndicatorKind::Volatility(window),
        points,
    })
}

/// Sample standard deviation of a full window, or None if any entry is
/// undefined.
fn window_stdev(window_points: &[SeriesPoint], window: usize) -> Option<f64> {
    let mut values = Vec::with_capacity(window);
    for point in window_points {
        values.push(point.value?);
    }

    let mean = values.iter().sum::<f64>() / window as f64;
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / (window - 1) as f64;

    Some(variance.sqrt())
}
