//! Descriptive statistics over the raw rate series.

use crate::domain::error::RatescopeError;
use crate::domain::timeseries::TimeSeries;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

pub fn summarize(series: &TimeSeries) -> Result<RateSummary, RatescopeError> {
    if series.is_empty() {
        return Err(RatescopeError::InsufficientData { have: 0, need: 1 });
    }

    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for mid in series.mids() {
        sum += mid;
        min = min.min(mid);
        max = max.max(mid);
    }

    Ok(RateSummary {
        mean: sum / series.len() as f64,
        min,
        max,
    })
}
