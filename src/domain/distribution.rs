//! Normal-distribution fit over the return series.
//!
//! Mean and sample standard deviation (same estimator as the rolling
//! volatility) over the defined returns, plus a Gaussian density curve
//! sampled evenly across [min - 0.5, max + 0.5] for histogram overlay.

use crate::domain::error::RatescopeError;
use crate::domain::series::IndicatorSeries;

pub const DEFAULT_CURVE_POINTS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSummary {
    pub mean: f64,
    pub stdev: f64,
    /// (x, density at x) pairs, ascending in x.
    pub curve: Vec<(f64, f64)>,
}

pub fn fit(
    returns: &IndicatorSeries,
    curve_points: usize,
) -> Result<DistributionSummary, RatescopeError> {
    let values: Vec<f64> = returns.defined_values().collect();
    if values.len() < 2 {
        return Err(RatescopeError::InsufficientData {
            have: values.len(),
            need: 2,
        });
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    let stdev = variance.sqrt();

    if stdev == 0.0 {
        // A flat return series carries one distinct value; no finite density
        // curve exists, so this is insufficient data rather than NaN output.
        return Err(RatescopeError::InsufficientData { have: 1, need: 2 });
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 0.5;
    let hi = max + 0.5;

    let curve_points = curve_points.max(2);
    let step = (hi - lo) / (curve_points - 1) as f64;
    let curve = (0..curve_points)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, gaussian_density(x, mean, stdev))
        })
        .collect();

    Ok(DistributionSummary { mean, stdev, curve })
}

fn gaussian_density(x: f64, mean: f64, stdev: f64) -> f64 {
    let z = (x - mean) / stdev;
    (-0.5 * z * z).exp() / (stdev * (2.0 * std::f64::consts::PI).sqrt())
}
