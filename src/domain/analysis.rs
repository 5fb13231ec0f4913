//! One analysis pass: every derived series computed from a single
//! immutable rate series and bundled for reporting and export.
//!
//! Each stage is a pure function of the shared input; none reads another
//! stage's output, so their order here is cosmetic.

use crate::domain::distribution::{self, DistributionSummary};
use crate::domain::error::RatescopeError;
use crate::domain::returns::calculate_returns;
use crate::domain::rolling::{moving_average, rolling_volatility};
use crate::domain::rsi::calculate_rsi;
use crate::domain::series::IndicatorSeries;
use crate::domain::summary::{self, RateSummary};
use crate::domain::timeseries::TimeSeries;

/// Caller-supplied parameters for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRequest {
    /// Window for the moving average and the rolling volatility.
    pub window: usize,
    /// Window for the Wilder RSI.
    pub rsi_window: usize,
    /// Sample count of the fitted density curve.
    pub curve_points: usize,
}

/// Everything one pass produces. The input series rides along so consumers
/// can align derived points with their observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub series: TimeSeries,
    pub returns: IndicatorSeries,
    pub moving_average: IndicatorSeries,
    pub volatility: IndicatorSeries,
    pub rsi: IndicatorSeries,
    pub distribution: DistributionSummary,
    pub summary: RateSummary,
}

pub fn run(series: TimeSeries, request: &AnalysisRequest) -> Result<Analysis, RatescopeError> {
    let returns = calculate_returns(&series);
    let moving_average = moving_average(&series, request.window)?;
    let volatility = rolling_volatility(&returns, request.window)?;
    let rsi = calculate_rsi(&series, request.rsi_window)?;
    let distribution = distribution::fit(&returns, request.curve_points)?;
    let summary = summary::summarize(&series)?;

    Ok(Analysis {
        series,
        returns,
        moving_average,
        volatility,
        rsi,
        distribution,
        summary,
    })
}
