//! Daily percentage returns derived from the rate series.
//!
//! return[i] = (rate[i] - rate[i-1]) / rate[i-1] * 100, undefined at index 0.

use crate::domain::series::{IndicatorKind, IndicatorSeries, SeriesPoint};
use crate::domain::timeseries::TimeSeries;

pub fn calculate_returns(series: &TimeSeries) -> IndicatorSeries {
    let mut points = Vec::with_capacity(series.len());

    for i in 0..series.len() {
        let value = if i == 0 {
            None
        } else {
            let prev = series.mid_at(i - 1);
            // Unreachable through a validated TimeSeries, but a zero divisor
            // must yield an undefined entry rather than infinity.
            if prev == 0.0 {
                None
            } else {
                Some((series.mid_at(i) - prev) / prev * 100.0)
            }
        };
        points.push(SeriesPoint {
            date: series.date_at(i),
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Return,
        points,
    }
}
