//! Derived-series value types shared by every indicator.
//!
//! Each output is a sequence of [`SeriesPoint`]s aligned with the source
//! series; a point with `value: None` marks a warm-up gap or otherwise
//! undefined entry. Absence is explicit per entry, never a sentinel number.

use chrono::NaiveDate;
use std::fmt;

/// One dated entry of a derived series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Identity and parameters of a derived series; doubles as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Return,
    Sma(usize),
    Volatility(usize),
    Rsi(usize),
}

/// A derived series: one point per source observation, same order.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub kind: IndicatorKind,
    pub points: Vec<SeriesPoint>,
}

impl IndicatorSeries {
    /// Number of points carrying a defined value.
    pub fn defined_count(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }

    /// Values of the defined points, in series order.
    pub fn defined_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|p| p.value)
    }

    /// The last defined value, if any.
    pub fn last_defined(&self) -> Option<f64> {
        self.points.iter().rev().find_map(|p| p.value)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::Return => write!(f, "RETURN"),
            IndicatorKind::Sma(window) => write!(f, "SMA({})", window),
            IndicatorKind::Volatility(window) => write!(f, "VOLATILITY({})", window),
            IndicatorKind::Rsi(window) => write!(f, "RSI({})", window),
        }
    }
}
