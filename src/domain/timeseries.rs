//! Daily mid-rate observations and the validated series they form.

use crate::domain::error::RatescopeError;
use chrono::NaiveDate;

/// One quoted mid-rate for one calendar date. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateObservation {
    pub date: NaiveDate,
    pub mid: f64,
}

/// An ordered series of daily mid-rates, strictly ascending by date.
///
/// Construction validates; every downstream computation can assume positive,
/// finite mids and strictly increasing dates. The constructor rejects
/// out-of-order input rather than sorting it: the rate provider already
/// returns ascending dates, and reordering caller data would hide upstream
/// bugs.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    observations: Vec<RateObservation>,
}

impl TimeSeries {
    pub fn new(observations: Vec<RateObservation>) -> Result<Self, RatescopeError> {
        for (row, obs) in observations.iter().enumerate() {
            if !obs.mid.is_finite() {
                return Err(RatescopeError::MalformedInput {
                    row,
                    reason: format!("rate {} is not finite", obs.mid),
                });
            }
            if obs.mid <= 0.0 {
                return Err(RatescopeError::MalformedInput {
                    row,
                    reason: format!("rate {} is not positive", obs.mid),
                });
            }
            if row > 0 && observations[row - 1].date >= obs.date {
                return Err(RatescopeError::MalformedInput {
                    row,
                    reason: format!(
                        "date {} does not follow {}",
                        obs.date,
                        observations[row - 1].date
                    ),
                });
            }
        }
        Ok(Self { observations })
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn mid_at(&self, index: usize) -> f64 {
        self.observations[index].mid
    }

    pub fn date_at(&self, index: usize) -> NaiveDate {
        self.observations[index].date
    }

    pub fn observations(&self) -> &[RateObservation] {
        &self.observations
    }

    pub fn mids(&self) -> impl Iterator<Item = f64> + '_ {
        self.observations.iter().map(|o| o.mid)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.iter().map(|o| o.date)
    }
}
