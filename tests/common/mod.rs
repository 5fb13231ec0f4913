#![allow(dead_code)]

use chrono::NaiveDate;
use ratescope::domain::error::RatescopeError;
pub use ratescope::domain::timeseries::{RateObservation, TimeSeries};
use ratescope::ports::rate_port::RatePort;
use std::collections::HashMap;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Consecutive daily observations starting 2024-01-01.
pub fn make_observations(mids: &[f64]) -> Vec<RateObservation> {
    mids.iter()
        .enumerate()
        .map(|(i, &mid)| RateObservation {
            date: date(2024, 1, 1) + chrono::Days::new(i as u64),
            mid,
        })
        .collect()
}

pub fn make_series(mids: &[f64]) -> TimeSeries {
    TimeSeries::new(make_observations(mids)).unwrap()
}

pub struct MockRatePort {
    pub data: HashMap<String, Vec<RateObservation>>,
    pub errors: HashMap<String, String>,
}

impl MockRatePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_rates(mut self, currency: &str, observations: Vec<RateObservation>) -> Self {
        self.data.insert(currency.to_string(), observations);
        self
    }

    pub fn with_error(mut self, currency: &str, reason: &str) -> Self {
        self.errors.insert(currency.to_string(), reason.to_string());
        self
    }
}

impl RatePort for MockRatePort {
    fn fetch_rates(
        &self,
        currency: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateObservation>, RatescopeError> {
        if let Some(reason) = self.errors.get(currency) {
            return Err(RatescopeError::Fetch {
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(currency)
            .map(|observations| {
                observations
                    .iter()
                    .filter(|o| o.date >= start_date && o.date <= end_date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
