//! Rate source port trait.

use crate::domain::error::RatescopeError;
use crate::domain::timeseries::RateObservation;
use chrono::NaiveDate;

/// A source of daily mid-rate observations for one currency over a date
/// range, returned in ascending date order.
pub trait RatePort {
    fn fetch_rates(
        &self,
        currency: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateObservation>, RatescopeError>;
}
