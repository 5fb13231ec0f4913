//! CSV file rate adapter: offline source of `date,rate` rows.
//!
//! Accepts the files the export adapter writes (extra columns are ignored)
//! as well as plain two-column files. Rows outside the requested date range
//! are skipped.

use crate::domain::error::RatescopeError;
use crate::domain::timeseries::RateObservation;
use crate::ports::rate_port::RatePort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvRateAdapter {
    path: PathBuf,
}

impl CsvRateAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RatePort for CsvRateAdapter {
    fn fetch_rates(
        &self,
        _currency: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateObservation>, RatescopeError> {
        let content = fs::read_to_string(&self.path).map_err(|e| RatescopeError::Fetch {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut observations = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| RatescopeError::Fetch {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| RatescopeError::Fetch {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                RatescopeError::Fetch {
                    reason: format!("invalid date {:?}: {}", date_str, e),
                }
            })?;

            if date < start_date || date > end_date {
                continue;
            }

            let mid: f64 = record
                .get(1)
                .ok_or_else(|| RatescopeError::Fetch {
                    reason: "missing rate column".into(),
                })?
                .parse()
                .map_err(|e| RatescopeError::Fetch {
                    reason: format!("invalid rate value: {}", e),
                })?;

            observations.push(RateObservation { date, mid });
        }

        Ok(observations)
    }
}
