//! NBP web API rate adapter.
//!
//! Fetches Table A mid-rates from
//! `/api/exchangerates/rates/a/{currency}/{start}/{end}/?format=json`.
//! Transport failures, non-success statuses, and malformed payloads all
//! surface as typed errors here; the domain core never sees them.

use crate::domain::error::RatescopeError;
use crate::domain::timeseries::RateObservation;
use crate::ports::rate_port::RatePort;
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct RatesPayload {
    rates: Vec<RateEntry>,
}

#[derive(Debug, Deserialize)]
struct RateEntry {
    #[serde(rename = "effectiveDate")]
    effective_date: String,
    mid: f64,
}

pub struct NbpAdapter {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl NbpAdapter {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, RatescopeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| RatescopeError::Fetch {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn rates_url(&self, currency: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
        format!(
            "{}/api/exchangerates/rates/a/{}/{}/{}/?format=json",
            self.base_url,
            currency.to_lowercase(),
            start_date,
            end_date
        )
    }
}

impl RatePort for NbpAdapter {
    fn fetch_rates(
        &self,
        currency: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<RateObservation>, RatescopeError> {
        let url = self.rates_url(currency, start_date, end_date);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| RatescopeError::Fetch {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatescopeError::ApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        let payload: RatesPayload =
            response.json().map_err(|e| RatescopeError::MalformedPayload {
                reason: e.to_string(),
            })?;

        payload
            .rates
            .into_iter()
            .map(|entry| {
                let date = NaiveDate::parse_from_str(&entry.effective_date, "%Y-%m-%d")
                    .map_err(|e| RatescopeError::MalformedPayload {
                        reason: format!("bad effectiveDate {:?}: {}", entry.effective_date, e),
                    })?;
                Ok(RateObservation {
                    date,
                    mid: entry.mid,
                })
            })
            .collect()
    }
}
