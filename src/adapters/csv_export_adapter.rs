//! CSV export adapter.
//!
//! One row per observation with the stable header
//! `date,rate,return_pct,moving_average,volatility,rsi`. Downstream
//! consumers key on this exact shape; undefined entries are empty fields,
//! never sentinel numbers.

use crate::domain::analysis::Analysis;
use crate::domain::error::RatescopeError;
use crate::ports::export_port::ExportPort;
use std::path::Path;

pub const EXPORT_HEADER: [&str; 6] = [
    "date",
    "rate",
    "return_pct",
    "moving_average",
    "volatility",
    "rsi",
];

pub struct CsvExportAdapter;

fn field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl ExportPort for CsvExportAdapter {
    fn write(&self, analysis: &Analysis, output_path: &Path) -> Result<(), RatescopeError> {
        let mut wtr = csv::Writer::from_path(output_path)?;

        wtr.write_record(EXPORT_HEADER)?;
        for (i, obs) in analysis.series.observations().iter().enumerate() {
            wtr.write_record([
                obs.date.format("%Y-%m-%d").to_string(),
                obs.mid.to_string(),
                field(analysis.returns.points[i].value),
                field(analysis.moving_average.points[i].value),
                field(analysis.volatility.points[i].value),
                field(analysis.rsi.points[i].value),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl From<csv::Error> for RatescopeError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => RatescopeError::Io(io),
            other => RatescopeError::Io(std::io::Error::other(format!(
                "CSV write error: {:?}",
                other
            ))),
        }
    }
}
