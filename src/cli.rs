//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_export_adapter::CsvExportAdapter;
use crate::adapters::csv_rate_adapter::CsvRateAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::nbp_adapter::{NbpAdapter, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::analysis::{self, AnalysisRequest};
use crate::domain::distribution::DEFAULT_CURVE_POINTS;
use crate::domain::error::RatescopeError;
use crate::domain::timeseries::TimeSeries;
use crate::ports::config_port::ConfigPort;
use crate::ports::export_port::ExportPort;
use crate::ports::rate_port::RatePort;

pub const DEFAULT_WINDOW: usize = 10;
pub const DEFAULT_RSI_WINDOW: usize = 14;

#[derive(Parser, Debug)]
#[command(name = "ratescope", about = "NBP Table A exchange rate analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch raw mid-rates and print them as a date/rate table
    Fetch {
        /// Currency code, e.g. EUR
        #[arg(long)]
        currency: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Read rates from a CSV file instead of the NBP API
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the full indicator pass and print a report
    Analyze {
        /// Currency code, e.g. EUR
        #[arg(long)]
        currency: String,
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
        /// Moving average / volatility window
        #[arg(short, long)]
        window: Option<usize>,
        /// RSI window
        #[arg(long)]
        rsi_window: Option<usize>,
        /// Export the enriched series as CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read rates from a CSV file instead of the NBP API
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Fetch {
            currency,
            start,
            end,
            input,
            config,
        } => run_fetch(&currency, start, end, input, config.as_ref()),
        Command::Analyze {
            currency,
            start,
            end,
            window,
            rsi_window,
            output,
            input,
            config,
        } => run_analyze(
            &currency,
            start,
            end,
            window,
            rsi_window,
            output.as_ref(),
            input,
            config.as_ref(),
        ),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = RatescopeError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Resolve a positive config integer, CLI flag taking precedence.
fn resolve_window(
    flag: Option<usize>,
    config: Option<&FileConfigAdapter>,
    key: &str,
    default: usize,
) -> Result<usize, RatescopeError> {
    if let Some(w) = flag {
        return Ok(w);
    }
    let Some(adapter) = config else {
        return Ok(default);
    };
    let raw = adapter.get_int("analysis", key, default as i64);
    usize::try_from(raw).map_err(|_| RatescopeError::ConfigInvalid {
        section: "analysis".into(),
        key: key.into(),
        reason: format!("{} is not a valid length", raw),
    })
}

fn build_rate_port(
    input: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
) -> Result<Box<dyn RatePort>, RatescopeError> {
    if let Some(path) = input {
        return Ok(Box::new(CsvRateAdapter::new(path)));
    }

    let base_url = config
        .and_then(|c| c.get_string("api", "base_url"))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout_raw = config
        .map(|c| c.get_int("api", "timeout_secs", DEFAULT_TIMEOUT_SECS as i64))
        .unwrap_or(DEFAULT_TIMEOUT_SECS as i64);
    let timeout_secs = u64::try_from(timeout_raw).map_err(|_| RatescopeError::ConfigInvalid {
        section: "api".into(),
        key: "timeout_secs".into(),
        reason: format!("{} is not a valid timeout", timeout_raw),
    })?;

    Ok(Box::new(NbpAdapter::new(&base_url, timeout_secs)?))
}

fn check_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), RatescopeError> {
    if start >= end {
        return Err(RatescopeError::ConfigInvalid {
            section: "request".into(),
            key: "date range".into(),
            reason: format!("start {} must be before end {}", start, end),
        });
    }
    Ok(())
}

fn run_fetch(
    currency: &str,
    start: NaiveDate,
    end: NaiveDate,
    input: Option<PathBuf>,
    config_path: Option<&PathBuf>,
) -> ExitCode {
    let config = match config_path.map(load_config).transpose() {
        Ok(c) => c,
        Err(code) => return code,
    };

    match fetch_series(currency, start, end, input, config.as_ref()) {
        Ok(series) => {
            println!("date,rate");
            for obs in series.observations() {
                println!("{},{}", obs.date, obs.mid);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

fn fetch_series(
    currency: &str,
    start: NaiveDate,
    end: NaiveDate,
    input: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
) -> Result<TimeSeries, RatescopeError> {
    check_date_range(start, end)?;

    let port = build_rate_port(input, config)?;
    eprintln!("Fetching {} rates for {} to {}", currency, start, end);
    let observations = port.fetch_rates(currency, start, end)?;
    eprintln!("Fetched {} observations", observations.len());

    TimeSeries::new(observations)
}

#[allow(clippy::too_many_arguments)]
fn run_analyze(
    currency: &str,
    start: NaiveDate,
    end: NaiveDate,
    window_flag: Option<usize>,
    rsi_window_flag: Option<usize>,
    output_path: Option<&PathBuf>,
    input: Option<PathBuf>,
    config_path: Option<&PathBuf>,
) -> ExitCode {
    let config = match config_path.map(load_config).transpose() {
        Ok(c) => c,
        Err(code) => return code,
    };

    let result = analyze(
        currency,
        start,
        end,
        window_flag,
        rsi_window_flag,
        output_path,
        input,
        config.as_ref(),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(&e)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn analyze(
    currency: &str,
    start: NaiveDate,
    end: NaiveDate,
    window_flag: Option<usize>,
    rsi_window_flag: Option<usize>,
    output_path: Option<&PathBuf>,
    input: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
) -> Result<(), RatescopeError> {
    let window = resolve_window(window_flag, config, "window", DEFAULT_WINDOW)?;
    let rsi_window = resolve_window(rsi_window_flag, config, "rsi_window", DEFAULT_RSI_WINDOW)?;
    let curve_points = resolve_window(None, config, "curve_points", DEFAULT_CURVE_POINTS)?;

    let series = fetch_series(currency, start, end, input, config)?;

    eprintln!(
        "Analyzing {} observations (window {}, RSI window {})",
        series.len(),
        window,
        rsi_window
    );
    let request = AnalysisRequest {
        window,
        rsi_window,
        curve_points,
    };
    let analysis = analysis::run(series, &request)?;

    println!("{} mid-rate, {} to {}", currency, start, end);
    println!("  observations: {}", analysis.series.len());
    println!("  mean rate:    {:.4}", analysis.summary.mean);
    println!("  min rate:     {:.4}", analysis.summary.min);
    println!("  max rate:     {:.4}", analysis.summary.max);
    println!("  return mean:  {:.4}%", analysis.distribution.mean);
    println!("  return stdev: {:.4}%", analysis.distribution.stdev);
    if let Some(sma) = analysis.moving_average.last_defined() {
        println!("  {}:      {:.4}", analysis.moving_average.kind, sma);
    }
    if let Some(vol) = analysis.volatility.last_defined() {
        println!("  {}: {:.4}%", analysis.volatility.kind, vol);
    }
    if let Some(rsi) = analysis.rsi.last_defined() {
        println!("  {}:      {:.2}", analysis.rsi.kind, rsi);
    }

    if let Some(path) = output_path {
        CsvExportAdapter.write(&analysis, path)?;
        eprintln!("Exported {} rows to {}", analysis.series.len(), path.display());
    }

    Ok(())
}
