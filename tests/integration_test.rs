//! Integration tests.
//!
//! Tests cover:
//! - Full analysis pipeline with a mock rate port (no network)
//! - The reference scenario: prices [100,102,101,105,103,107,108,106,110,112],
//!   w = 3, against hand-computed moving average, volatility, and RSI values
//! - Divergent oversized-window policies: all-undefined rolling result vs
//!   an invalid-window RSI error on the same input
//! - Export/import round trip through the CSV adapters

mod common;

use approx::assert_relative_eq;
use common::*;
use ratescope::adapters::csv_export_adapter::CsvExportAdapter;
use ratescope::adapters::csv_rate_adapter::CsvRateAdapter;
use ratescope::domain::analysis::{self, AnalysisRequest};
use ratescope::domain::error::RatescopeError;
use ratescope::domain::returns::calculate_returns;
use ratescope::domain::rolling::{moving_average, rolling_volatility};
use ratescope::domain::rsi::calculate_rsi;
use ratescope::ports::export_port::ExportPort;
use ratescope::ports::rate_port::RatePort;

const REFERENCE_MIDS: [f64; 10] = [
    100.0, 102.0, 101.0, 105.0, 103.0, 107.0, 108.0, 106.0, 110.0, 112.0,
];

fn reference_request() -> AnalysisRequest {
    AnalysisRequest {
        window: 3,
        rsi_window: 3,
        curve_points: 100,
    }
}

mod full_pipeline {
    use super::*;

    #[test]
    fn mock_port_to_analysis() {
        let port = MockRatePort::new().with_rates("EUR", make_observations(&REFERENCE_MIDS));

        let observations = port
            .fetch_rates("EUR", date(2024, 1, 1), date(2024, 1, 10))
            .unwrap();
        assert_eq!(observations.len(), 10);

        let series = TimeSeries::new(observations).unwrap();
        let analysis = analysis::run(series, &reference_request()).unwrap();

        assert_eq!(analysis.summary.min, 100.0);
        assert_eq!(analysis.summary.max, 112.0);
        assert_relative_eq!(analysis.summary.mean, 105.4, max_relative = 1e-12);
    }

    #[test]
    fn port_date_filter_applies_before_the_core() {
        let port = MockRatePort::new().with_rates("EUR", make_observations(&REFERENCE_MIDS));

        let observations = port
            .fetch_rates("EUR", date(2024, 1, 3), date(2024, 1, 6))
            .unwrap();
        assert_eq!(observations.len(), 4);
        assert_eq!(observations[0].mid, 101.0);
    }

    #[test]
    fn fetch_failures_never_become_series() {
        let port = MockRatePort::new().with_error("EUR", "connection refused");
        let err = port
            .fetch_rates("EUR", date(2024, 1, 1), date(2024, 1, 10))
            .unwrap_err();
        assert!(matches!(err, RatescopeError::Fetch { .. }));
    }

    #[test]
    fn distribution_mean_matches_the_return_series() {
        let analysis =
            analysis::run(make_series(&REFERENCE_MIDS), &reference_request()).unwrap();

        let defined: Vec<f64> = analysis.returns.defined_values().collect();
        let mean = defined.iter().sum::<f64>() / defined.len() as f64;
        assert_relative_eq!(analysis.distribution.mean, mean, max_relative = 1e-12);
    }
}

mod reference_scenario {
    use super::*;

    #[test]
    fn moving_average_hand_computed() {
        let sma = moving_average(&make_series(&REFERENCE_MIDS), 3).unwrap();

        assert_eq!(sma.points[0].value, None);
        assert_eq!(sma.points[1].value, None);
        assert_relative_eq!(sma.points[2].value.unwrap(), 101.0, max_relative = 1e-12);
        assert_relative_eq!(
            sma.points[3].value.unwrap(),
            (102.0 + 101.0 + 105.0) / 3.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            sma.points[9].value.unwrap(),
            (106.0 + 110.0 + 112.0) / 3.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn volatility_hand_computed() {
        let series = make_series(&REFERENCE_MIDS);
        let returns = calculate_returns(&series);
        let vol = rolling_volatility(&returns, 3).unwrap();

        // First full window of defined returns ends at index 3.
        assert_eq!(vol.points[2].value, None);

        let r1: f64 = (102.0 - 100.0) / 100.0 * 100.0;
        let r2 = (101.0 - 102.0) / 102.0 * 100.0;
        let r3 = (105.0 - 101.0) / 101.0 * 100.0;
        let mean = (r1 + r2 + r3) / 3.0;
        let expected =
            (((r1 - mean).powi(2) + (r2 - mean).powi(2) + (r3 - mean).powi(2)) / 2.0).sqrt();
        assert_relative_eq!(vol.points[3].value.unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn rsi_seed_and_first_smoothed_step() {
        let rsi = calculate_rsi(&make_series(&REFERENCE_MIDS), 3).unwrap();

        assert_eq!(rsi.points[2].value, None);

        // Deltas +2, -1, +4: seed avg gain 2, avg loss 1/3, RS 6, RSI 600/7.
        assert_relative_eq!(
            rsi.points[3].value.unwrap(),
            600.0 / 7.0,
            max_relative = 1e-12
        );

        // Next delta -2: avg gain 4/3, avg loss 8/9, RS 3/2, RSI 60.
        assert_relative_eq!(rsi.points[4].value.unwrap(), 60.0, max_relative = 1e-12);
    }

    #[test]
    fn rsi_full_scan_stays_in_range_and_defined() {
        let rsi = calculate_rsi(&make_series(&REFERENCE_MIDS), 3).unwrap();

        for (i, point) in rsi.points.iter().enumerate() {
            if i < 3 {
                assert_eq!(point.value, None);
            } else {
                let value = point.value.unwrap();
                assert!((0.0..=100.0).contains(&value));
            }
        }
    }
}

mod oversized_window {
    use super::*;

    #[test]
    fn rolling_yields_all_undefined_but_rsi_rejects() {
        let series = make_series(&[100.0, 102.0, 101.0]);

        let sma = moving_average(&series, 8).unwrap();
        assert!(sma.points.iter().all(|p| p.value.is_none()));

        let returns = calculate_returns(&series);
        let vol = rolling_volatility(&returns, 8).unwrap();
        assert!(vol.points.iter().all(|p| p.value.is_none()));

        assert!(matches!(
            calculate_rsi(&series, 8),
            Err(RatescopeError::InvalidWindow { window: 8, .. })
        ));
    }
}

mod export_round_trip {
    use super::*;

    #[test]
    fn exported_rates_reload_identically() {
        let analysis =
            analysis::run(make_series(&REFERENCE_MIDS), &reference_request()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eur.csv");
        CsvExportAdapter.write(&analysis, &path).unwrap();

        let reloaded = CsvRateAdapter::new(path)
            .fetch_rates("EUR", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        let reloaded_series = TimeSeries::new(reloaded).unwrap();

        assert_eq!(reloaded_series.len(), analysis.series.len());
        for i in 0..reloaded_series.len() {
            assert_eq!(reloaded_series.date_at(i), analysis.series.date_at(i));
            assert_eq!(reloaded_series.mid_at(i), analysis.series.mid_at(i));
        }
    }

    #[test]
    fn rerunning_on_reloaded_data_is_identical() {
        let first =
            analysis::run(make_series(&REFERENCE_MIDS), &reference_request()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eur.csv");
        CsvExportAdapter.write(&first, &path).unwrap();

        let reloaded = CsvRateAdapter::new(path)
            .fetch_rates("EUR", date(2024, 1, 1), date(2024, 1, 31))
            .unwrap();
        let second =
            analysis::run(TimeSeries::new(reloaded).unwrap(), &reference_request()).unwrap();

        assert_eq!(first, second);
    }
}
