//! Core domain types and computations.

pub mod analysis;
pub mod distribution;
pub mod error;
pub mod returns;
pub mod rolling;
pub mod rsi;
pub mod series;
pub mod summary;
pub mod timeseries;
