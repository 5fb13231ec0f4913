//! Concrete adapters behind the port traits.

pub mod csv_export_adapter;
pub mod csv_rate_adapter;
pub mod file_config_adapter;
pub mod nbp_adapter;
