//! Port traits between the domain core and the outside world.

pub mod config_port;
pub mod export_port;
pub mod rate_port;
