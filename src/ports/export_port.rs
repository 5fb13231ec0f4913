//! Export port trait.

use crate::domain::analysis::Analysis;
use crate::domain::error::RatescopeError;
use std::path::Path;

/// Port for writing a completed analysis to a file, one row per observation.
pub trait ExportPort {
    fn write(&self, analysis: &Analysis, output_path: &Path) -> Result<(), RatescopeError>;
}
