//! Domain error types.

/// Top-level error type for ratescope.
#[derive(Debug, thiserror::Error)]
pub enum RatescopeError {
    #[error("malformed observation at row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },

    #[error("invalid window length {window}: {reason}")]
    InvalidWindow { window: usize, reason: String },

    #[error("insufficient data: have {have} values, need {need}")]
    InsufficientData { have: usize, need: usize },

    #[error("rate fetch failed: {reason}")]
    Fetch { reason: String },

    #[error("rate API returned status {status} for {url}")]
    ApiStatus { status: u16, url: String },

    #[error("malformed rate payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RatescopeError> for std::process::ExitCode {
    fn from(err: &RatescopeError) -> Self {
        let code: u8 = match err {
            RatescopeError::Io(_) => 1,
            RatescopeError::ConfigParse { .. } | RatescopeError::ConfigInvalid { .. } => 2,
            RatescopeError::Fetch { .. }
            | RatescopeError::ApiStatus { .. }
            | RatescopeError::MalformedPayload { .. } => 3,
            RatescopeError::MalformedInput { .. } => 4,
            RatescopeError::InvalidWindow { .. } | RatescopeError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
