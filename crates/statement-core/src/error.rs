use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Malformed fiscal end date: {0}")]
    MalformedDate(String),

    #[error("Unsupported fiscal year: {0}")]
    UnsupportedFiscalYear(i32),

    #[error("Insufficient samples: got {actual}, need at least {required}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("API error: {0}")]
    ApiError(String),
}
