use thiserror::Error;

/// A value outside the domain the integrator is defined on.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field} = {value}: {reason}")]
pub struct ParameterError {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl ParameterError {
    pub fn new(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self { field, value, reason }
    }
}

/// Errors raised while exporting trajectories and summaries.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
