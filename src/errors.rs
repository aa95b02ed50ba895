use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Parameter `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Parameter `{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Parameter `{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonFinite { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::Negative { field, .. } => field,
        }
    }
}
