use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LtsError {
    /// The request broke a documented constraint. Fix the request and resend.
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
    /// A table entry is missing or an invariant broke. Always a defect.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LtsError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type Result<T> = std::result::Result<T, LtsError>;
