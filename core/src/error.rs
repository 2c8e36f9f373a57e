use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Roster is empty; add at least one player before running")]
    EmptyRoster,

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SimError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }
}

pub type SimResult<T> = Result<T, SimError>;
