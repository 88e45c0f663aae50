use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl DeskError {
    pub(crate) fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DeskError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
