use thiserror::Error;

#[derive(Error, Debug)]
pub enum PnlError {
    #[error("Invalid noise factor {0}: must be between 0.0 and 1.0")]
    InvalidNoiseFactor(f64),

    #[error("Custom weekday profile has invalid weights: {0}")]
    InvalidProfileWeights(String),

    #[error("Duplicate line item id: {0}")]
    DuplicateItemId(String),

    #[error("Line item '{id}' is nested {depth} levels deep: maximum is {max}")]
    TreeTooDeep { id: String, depth: usize, max: usize },

    #[error("Invalid mock data config: {0}")]
    InvalidMockConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PnlError>;
