use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuCostError {
    #[error("Non-finite quantity {quantity} for unit '{unit}'")]
    NonFiniteQuantity { quantity: f64, unit: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MenuCostError>;
