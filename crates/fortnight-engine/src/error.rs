//! Error types for fortnight-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortnightError {
    #[error("Invalid reference date: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, FortnightError>;
