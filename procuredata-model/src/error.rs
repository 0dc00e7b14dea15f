use std::fmt::{self, Display};

/// Errors produced by model constructors and parsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidId(String),
    UnknownPricingModel(String),
    UnknownPriceTier(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidId(raw) => write!(f, "invalid id: {raw}"),
            ModelError::UnknownPricingModel(raw) => {
                write!(f, "unknown pricing model: {raw}")
            }
            ModelError::UnknownPriceTier(raw) => {
                write!(f, "unknown price tier: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
