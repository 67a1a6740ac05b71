//! Error types for the simulation core and scenario loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("time step must be non-negative, got {0}")]
    NegativeTimeStep(f64),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
