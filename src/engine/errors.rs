use crate::models::{CrossoverError, SelectionError};

/// Errors that can occur while configuring or running the genetic engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("InvalidPopulationSize: population size must be greater than 0")]
    InvalidPopulationSize,
    #[error("SelectionError: {0}")]
    SelectionError(#[from] SelectionError),
    #[error("CrossoverError: {0}")]
    CrossoverError(#[from] CrossoverError),
}
