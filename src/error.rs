//! Error types in Descent
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    #[error("multiple targets not supported")]
    MultipleTargets,
    #[error("Not enough samples to compute the mean")]
    NotEnoughSamples,
    #[error("model was trained with {expected} features, but got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("number of samples in both arrays differ: {0} != {1}")]
    MismatchedShapes(usize, usize),
    #[error("R² is undefined for a constant target (total sum of squares is zero)")]
    DegenerateTarget,
}
