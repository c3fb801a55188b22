//! An error when modeling a gradient descent regression
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradientDescentParamsError {
    #[error("learning rate should be positive and finite, but is {0}")]
    LearningRate(f32),
    #[error("n_iterations cannot be 0")]
    Iterations,
}

/// An error when modeling a gradient descent regression
#[derive(Error, Debug, Clone)]
pub enum LinearError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] GradientDescentParamsError),
    #[error("At least one sample needed")]
    NotEnoughSamples,
    #[error("expected {expected} targets, one per sample, but got {found}")]
    TargetLength { expected: usize, found: usize },
    #[error(transparent)]
    BaseCrate(#[from] descent::Error),
}
