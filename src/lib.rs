//! `descent` is a small toolkit for fitting linear models with batch gradient descent.
//!
//! This crate holds the shared building blocks used by the algorithm crates of the
//! workspace:
//!
//! * the [`Float`] bound used for records and targets,
//! * [`DatasetBase`] pairing a feature matrix with its targets,
//! * the [`Fit`](traits::Fit) and [`Predict`](traits::Predict) traits,
//! * [`ParamGuard`] for checked hyperparameters,
//! * regression [metrics](metrics::Regression).
//!
//! The gradient descent regressor itself lives in `descent-linear`, diagnostic
//! charts in `descent-plot`.

pub mod benchmarks;
pub mod dataset;
pub mod error;
mod metrics_regression;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, DatasetBase, Float};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
