//! `descent-datasets` provides datasets ready to be used in tests, examples and benchmarks.
//!
//! ## The Big Picture
//!
//! `descent-datasets` is a crate in the `descent` workspace, a small toolkit for fitting linear
//! models with gradient descent.
//!
//! ## Current State
//!
//! * [`generate::linear`]: samples a noisy linear relationship with known parameters, the
//!   best-case input to check that a regressor recovers them
//! * [`dataset::dataset_from_csv`]: reads a numeric CSV table, one column being the target
//!
//! ## Using a dataset
//!
//! ```ignore
//! let mut rng = Xoshiro256Plus::seed_from_u64(42);
//! let dataset = descent_datasets::generate::linear(100, 3., &array![2.], (0., 2.), 0.1, &mut rng);
//! ```

pub mod dataset;
pub mod generate;

pub use dataset::{dataset_from_csv, split_tail, DatasetError};
