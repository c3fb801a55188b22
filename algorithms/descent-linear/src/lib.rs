//!
//! `descent-linear` provides a pure Rust implementation of ordinary linear regression trained
//! with batch gradient descent.
//!
//! ## The Big Picture
//!
//! `descent-linear` is a crate in the `descent` workspace, a small toolkit for fitting linear
//! models iteratively. The shared dataset, trait and metric definitions live in the `descent`
//! crate, diagnostic charts in `descent-plot`.
//!
//! ## Current state
//!
//! `descent-linear` provides:
//! - [`GradientDescentRegressor`], fitting an intercept and one weight per feature by
//!   minimising the mean squared error with a fixed learning rate and iteration budget
//! - [`FittedGradientDescent`], the trained model with its loss history, used for prediction
//!   and [evaluation](FittedGradientDescent::evaluate)
//!
//! Features are not scaled internally. Badly scaled inputs or a too large learning rate make the
//! descent diverge; the loss history records this faithfully.
//!
//! ## Examples
//!
//! There is an usage example in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ RUST_LOG=debug cargo run --example synthetic_line
//! ```

mod algorithm;
mod error;
mod evaluation;
mod hyperparams;

pub use algorithm::*;
pub use error::*;
pub use evaluation::*;
pub use hyperparams::*;
