//!
//! `descent-plot` draws the diagnostic charts of a trained gradient descent model.
//!
//! ## The Big Picture
//!
//! `descent-plot` is a crate in the `descent` workspace. Models from `descent-linear` keep their
//! loss history and training data, which is all this crate needs to describe:
//! - the loss curve over the training iterations
//! - predicted against actual targets, with the identity line for reference
//! - the learned feature weights as a bar chart
//!
//! ## Describe, then render
//!
//! Every diagnostic of [`Diagnostics`] returns a [`Chart`], a plain description of titles, axis
//! labels and data series. Charts can be inspected directly or handed to a [`Renderer`]:
//! [`SvgRenderer`] produces an SVG document in memory, [`FileRenderer`] writes an SVG or bitmap
//! file using `plotters`.
//!
//! ```ignore
//! let model = GradientDescentRegressor::params().fit(&dataset)?;
//! FileRenderer::new("loss.png").render(&model.loss_curve())?;
//! ```

mod chart;
mod diagnostics;
mod error;
mod render;

pub use chart::*;
pub use diagnostics::*;
pub use error::*;
pub use render::*;
