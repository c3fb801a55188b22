use crate::error::GradientDescentParamsError;
use descent::{Float, ParamGuard};
use ndarray_rand::rand::Rng;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the training of a
/// [gradient descent regressor](crate::GradientDescentRegressor).
pub struct GradientDescentValidParams<F: Float, R: Rng> {
    /// Step size multiplying the gradient in every update of the parameters.
    learning_rate: F,
    /// Number of full-batch updates. The training loop always runs exactly this
    /// many iterations, there is no convergence check.
    n_iterations: usize,
    /// The random number generator drawing the initial parameters. It is cloned
    /// for every fit, so fitting twice with the same set gives the same model.
    rng: R,
}

#[derive(Clone, Debug, PartialEq)]
/// An helper struct used to construct a set of [valid hyperparameters](GradientDescentValidParams)
/// for the [gradient descent regressor](crate::GradientDescentRegressor) (using the builder pattern).
pub struct GradientDescentParams<F: Float, R: Rng>(pub(crate) GradientDescentValidParams<F, R>);

impl<F: Float, R: Rng> GradientDescentParams<F, R> {
    /// `new` lets us configure our training algorithm parameters:
    /// * the initial parameters are drawn from a standard normal distribution using `rng`;
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `learning_rate = 0.1`
    /// * `n_iterations = 1000`
    pub fn new(rng: R) -> Self {
        Self(GradientDescentValidParams {
            learning_rate: F::cast(0.1),
            n_iterations: 1000,
            rng,
        })
    }

    /// Set the learning rate.
    ///
    /// Defaults to `0.1` if not set
    ///
    /// `learning_rate` must be positive and finite
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the number of gradient descent iterations.
    ///
    /// Defaults to `1000` if not set
    ///
    /// `n_iterations` must be bigger than zero
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.0.n_iterations = n_iterations;
        self
    }

    /// Change the random number generator used to initialise the parameters
    pub fn with_rng<R2: Rng>(self, rng: R2) -> GradientDescentParams<F, R2> {
        GradientDescentParams(GradientDescentValidParams {
            learning_rate: self.0.learning_rate,
            n_iterations: self.0.n_iterations,
            rng,
        })
    }
}

impl<F: Float, R: Rng> ParamGuard for GradientDescentParams<F, R> {
    type Checked = GradientDescentValidParams<F, R>;
    type Error = GradientDescentParamsError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let learning_rate = self.0.learning_rate;
        if !learning_rate.is_finite() || learning_rate <= F::zero() {
            Err(GradientDescentParamsError::LearningRate(
                learning_rate.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.n_iterations == 0 {
            Err(GradientDescentParamsError::Iterations)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float, R: Rng> GradientDescentValidParams<F, R> {
    /// The step size of every update
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    /// The number of iterations a fit runs
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// The random generator used to initialise the parameters
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
