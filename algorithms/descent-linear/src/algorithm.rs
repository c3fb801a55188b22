//! Batch gradient descent for ordinary least squares
#![allow(non_snake_case)]
use crate::error::{LinearError, Result};
use crate::hyperparams::{GradientDescentParams, GradientDescentValidParams};
use descent::dataset::{AsSingleTargets, DatasetBase};
use descent::traits::{Fit, PredictInplace};
use descent::{Error, Float};
use log::{debug, trace, warn};
use ndarray::{concatenate, s, Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix2};
use ndarray_rand::rand::{Rng, SeedableRng};
use ndarray_rand::rand_distr::{Distribution, StandardNormal};
use ndarray_rand::RandomExt;
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A linear regression model trained with batch gradient descent.
///
/// The model `y = theta_0 + theta_1 x_1 + ... + theta_n x_n` is fitted by repeatedly stepping
/// against the gradient of the mean squared error
///
/// theta <- theta - learning_rate * (2 / m) * X_bᵀ (X_b theta - y)
///
/// where `X_b` is the feature matrix with a column of ones prepended. The initial parameters are
/// drawn from a standard normal distribution, the loop runs a fixed number of iterations and no
/// feature scaling is done.
///
/// ## Examples
///
/// ```rust
/// use descent::traits::{Fit, Predict};
/// use descent::Dataset;
/// use descent_linear::GradientDescentRegressor;
/// use ndarray::{array, Array1};
///
/// let dataset = Dataset::new(array![[0.], [1.], [2.], [3.]], array![3., 5., 7., 9.]);
/// let model = GradientDescentRegressor::params::<f64>()
///     .learning_rate(0.1)
///     .n_iterations(2000)
///     .fit(&dataset)
///     .unwrap();
///
/// assert!((model.intercept() - 3.).abs() < 1e-3);
/// let prediction: Array1<f64> = model.predict(&array![[4.]]).unwrap();
/// assert!((prediction[0] - 11.).abs() < 1e-3);
/// ```
pub struct GradientDescentRegressor;

impl GradientDescentRegressor {
    /// Create default hyperparameters with a generator seeded to `42`
    pub fn params<F: Float>() -> GradientDescentParams<F, Xoshiro256Plus> {
        GradientDescentParams::new(Xoshiro256Plus::seed_from_u64(42))
    }

    /// Create default hyperparameters drawing the initial parameters from `rng`
    pub fn params_with_rng<F: Float, R: Rng>(rng: R) -> GradientDescentParams<F, R> {
        GradientDescentParams::new(rng)
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// A fitted gradient descent regression model which can be used for making predictions.
///
/// Besides the parameters the model keeps the loss of every training iteration and a copy of the
/// training data, so diagnostics can be produced without supplying the data again.
pub struct FittedGradientDescent<F> {
    theta: Array1<F>,
    loss_history: Vec<F>,
    records: Array2<F>,
    targets: Array1<F>,
    feature_names: Vec<String>,
}

impl<F, R, D, T> Fit<ArrayBase<D, Ix2>, T, LinearError> for GradientDescentValidParams<F, R>
where
    F: Float,
    R: Rng + Clone,
    D: Data<Elem = F>,
    T: AsSingleTargets<Elem = F>,
    StandardNormal: Distribution<F>,
{
    type Object = FittedGradientDescent<F>;

    /// Fit a linear regression model given a feature matrix `X` and a target
    /// variable `y`.
    ///
    /// The feature matrix `X` must have shape `(n_samples, n_features)`
    ///
    /// The target variable `y` must have shape `(n_samples)` or `(n_samples, 1)`
    ///
    /// Returns a `FittedGradientDescent` object which contains the fitted
    /// parameters and can be used to `predict` values of the target variable
    /// for new feature values.
    fn fit(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Self::Object> {
        let X = dataset.records();
        let y = dataset.as_single_targets()?;

        let (n_samples, n_features) = X.dim();
        if n_samples == 0 {
            return Err(LinearError::NotEnoughSamples);
        }
        if y.len() != n_samples {
            return Err(LinearError::TargetLength {
                expected: n_samples,
                found: y.len(),
            });
        }

        debug!(
            "fitting {} samples with {} features, learning rate {}, {} iterations",
            n_samples,
            n_features,
            self.learning_rate(),
            self.n_iterations()
        );

        let X_b = with_intercept_column(X)?;

        let mut rng = self.rng().clone();
        let theta = Array1::random_using(n_features + 1, StandardNormal, &mut rng);

        let (theta, loss_history) = descend(
            X_b.view(),
            y,
            theta,
            self.learning_rate(),
            self.n_iterations(),
        );

        if let Some(loss) = loss_history.last() {
            debug!("final training loss {}", loss);
        }

        Ok(FittedGradientDescent {
            theta,
            loss_history,
            records: X.to_owned(),
            targets: y.to_owned(),
            feature_names: checked_feature_names(dataset.feature_names(), n_features),
        })
    }
}

/// Keep the dataset names only when there is exactly one per feature
fn checked_feature_names(names: Vec<String>, n_features: usize) -> Vec<String> {
    if names.len() == n_features {
        return names;
    }

    warn!(
        "dataset has {} feature names for {} features, using x1..x{}",
        names.len(),
        n_features,
        n_features
    );
    (1..=n_features).map(|idx| format!("x{}", idx)).collect()
}

/// Prepend a column of ones, the intercept trick
pub(crate) fn with_intercept_column<F: Float, D: Data<Elem = F>>(
    X: &ArrayBase<D, Ix2>,
) -> std::result::Result<Array2<F>, Error> {
    let ones = Array2::ones((X.nrows(), 1));

    Ok(concatenate(Axis(1), &[ones.view(), X.view()])?)
}

/// Run `n_iterations` full-batch updates starting from `theta`
///
/// Returns the final parameters and the mean squared error measured before each update.
fn descend<F: Float>(
    X_b: ArrayView2<F>,
    y: ArrayView1<F>,
    mut theta: Array1<F>,
    learning_rate: F,
    n_iterations: usize,
) -> (Array1<F>, Vec<F>) {
    let m = F::cast(X_b.nrows());
    let scale = F::cast(2.) / m;

    let mut loss_history = Vec::with_capacity(n_iterations);
    let mut diverged = false;

    for iteration in 0..n_iterations {
        let error = X_b.dot(&theta) - &y;
        let gradient = X_b.t().dot(&error) * scale;
        theta.scaled_add(-learning_rate, &gradient);

        let loss = error.mapv(|e| e * e).sum() / m;
        if !loss.is_finite() && !diverged {
            warn!(
                "loss is no longer finite at iteration {}, consider scaling the features or lowering the learning rate",
                iteration
            );
            diverged = true;
        }
        trace!("iteration {}: loss {}", iteration, loss);

        loss_history.push(loss);
    }

    (theta, loss_history)
}

/// View the fitted parameters and the training state of a fitted model.
impl<F: Float> FittedGradientDescent<F> {
    /// Create a model from known parameters
    ///
    /// `theta[0]` is the intercept, the remaining entries are the feature weights. The model has
    /// no loss history and no retained training data.
    pub fn from_theta(theta: Array1<F>) -> std::result::Result<Self, Error> {
        if theta.is_empty() {
            return Err(Error::Parameters(
                "theta needs at least the intercept entry".to_string(),
            ));
        }
        let n_features = theta.len() - 1;

        Ok(FittedGradientDescent {
            theta,
            loss_history: Vec::new(),
            records: Array2::zeros((0, n_features)),
            targets: Array1::zeros(0),
            feature_names: (1..=n_features).map(|idx| format!("x{}", idx)).collect(),
        })
    }

    /// Get the full parameter vector, intercept first
    pub fn theta(&self) -> &Array1<F> {
        &self.theta
    }

    /// Get the fitted intercept
    pub fn intercept(&self) -> F {
        self.theta[0]
    }

    /// Get the fitted feature weights
    pub fn params(&self) -> ArrayView1<F> {
        self.theta.slice(s![1..])
    }

    /// Number of features the model was trained with
    pub fn nfeatures(&self) -> usize {
        self.theta.len() - 1
    }

    /// Mean squared error of every training iteration, measured before the update
    pub fn loss_history(&self) -> &[F] {
        &self.loss_history
    }

    /// The feature matrix the model was trained on
    pub fn training_records(&self) -> &Array2<F> {
        &self.records
    }

    /// The targets the model was trained on
    pub fn training_targets(&self) -> &Array1<F> {
        &self.targets
    }

    /// Names of the training features, `x1`, `x2`, ... unless the dataset named them
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>>
    for FittedGradientDescent<F>
{
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to the linear model
    /// learned from the training data distribution.
    fn predict_inplace(
        &self,
        X: &ArrayBase<D, Ix2>,
        y: &mut Array1<F>,
    ) -> std::result::Result<(), Error> {
        if X.ncols() != self.nfeatures() {
            return Err(Error::DimensionMismatch {
                expected: self.nfeatures(),
                found: X.ncols(),
            });
        }
        if X.nrows() != y.len() {
            return Err(Error::MismatchedShapes(X.nrows(), y.len()));
        }

        let X_b = with_intercept_column(X)?;
        *y = X_b.dot(&self.theta);

        Ok(())
    }

    fn default_target(&self, X: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(X.nrows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use descent::traits::Predict;
    use descent::{Dataset, ParamGuard};
    use ndarray::array;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<FittedGradientDescent<f64>>();
    }

    #[test]
    fn intercept_column_is_prepended() {
        let X = array![[2., 3.], [4., 5.]];
        let X_b = with_intercept_column(&X).unwrap();

        assert_abs_diff_eq!(X_b, array![[1., 2., 3.], [1., 4., 5.]]);
    }

    #[test]
    fn intercept_column_of_empty_records() {
        let X: Array2<f64> = Array2::zeros((0, 3));
        let X_b = with_intercept_column(&X).unwrap();

        assert_eq!(X_b.dim(), (0, 4));
    }

    /// One update from theta = 0 on the points (0, 1), (1, 3):
    /// error = [-1, -3], gradient = (2 / 2) * [-4, -3], theta = 0.1 * [4, 3]
    #[test]
    fn single_step_matches_hand_computation() {
        let X_b = array![[1., 0.], [1., 1.]];
        let y = array![1., 3.];

        let (theta, losses) = descend(X_b.view(), y.view(), Array1::zeros(2), 0.1, 1);

        assert_abs_diff_eq!(theta, array![0.4, 0.3], epsilon = 1e-12);
        // mean of 1 and 9
        assert_eq!(losses, vec![5.]);
    }

    /// The loss is recorded before the update, so the second entry is the loss
    /// at the parameters produced by the first step.
    #[test]
    fn loss_is_measured_before_the_update() {
        let X_b = array![[1., 0.], [1., 1.]];
        let y = array![1., 3.];

        let (theta_one, _) = descend(X_b.view(), y.view(), Array1::zeros(2), 0.1, 1);
        let (_, losses) = descend(X_b.view(), y.view(), Array1::zeros(2), 0.1, 2);

        let expected = (X_b.dot(&theta_one) - &y).mapv(|e| e * e).mean().unwrap();
        assert_abs_diff_eq!(losses[1], expected, epsilon = 1e-12);
    }

    #[test]
    fn diverging_descent_still_runs_all_iterations() {
        let X_b = array![[1., 100.], [1., 200.]];
        let y = array![1., 2.];

        let (_, losses) = descend(X_b.view(), y.view(), Array1::<f64>::zeros(2), 10f64, 50);

        assert_eq!(losses.len(), 50);
        assert!(losses.last().map(|loss| !loss.is_finite() || *loss > 1e10).unwrap());
    }

    #[test]
    fn fits_a_line_through_two_dots() {
        let dataset = Dataset::new(array![[0f64], [1.]], array![1., 2.]);
        let model = GradientDescentRegressor::params()
            .n_iterations(5000)
            .fit(&dataset)
            .unwrap();
        let result: Array1<f64> = model.predict(dataset.records()).unwrap();

        assert_abs_diff_eq!(result, array![1., 2.], epsilon = 1e-6);
        assert_abs_diff_eq!(model.intercept(), 1., epsilon = 1e-6);
        assert_abs_diff_eq!(model.params(), array![1.], epsilon = 1e-6);
    }

    /// We can't fit a line through three points in general, the descent
    /// approaches the least squares solution f(x) = -1/3 + x for the
    /// points (0, 0), (1, 0), (2, 2)
    #[test]
    fn approaches_least_squares_line_through_three_dots() {
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![0., 0., 2.]);
        let model = GradientDescentRegressor::params()
            .n_iterations(5000)
            .fit(&dataset)
            .unwrap();
        let actual: Array1<f64> = model.predict(dataset.records()).unwrap();

        assert_abs_diff_eq!(actual, array![-1. / 3., 2. / 3., 5. / 3.], epsilon = 1e-6);
    }

    #[test]
    fn fits_two_weights() {
        // y = 1 + 2 x1 - x2
        let dataset = Dataset::new(
            array![[0., 0.], [1., 0.], [0., 1.], [1., 1.], [0.5, 0.2]],
            array![1., 3., 0., 2., 1.8],
        );
        let model = GradientDescentRegressor::params()
            .n_iterations(10000)
            .fit(&dataset)
            .unwrap();

        assert_abs_diff_eq!(model.theta(), &array![1., 2., -1.], epsilon = 1e-6);
    }

    #[test]
    fn column_targets_are_accepted() {
        let dataset = DatasetBase::new(array![[0.], [1.]], array![[1.], [2.]]);
        let model = GradientDescentRegressor::params()
            .n_iterations(5000)
            .fit(&dataset)
            .unwrap();

        assert_abs_diff_eq!(model.theta(), &array![1., 1.], epsilon = 1e-6);
    }

    #[test]
    fn multi_column_targets_are_rejected() {
        let dataset = DatasetBase::new(array![[0.], [1.]], array![[1., 0.], [2., 0.]]);
        let res = GradientDescentRegressor::params().fit(&dataset);

        assert!(matches!(
            res,
            Err(LinearError::BaseCrate(Error::MultipleTargets))
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dataset = Dataset::new(Array2::<f64>::zeros((0, 2)), Array1::zeros(0));
        let res = GradientDescentRegressor::params().fit(&dataset);

        assert!(matches!(res, Err(LinearError::NotEnoughSamples)));
    }

    #[test]
    fn target_length_must_match() {
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![1., 2.]);
        let res = GradientDescentRegressor::params().fit(&dataset);

        assert!(matches!(
            res,
            Err(LinearError::TargetLength {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn invalid_params_fail_the_fit() {
        let dataset = Dataset::new(array![[0.], [1.]], array![1., 2.]);
        let res = GradientDescentRegressor::params()
            .learning_rate(0.)
            .fit(&dataset);

        assert!(matches!(res, Err(LinearError::InvalidParams(_))));
    }

    #[test]
    fn loss_history_has_one_entry_per_iteration() {
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![1., 2., 4.]);

        for n_iterations in [1, 2, 17, 100] {
            let model = GradientDescentRegressor::params()
                .n_iterations(n_iterations)
                .fit(&dataset)
                .unwrap();

            assert_eq!(model.loss_history().len(), n_iterations);
        }
    }

    #[test]
    fn seeded_fits_are_reproducible() {
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![1., 2., 4.]);
        let params = GradientDescentRegressor::params()
            .n_iterations(10)
            .check()
            .unwrap();

        let first = params.fit(&dataset).unwrap();
        let second = params.fit(&dataset).unwrap();

        assert_eq!(first.theta(), second.theta());
        assert_eq!(first.loss_history(), second.loss_history());
    }

    #[test]
    fn different_seeds_start_elsewhere() {
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![1., 2., 4.]);

        let first = GradientDescentRegressor::params_with_rng(Xoshiro256Plus::seed_from_u64(1))
            .n_iterations(1)
            .fit(&dataset)
            .unwrap();
        let second = GradientDescentRegressor::params_with_rng(Xoshiro256Plus::seed_from_u64(2))
            .n_iterations(1)
            .fit(&dataset)
            .unwrap();

        assert_ne!(first.loss_history()[0], second.loss_history()[0]);
    }

    #[test]
    fn model_retains_training_data() {
        let dataset = Dataset::new(array![[0.], [1.], [2.]], array![1., 2., 4.])
            .with_feature_names(vec!["dose"]);
        let model = GradientDescentRegressor::params()
            .n_iterations(5)
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.training_records(), dataset.records());
        assert_eq!(model.training_targets(), dataset.targets());
        assert_eq!(model.feature_names(), &["dose".to_string()]);
    }

    #[test]
    fn mismatched_feature_names_fall_back_to_defaults() {
        let dataset = Dataset::new(array![[0., 1.], [1., 0.], [1., 1.]], array![1., 2., 3.])
            .with_feature_names(vec!["only_one"]);
        let model = GradientDescentRegressor::params()
            .n_iterations(5)
            .fit(&dataset)
            .unwrap();

        assert_eq!(model.feature_names(), &["x1".to_string(), "x2".to_string()]);
    }

    #[test]
    fn from_theta_builds_untrained_model() {
        let model = FittedGradientDescent::from_theta(array![5., 0.]).unwrap();

        assert_eq!(model.intercept(), 5.);
        assert_eq!(model.nfeatures(), 1);
        assert!(model.loss_history().is_empty());
        assert_eq!(model.training_records().dim(), (0, 1));
        assert_eq!(model.feature_names(), &["x1".to_string()]);

        assert!(matches!(
            FittedGradientDescent::<f64>::from_theta(Array1::zeros(0)),
            Err(Error::Parameters(_))
        ));
    }

    #[test]
    fn predict_rejects_wrong_feature_count() {
        let model = FittedGradientDescent::from_theta(array![1., 2.]).unwrap();
        let res: std::result::Result<Array1<f64>, _> = model.predict(&array![[1., 2.]]);

        assert!(matches!(
            res,
            Err(Error::DimensionMismatch {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn predict_on_no_rows_is_empty() {
        let model = FittedGradientDescent::from_theta(array![1., 2.]).unwrap();
        let prediction: Array1<f64> = model.predict(&Array2::zeros((0, 1))).unwrap();

        assert_eq!(prediction.len(), 0);
    }

    #[test]
    fn predict_inplace_checks_target_length() {
        let model = FittedGradientDescent::from_theta(array![1., 2.]).unwrap();
        let mut y = Array1::zeros(3);

        assert!(matches!(
            model.predict_inplace(&array![[1.], [2.]], &mut y),
            Err(Error::MismatchedShapes(2, 3))
        ));
    }
}
