//! Utility functions for randomly generating datasets

use descent::Dataset;
use ndarray::{Array, Array1, Array2, ArrayBase, Data, Ix1};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Normal, Uniform},
    RandomExt,
};

/// Sample `n_samples` points of the linear relationship
///
/// `y = intercept + x · weights + ε`
///
/// Every feature is drawn uniformly from `x_range = (low, high)` and the noise `ε` from a normal
/// distribution with standard deviation `noise_std`. A `noise_std` of zero gives exact targets.
///
/// `linear` can be used to quickly assemble a synthetic dataset to test or benchmark a regressor
/// on a best-case scenario input, where the true parameters are known.
///
/// # Panics
///
/// If `x_range` is empty (`low >= high`) or `noise_std` is negative or not finite.
pub fn linear(
    n_samples: usize,
    intercept: f64,
    weights: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    x_range: (f64, f64),
    noise_std: f64,
    rng: &mut impl Rng,
) -> Dataset<f64> {
    let (low, high) = x_range;
    let records: Array2<f64> =
        Array::random_using((n_samples, weights.len()), Uniform::new(low, high), rng);

    let mut targets = records.dot(weights) + intercept;
    if noise_std > 0. {
        let noise_distr = Normal::new(0., noise_std).expect("noise_std must be finite");
        let noise: Array1<f64> = Array::random_using(n_samples, noise_distr, rng);
        targets += &noise;
    }

    Dataset::new(records, targets)
}
