//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables. All metrics compare
//! a prediction (`self`) to the ground truth (`compare_to`) and fail if the two arrays differ in
//! length or are empty.

use ndarray::{ArrayBase, Data, Ix1};

use crate::{
    error::{Error, Result},
    Float,
};

/// Regression metrices trait
pub trait Regression<F: Float> {
    /// Maximal absolute error between two continuous variables
    fn max_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
    /// Mean absolute error between two continuous variables
    fn mean_absolute_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
    /// Mean squared error between two continuous variables
    fn mean_squared_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
    /// Sum of squared residuals between prediction and ground truth
    fn residual_sum_of_squares<D: Data<Elem = F>>(
        &self,
        compare_to: &ArrayBase<D, Ix1>,
    ) -> Result<F>;
    /// Sum of squared deviations of `self` from its own mean
    fn total_sum_of_squares(&self) -> Result<F>;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// To evaluate the accuracy of a prediction, use
    /// ```ignore
    /// prediction.r2(&ground_truth)
    /// ```
    ///
    /// Fails with `Error::DegenerateTarget` if the ground truth is constant.
    fn r2<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F>;
}

fn check_lengths<F, D1: Data<Elem = F>, D2: Data<Elem = F>>(
    a: &ArrayBase<D1, Ix1>,
    b: &ArrayBase<D2, Ix1>,
) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::MismatchedShapes(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(Error::NotEnoughSamples);
    }

    Ok(())
}

impl<F: Float, S: Data<Elem = F>> Regression<F> for ArrayBase<S, Ix1> {
    fn max_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        check_lengths(self, compare_to)?;

        Ok((self - compare_to)
            .iter()
            .map(|x| x.abs())
            .fold(F::neg_infinity(), F::max))
    }

    fn mean_absolute_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        check_lengths(self, compare_to)?;

        (self - compare_to)
            .mapv(|x| x.abs())
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    fn mean_squared_error<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        check_lengths(self, compare_to)?;

        (self - compare_to)
            .mapv(|x| x * x)
            .mean()
            .ok_or(Error::NotEnoughSamples)
    }

    fn residual_sum_of_squares<D: Data<Elem = F>>(
        &self,
        compare_to: &ArrayBase<D, Ix1>,
    ) -> Result<F> {
        check_lengths(self, compare_to)?;

        Ok((self - compare_to).mapv(|x| x * x).sum())
    }

    fn total_sum_of_squares(&self) -> Result<F> {
        let mean = self.mean().ok_or(Error::NotEnoughSamples)?;

        Ok(self.mapv(|x| (x - mean) * (x - mean)).sum())
    }

    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean is taken of `compare_to`, the ground truth
    fn r2<D: Data<Elem = F>>(&self, compare_to: &ArrayBase<D, Ix1>) -> Result<F> {
        let ss_res = self.residual_sum_of_squares(compare_to)?;
        let ss_total = compare_to.total_sum_of_squares()?;

        if ss_total == F::zero() {
            return Err(Error::DegenerateTarget);
        }

        Ok(F::one() - ss_res / ss_total)
    }
}
