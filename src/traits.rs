//! Provide traits for different classes of algorithms
//!

use crate::dataset::{DatasetBase, Records};
use crate::error::Result;

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// in a regression setting the fitted model is a set of parameters which relate the records to
/// their targets. The fitted object is independent of the algorithm which produced it, so
/// hyperparameters can be reused to fit any number of models.
pub trait Fit<R: Records, T, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> std::result::Result<Self::Object, E>;
}

/// Predict with a fitted model
///
/// Implementors write their predictions into a target container provided by
/// `default_target`. Shape checks happen before anything is written, so a failed prediction
/// never leaves a partially filled container behind.
pub trait PredictInplace<R: Records, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T) -> Result<()>;

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

/// Predict with a fitted model
///
/// This trait is implemented for every model implementing `PredictInplace` and allocates the
/// targets before filling them.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> Result<T>;
}

impl<'a, R: Records, T, O: PredictInplace<R, T>> Predict<&'a R, T> for O {
    fn predict(&self, records: &'a R) -> Result<T> {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets)?;
        Ok(targets)
    }
}
