use super::{AsSingleTargets, DatasetBase, Records};
use crate::error::Result;
use ndarray::ArrayView1;

/// Implementation without constraints on records and targets
///
/// This implementation block provides methods for the creation and accessing of a dataset.
impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    ///
    /// # Example
    ///
    /// ```ignore
    /// let dataset = Dataset::new(records, targets);
    /// ```
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Returns reference to targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Returns reference to records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Returns feature names
    ///
    /// A feature name gives a human-readable string describing the purpose of a single feature.
    /// Unnamed features are called `x1`, `x2`, ... in column order.
    pub fn feature_names(&self) -> Vec<String> {
        if !self.feature_names.is_empty() {
            self.feature_names.clone()
        } else {
            (1..=self.records.nfeatures())
                .map(|idx| format!("x{}", idx))
                .collect()
        }
    }

    /// Updates the feature names of a dataset
    pub fn with_feature_names<I: Into<String>>(mut self, names: Vec<I>) -> DatasetBase<R, T> {
        let feature_names = names.into_iter().map(|x| x.into()).collect();

        self.feature_names = feature_names;

        self
    }

    /// Number of samples in the dataset
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Number of features of every sample
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }
}

impl<R: Records, T: AsSingleTargets> DatasetBase<R, T> {
    /// Returns a one-dimensional view on the targets
    pub fn as_single_targets(&self) -> Result<ArrayView1<T::Elem>> {
        self.targets.as_single_targets()
    }
}
