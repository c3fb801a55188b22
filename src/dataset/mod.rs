//! Datasets
//!
//! This module implements the dataset struct and various helper traits to extend its
//! functionality.
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Ix2, NdFloat, OwnedRepr};

use num_traits::{FromPrimitive, NumCast};

use std::iter::Sum;

use crate::error::Result;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod impl_dataset;
mod impl_records;
mod impl_targets;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in records of a dataset and,
/// for regression tasks, in the targets as well.
pub trait Float: NdFloat + FromPrimitive + Default + Sum + approx::AbsDiffEq<Epsilon = Self> {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains a number of records about the data
/// and the targets they relate to, plus optional feature names. The dataset base is only generic
/// over the records and targets and introduces a trait bound on the records.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples), or a two-dimensional
/// matrix with a single column
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// # Trait bounds
///
/// * `R: Records`: generic over feature matrices
/// * `T`: generic over any `ndarray` array which can be used as targets. The `AsSingleTargets`
/// bound is omitted here to avoid some repetition in `src/dataset/impl_dataset.rs`
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<R, T>
where
    R: Records,
{
    pub records: R,
    pub targets: T,

    feature_names: Vec<String>,
}

/// Dataset
///
/// The most commonly used type of dataset. It contains a number of records stored as an `Array2`
/// and each record corresponds to a single target stored in an `Array1`.
pub type Dataset<F> = DatasetBase<ArrayBase<OwnedRepr<F>, Ix2>, Array1<F>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

/// Return a view on a single target variable
///
/// Targets may be stored as a vector of length `nsamples` or as a column matrix of shape
/// `(nsamples, 1)`. Matrices with more than one column are rejected.
pub trait AsSingleTargets {
    type Elem;

    /// Convert to single target, fails for more than one target
    ///
    /// # Returns
    ///
    /// A one-dimensional view on the targets, or `Error::MultipleTargets` in case that there are
    /// more than a single target.
    fn as_single_targets(&self) -> Result<ArrayView1<Self::Elem>>;
}

/// Build a records matrix from nested rows
///
/// Returns `Error::NdShape` if the rows are ragged.
pub fn records_from_rows<F: Float>(rows: &[Vec<F>]) -> Result<Array2<F>> {
    let ncols = rows.first().map(|row| row.len()).unwrap_or(0);
    let flat = rows.iter().flatten().copied().collect::<Vec<_>>();

    Ok(Array2::from_shape_vec((rows.len(), ncols), flat)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn dataset_reports_dimensions() {
        let dataset = Dataset::new(array![[1., 2.], [3., 4.], [5., 6.]], array![0., 1., 2.]);

        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.nfeatures(), 2);
        assert_eq!(dataset.records().nsamples(), 3);
    }

    #[test]
    fn default_feature_names_are_one_based() {
        let dataset = Dataset::new(array![[1., 2., 3.]], array![0.]);
        assert_eq!(dataset.feature_names(), vec!["x1", "x2", "x3"]);

        let dataset = dataset.with_feature_names(vec!["age", "height", "weight"]);
        assert_eq!(dataset.feature_names(), vec!["age", "height", "weight"]);
    }

    #[test]
    fn column_targets_act_as_single_targets() {
        let dataset = DatasetBase::new(array![[0.], [1.]], array![[5.], [7.]]);
        let targets = dataset.as_single_targets().unwrap();

        assert_abs_diff_eq!(targets, array![5., 7.]);
    }

    #[test]
    fn multiple_target_columns_are_rejected() {
        let dataset = DatasetBase::new(array![[0.], [1.]], array![[5., 1.], [7., 2.]]);

        assert!(matches!(
            dataset.as_single_targets(),
            Err(Error::MultipleTargets)
        ));
    }

    #[test]
    fn records_from_rows_builds_matrix() {
        let records = records_from_rows(&[vec![1., 2.], vec![3., 4.]]).unwrap();
        assert_abs_diff_eq!(records, array![[1., 2.], [3., 4.]]);

        let empty = records_from_rows::<f64>(&[]).unwrap();
        assert_eq!(empty.dim(), (0, 0));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let res = records_from_rows(&[vec![1., 2.], vec![3.]]);
        assert!(matches!(res, Err(Error::NdShape(_))));
    }
}
