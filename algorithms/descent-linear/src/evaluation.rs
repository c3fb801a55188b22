//! Goodness of fit of a trained model
use std::fmt;
use std::io;

use crate::algorithm::FittedGradientDescent;
use crate::error::{LinearError, Result};
use descent::dataset::{AsSingleTargets, DatasetBase};
use descent::metrics::Regression;
use descent::traits::PredictInplace;
use descent::{Error, Float};
use log::info;
use ndarray::{ArrayBase, Data, Ix2};

/// Mean squared error and coefficient of determination of a model on a dataset
///
/// R² is undefined when every target has the same value, because the total sum of squares is
/// zero. The evaluation records this instead of storing `NaN` or `inf`; callers pick the
/// behaviour they want with [`r2`](Evaluation::r2) (an error) or
/// [`r2_or_nan`](Evaluation::r2_or_nan) (a `NaN`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<F> {
    mse: F,
    r2: Option<F>,
}

impl<F: Float> Evaluation<F> {
    /// Mean squared error between targets and predictions
    pub fn mse(&self) -> F {
        self.mse
    }

    /// Coefficient of determination
    ///
    /// Returns `Error::DegenerateTarget` if the targets are constant.
    pub fn r2(&self) -> std::result::Result<F, Error> {
        self.r2.ok_or(Error::DegenerateTarget)
    }

    /// Coefficient of determination, `NaN` if the targets are constant
    pub fn r2_or_nan(&self) -> F {
        self.r2.unwrap_or_else(F::nan)
    }

    /// Whether the targets were constant, leaving R² undefined
    pub fn is_degenerate(&self) -> bool {
        self.r2.is_none()
    }

    /// Write the two line report to `writer`
    pub fn report<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", self)
    }
}

impl<F: Float> fmt::Display for Evaluation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MSE: {:.3}", self.mse)?;
        match self.r2 {
            Some(r2) => write!(f, "R² Score: {:.3}", r2),
            None => write!(f, "R² Score: undefined (constant target)"),
        }
    }
}

impl<F: Float> FittedGradientDescent<F> {
    /// Evaluate the model on a dataset
    ///
    /// Predicts the records of `dataset` and compares the predictions with its targets. The
    /// feature count has to match the training data and there has to be one target per sample.
    pub fn evaluate<D, T>(&self, dataset: &DatasetBase<ArrayBase<D, Ix2>, T>) -> Result<Evaluation<F>>
    where
        D: Data<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let truth = dataset.as_single_targets()?;
        let n_samples = dataset.nsamples();
        if n_samples == 0 {
            return Err(LinearError::NotEnoughSamples);
        }
        if truth.len() != n_samples {
            return Err(LinearError::TargetLength {
                expected: n_samples,
                found: truth.len(),
            });
        }

        let mut prediction = self.default_target(dataset.records());
        self.predict_inplace(dataset.records(), &mut prediction)?;

        let mse = prediction.mean_squared_error(&truth)?;
        let r2 = match prediction.r2(&truth) {
            Ok(r2) => Some(r2),
            Err(Error::DegenerateTarget) => None,
            Err(err) => return Err(err.into()),
        };

        let evaluation = Evaluation { mse, r2 };
        info!(
            "evaluated {} samples: {}",
            n_samples,
            evaluation.to_string().replace('\n', ", ")
        );

        Ok(evaluation)
    }

    /// Evaluate the model on a dataset and print the two line report to standard output
    pub fn evaluate_and_print<D, T>(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, T>,
    ) -> Result<Evaluation<F>>
    where
        D: Data<Elem = F>,
        T: AsSingleTargets<Elem = F>,
    {
        let evaluation = self.evaluate(dataset)?;
        println!("{}", evaluation);

        Ok(evaluation)
    }
}
