use crate::chart::{Chart, LineStyle, Series};
use crate::error::{PlotError, Result};
use descent::traits::Predict;
use descent::Float;
use descent_linear::FittedGradientDescent;
use ndarray::Array1;

/// Diagnostic charts of a trained model
///
/// The charts only describe what to draw, pass them to a [`Renderer`](crate::Renderer) to get an
/// image.
pub trait Diagnostics {
    /// Training loss against the iteration it was measured in
    fn loss_curve(&self) -> Chart;

    /// Predictions on the training data against the training targets
    ///
    /// Returns `PlotError::EmptySeries` if the model retained no training data.
    fn predicted_vs_actual(&self) -> Result<Chart>;

    /// Learned weight of every feature, without the intercept
    fn coefficients(&self) -> Chart;
}

impl<F: Float> Diagnostics for FittedGradientDescent<F> {
    fn loss_curve(&self) -> Chart {
        let points = self
            .loss_history()
            .iter()
            .enumerate()
            .map(|(iteration, loss)| (iteration as f64, to_f64(*loss)))
            .collect();

        Chart::new("Loss Curve", "Iterations", "MSE Loss").with_series(Series::Line {
            label: "loss".to_string(),
            points,
            style: LineStyle::Solid,
        })
    }

    fn predicted_vs_actual(&self) -> Result<Chart> {
        let actual = self.training_targets();
        if actual.is_empty() {
            return Err(PlotError::EmptySeries("Predicted vs Actual".to_string()));
        }

        let predicted: Array1<F> = self.predict(self.training_records())?;
        let points = actual
            .iter()
            .zip(predicted.iter())
            .map(|(y, y_hat)| (to_f64(*y), to_f64(*y_hat)))
            .collect::<Vec<_>>();

        let (lo, hi) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (y, _)| {
                (lo.min(*y), hi.max(*y))
            });

        Ok(Chart::new("Predicted vs Actual", "Actual y", "Predicted y")
            .with_series(Series::Scatter {
                label: "samples".to_string(),
                points,
                opacity: 0.6,
            })
            .with_series(Series::Line {
                label: "identity".to_string(),
                points: vec![(lo, lo), (hi, hi)],
                style: LineStyle::Dashed,
            }))
    }

    fn coefficients(&self) -> Chart {
        let bars = self
            .feature_names()
            .iter()
            .cloned()
            .zip(self.params().iter().map(|w| to_f64(*w)))
            .collect();

        Chart::new("Learned Feature Coefficients", "", "Weight").with_series(Series::Bars {
            label: "weight".to_string(),
            bars,
        })
    }
}

fn to_f64<F: Float>(x: F) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
