use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    /// The chart or one of its series has nothing to draw
    #[error("nothing to draw in {0}")]
    EmptySeries(String),
    /// Bars share no axis with points, a chart holds either kind
    #[error("chart {0} mixes bars with point series")]
    MixedSeries(String),
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error(transparent)]
    BaseCrate(#[from] descent::Error),
}
