//! Backend independent chart descriptions

/// Stroke of a line series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A single data series of a chart
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    /// Points connected in order
    Line {
        label: String,
        points: Vec<(f64, f64)>,
        style: LineStyle,
    },
    /// Unconnected markers, `opacity` in `[0, 1]`
    Scatter {
        label: String,
        points: Vec<(f64, f64)>,
        opacity: f64,
    },
    /// One named bar per category
    Bars {
        label: String,
        bars: Vec<(String, f64)>,
    },
}

impl Series {
    pub fn label(&self) -> &str {
        match self {
            Series::Line { label, .. } | Series::Scatter { label, .. } | Series::Bars { label, .. } => {
                label
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Line { points, .. } | Series::Scatter { points, .. } => points.len(),
            Series::Bars { bars, .. } => bars.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_bars(&self) -> bool {
        matches!(self, Series::Bars { .. })
    }

    fn points(&self) -> &[(f64, f64)] {
        match self {
            Series::Line { points, .. } | Series::Scatter { points, .. } => points,
            Series::Bars { .. } => &[],
        }
    }
}

/// Description of a two dimensional chart
///
/// A chart either holds point series (lines and scatters sharing numeric axes) or bar series
/// (categories on the x axis).
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub series: Vec<Series>,
}

impl Chart {
    /// Create an empty chart with grid lines
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Chart {
        Chart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            grid: true,
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Chart {
        self.series.push(series);
        self
    }

    pub fn with_grid(mut self, grid: bool) -> Chart {
        self.grid = grid;
        self
    }

    /// Whether there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }

    /// Axis ranges `(x, y)` covering every point, padded by five percent
    pub fn point_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self
            .series
            .iter()
            .flat_map(|s| s.points().iter())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let &(x0, y0) = points.next()?;
        let (x_range, y_range) = points.fold(((x0, x0), (y0, y0)), |(xr, yr), &(x, y)| {
            ((xr.0.min(x), xr.1.max(x)), (yr.0.min(y), yr.1.max(y)))
        });

        Some((pad(x_range), pad(y_range)))
    }

    /// Value range of all bars, always including zero and padded by five percent
    pub fn bar_bounds(&self) -> Option<(f64, f64)> {
        let values = self
            .series
            .iter()
            .filter_map(|s| match s {
                Series::Bars { bars, .. } => Some(bars.iter().map(|(_, v)| *v)),
                _ => None,
            })
            .flatten()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();

        if values.is_empty() {
            return None;
        }

        let range = values
            .iter()
            .fold((0f64, 0f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));

        Some(pad(range))
    }
}

fn pad((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi - lo <= f64::EPSILON * hi.abs().max(1.) {
        return (lo - 0.5, hi + 0.5);
    }
    let margin = (hi - lo) * 0.05;
    (lo - margin, hi + margin)
}
