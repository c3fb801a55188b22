use std::fmt::Display;
use std::path::PathBuf;

use crate::chart::{Chart, LineStyle, Series};
use crate::error::{PlotError, Result};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Draws a chart description
pub trait Renderer {
    type Output;

    fn render(&self, chart: &Chart) -> Result<Self::Output>;
}

/// Render charts into an SVG document held in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    pub size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(size: (u32, u32)) -> SvgRenderer {
        SvgRenderer { size }
    }
}

impl Default for SvgRenderer {
    fn default() -> SvgRenderer {
        SvgRenderer::new(DEFAULT_SIZE)
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, chart: &Chart) -> Result<String> {
        check_drawable(chart)?;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            draw_chart(&root, chart)?;
            root.present().map_err(drawing_error)?;
        }

        Ok(svg)
    }
}

/// Render charts into an image file
///
/// Paths ending in `.svg` are written as SVG, every other extension is handed to the bitmap
/// backend, which picks the image format from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRenderer {
    pub path: PathBuf,
    pub size: (u32, u32),
}

impl FileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> FileRenderer {
        FileRenderer {
            path: path.into(),
            size: DEFAULT_SIZE,
        }
    }

    pub fn with_size(mut self, size: (u32, u32)) -> FileRenderer {
        self.size = size;
        self
    }

    fn is_svg(&self) -> bool {
        self.path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"))
    }
}

impl Renderer for FileRenderer {
    type Output = PathBuf;

    fn render(&self, chart: &Chart) -> Result<PathBuf> {
        check_drawable(chart)?;

        if self.is_svg() {
            let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
            draw_chart(&root, chart)?;
            root.present().map_err(drawing_error)?;
        } else {
            let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
            draw_chart(&root, chart)?;
            root.present().map_err(drawing_error)?;
        }

        info!("chart \"{}\" written to {}", chart.title, self.path.display());

        Ok(self.path.clone())
    }
}

fn drawing_error(err: impl Display) -> PlotError {
    PlotError::Drawing(err.to_string())
}

/// Reject charts without data or with bars next to points before touching a backend
fn check_drawable(chart: &Chart) -> Result<()> {
    if chart.is_empty() {
        return Err(PlotError::EmptySeries(chart.title.clone()));
    }

    let n_bars = chart.series.iter().filter(|s| s.is_bars()).count();
    if n_bars > 0 && n_bars < chart.series.len() {
        return Err(PlotError::MixedSeries(chart.title.clone()));
    }

    Ok(())
}

fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<()> {
    root.fill(&WHITE).map_err(drawing_error)?;

    if chart.series.iter().any(Series::is_bars) {
        draw_bars(root, chart)
    } else {
        draw_points(root, chart)
    }
}

fn draw_points<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<()> {
    let ((x0, x1), (y0, y1)) = chart
        .point_bounds()
        .ok_or_else(|| PlotError::EmptySeries(chart.title.clone()))?;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(drawing_error)?;

    let mut mesh = ctx.configure_mesh();
    mesh.x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str());
    if !chart.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(drawing_error)?;

    for (idx, series) in chart.series.iter().enumerate() {
        match series {
            Series::Line {
                label,
                points,
                style: LineStyle::Solid,
            } => {
                let color = Palette99::pick(idx).to_rgba();
                ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                    .map_err(drawing_error)?
                    .label(label.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
            Series::Line {
                label,
                points,
                style: LineStyle::Dashed,
            } => {
                ctx.draw_series(DashedLineSeries::new(
                    points.iter().copied(),
                    8,
                    4,
                    RED.stroke_width(2),
                ))
                .map_err(drawing_error)?
                .label(label.as_str())
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
            }
            Series::Scatter {
                label,
                points,
                opacity,
            } => {
                let style = BLUE.mix(*opacity).filled();
                ctx.draw_series(points.iter().map(|point| Circle::new(*point, 3, style)))
                    .map_err(drawing_error)?
                    .label(label.as_str())
                    .legend(move |(x, y)| Circle::new((x, y), 3, style));
            }
            Series::Bars { .. } => return Err(PlotError::MixedSeries(chart.title.clone())),
        }
    }

    ctx.configure_series_labels()
        .background_style(WHITE)
        .border_style(BLACK)
        .draw()
        .map_err(drawing_error)?;

    Ok(())
}

fn draw_bars<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<()> {
    let (y0, y1) = chart
        .bar_bounds()
        .ok_or_else(|| PlotError::EmptySeries(chart.title.clone()))?;

    let names = chart
        .series
        .iter()
        .filter_map(|s| match s {
            Series::Bars { bars, .. } => Some(bars.iter().map(|(name, _)| name.clone())),
            _ => None,
        })
        .flatten()
        .collect::<Vec<_>>();
    let n_bars = names.len();

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n_bars).into_segmented(), y0..y1)
        .map_err(drawing_error)?;

    let label_bar = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(idx) => names.get(*idx).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    let mut mesh = ctx.configure_mesh();
    mesh.disable_x_mesh()
        .x_labels(n_bars)
        .x_label_formatter(&label_bar)
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str());
    if !chart.grid {
        mesh.disable_y_mesh();
    }
    mesh.draw().map_err(drawing_error)?;

    let mut offset = 0;
    for (idx, series) in chart.series.iter().enumerate() {
        let bars = match series {
            Series::Bars { bars, .. } => bars,
            _ => return Err(PlotError::MixedSeries(chart.title.clone())),
        };

        let style = Palette99::pick(idx).to_rgba().filled();
        ctx.draw_series(bars.iter().enumerate().map(|(i, (_, value))| {
            let pos = offset + i;
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(pos), 0.), (SegmentValue::Exact(pos + 1), *value)],
                style,
            );
            bar.set_margin(0, 0, 5, 5);
            bar
        }))
        .map_err(drawing_error)?;

        offset += bars.len();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(label: &str) -> Series {
        Series::Bars {
            label: label.to_string(),
            bars: vec![("x1".to_string(), 1.5), ("x2".to_string(), -0.5)],
        }
    }

    fn scatter() -> Series {
        Series::Scatter {
            label: "samples".to_string(),
            points: vec![(0., 0.), (1., 1.1), (2., 1.9)],
            opacity: 0.6,
        }
    }

    #[test]
    fn empty_chart_is_rejected() {
        let chart = Chart::new("Nothing", "x", "y").with_series(Series::Line {
            label: "l".to_string(),
            points: vec![],
            style: LineStyle::Solid,
        });

        assert!(matches!(
            SvgRenderer::default().render(&chart),
            Err(PlotError::EmptySeries(title)) if title == "Nothing"
        ));
    }

    #[test]
    fn bars_and_points_do_not_mix() {
        let chart = Chart::new("Mixed", "x", "y")
            .with_series(scatter())
            .with_series(bars("w"));

        assert!(matches!(
            SvgRenderer::default().render(&chart),
            Err(PlotError::MixedSeries(_))
        ));
        assert!(matches!(
            FileRenderer::new("never-written.png").render(&chart),
            Err(PlotError::MixedSeries(_))
        ));
    }

    #[test]
    fn file_format_follows_extension() {
        assert!(FileRenderer::new("chart.svg").is_svg());
        assert!(FileRenderer::new("chart.SVG").is_svg());
        assert!(!FileRenderer::new("chart.png").is_svg());
        assert!(!FileRenderer::new("chart").is_svg());
        assert_eq!(FileRenderer::new("c.png").with_size((10, 20)).size, (10, 20));
    }

    #[test]
    fn renders_points_to_svg() {
        let chart = Chart::new("Predicted vs Actual", "Actual y", "Predicted y")
            .with_series(scatter())
            .with_series(Series::Line {
                label: "identity".to_string(),
                points: vec![(0., 0.), (2., 2.)],
                style: LineStyle::Dashed,
            });

        let svg = SvgRenderer::new((400, 300)).render(&chart).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Predicted vs Actual"));
        assert!(svg.contains("Actual y"));
    }

    #[test]
    fn renders_bars_to_svg() {
        let chart = Chart::new("Learned Feature Coefficients", "", "Weight").with_series(bars("w"));

        let svg = SvgRenderer::default().render(&chart).unwrap();

        assert!(svg.contains("x1"));
        assert!(svg.contains("x2"));
    }
}
