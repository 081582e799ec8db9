//! PNG output via plotters' bitmap backend.

use std::path::Path;

use plotters::chart::SeriesAnno;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use shardplot_core::error::{Result, ShardPlotError};

use super::FigureRenderer;
use crate::figure::{LineStyle, MarkerShape, Panel, Rgb, ShardFigure};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const TITLE_FONT: f64 = 32.0;
const AXIS_FONT: f64 = 18.0;
const MARKER_SIZE: i32 = 3;

/// Renders the four panels side by side on one bitmap.
#[derive(Debug, Clone, Copy)]
pub struct PngRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self {
            width: 3600,
            height: 720,
        }
    }
}

impl FigureRenderer for PngRenderer {
    fn render(&self, figure: &ShardFigure, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let body = root
            .titled(&figure.title, ("sans-serif", TITLE_FONT).into_font())
            .map_err(render_err)?;
        let areas = body.split_evenly((1, figure.panels.len().max(1)));
        for (area, panel) in areas.iter().zip(&figure.panels) {
            draw_panel(area, panel, figure.x_range)?;
        }

        root.present().map_err(render_err)?;
        Ok(())
    }
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    (x0, x1): (f64, f64),
) -> Result<()> {
    let (y0, y1) = panel.y_range();
    let mut chart = ChartBuilder::on(area)
        .margin(16)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .axis_desc_style(("sans-serif", AXIS_FONT).into_font())
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(BLACK.mix(0.04))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()
        .map_err(render_err)?;

    for trace in &panel.traces {
        let color = rgb(trace.color);
        let style = color.stroke_width(2);
        for seg in &trace.segments {
            draw_line(&mut chart, seg, trace.style, style)?;
        }

        let points: Vec<(f64, f64)> = trace.points().collect();
        draw_markers(&mut chart, &points, trace.marker, color)?
            .label(trace.label())
            .legend(move |(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], style));
    }

    for overlay in panel.overlays.iter().filter(|o| !o.points.is_empty()) {
        let color = rgb(overlay.color);
        let anno = draw_markers(&mut chart, &overlay.points, overlay.marker, color)?;
        anno.label(overlay.label());
        match overlay.marker {
            MarkerShape::Plus => anno.legend(move |(x, y)| {
                let style = color.stroke_width(2);
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(-4, 0), (4, 0)], style)
                    + PathElement::new(vec![(0, -4), (0, 4)], style)
            }),
            _ => anno.legend(move |(x, y)| Cross::new((x, y), 4, color.stroke_width(2))),
        };
    }

    for line in &panel.ref_lines {
        let style = rgb(line.color).stroke_width(1);
        let anno = draw_line(&mut chart, &[(x0, line.y), (x1, line.y)], line.style, style)?;
        if let Some(label) = &line.label {
            anno.label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], style));
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

fn draw_line<'a, 'b, DB: DrawingBackend>(
    chart: &'b mut Chart<'a, DB>,
    points: &[(f64, f64)],
    line: LineStyle,
    style: ShapeStyle,
) -> Result<&'b mut SeriesAnno<'a, DB>> {
    let points = points.iter().copied();
    match line {
        LineStyle::Solid => chart.draw_series(LineSeries::new(points, style)),
        LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, 10, 6, style)),
        LineStyle::Dotted => chart.draw_series(DashedLineSeries::new(points, 2, 4, style)),
    }
    .map_err(render_err)
}

fn draw_markers<'a, 'b, DB: DrawingBackend>(
    chart: &'b mut Chart<'a, DB>,
    points: &[(f64, f64)],
    shape: MarkerShape,
    color: RGBColor,
) -> Result<&'b mut SeriesAnno<'a, DB>> {
    let points = points.iter().copied();
    match shape {
        MarkerShape::Circle => {
            chart.draw_series(points.map(|p| Circle::new(p, MARKER_SIZE, color.filled())))
        }
        MarkerShape::Square => chart.draw_series(points.map(|p| {
            EmptyElement::at(p)
                + Rectangle::new(
                    [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                    color.filled(),
                )
        })),
        MarkerShape::Triangle => chart.draw_series(
            points.map(|p| TriangleMarker::new(p, MARKER_SIZE + 1, color.filled())),
        ),
        MarkerShape::Cross => chart.draw_series(
            points.map(|p| Cross::new(p, MARKER_SIZE + 1, color.stroke_width(2))),
        ),
        MarkerShape::Plus => chart.draw_series(points.map(|p| {
            let style = color.stroke_width(2);
            EmptyElement::at(p)
                + PathElement::new(vec![(-MARKER_SIZE - 1, 0), (MARKER_SIZE + 1, 0)], style)
                + PathElement::new(vec![(0, -MARKER_SIZE - 1), (0, MARKER_SIZE + 1)], style)
        })),
    }
    .map_err(render_err)
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn render_err<E: std::fmt::Display>(e: E) -> ShardPlotError {
    ShardPlotError::Render(e.to_string())
}
