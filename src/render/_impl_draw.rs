use crate::{PairPlot, RgbaColor};
use plotters::chart::SeriesLabelPosition;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Both axes span the full correlation range.
const AXIS_RANGE: std::ops::Range<f64> = -1.0..1.0;

impl From<RgbaColor> for RGBAColor {
    fn from(value: RgbaColor) -> Self {
        RGBAColor(value.r, value.g, value.b, value.alpha)
    }
}

/// Draw a `PairPlot` onto a plotters drawing area. The caller presents the area.
pub(crate) fn draw_pair_plot<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &PairPlot,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(8)
        .x_label_area_size(36)
        .y_label_area_size(40)
        .build_cartesian_2d(AXIS_RANGE, AXIS_RANGE)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(5)
        .x_desc(plot.x_title.as_str())
        .y_desc(plot.y_title.as_str())
        .label_style(("sans-serif", 10))
        .axis_desc_style(("sans-serif", 11))
        .draw()?;

    let stroke_width = (plot.line_width.round() as u32).max(1);
    let radius = plot.marker_size as i32;
    for series in &plot.series {
        let fill = RGBAColor::from(series.fill).filled();
        let outline = RGBAColor::from(series.outline).stroke_width(stroke_width);
        chart.draw_series(series.points.iter().map(|&(x, y)| {
            EmptyElement::at((x, y))
                + Circle::new((0, 0), radius, fill)
                + Circle::new((0, 0), radius, outline)
        }))?;
    }

    // The legend only carries the aggregate correlation of the pair.
    chart
        .draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?
        .label(plot.legend.as_str())
        .legend(|(x, y)| EmptyElement::at((x, y)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 11))
        .draw()?;

    Ok(())
}
