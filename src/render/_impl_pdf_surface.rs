use crate::render::PlotSurface;
use crate::{DualRegulonError, PairPlot, RgbaColor};
use printpdf::{
    path::{PaintMode, WindingOrder},
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
    Polygon, Pt, Rgb, TextMatrix,
};
use std::path::PathBuf;

/// Physical size of one document, in inches.
const DOCUMENT_INCHES: f32 = 3.0;
const POINTS_PER_INCH: f32 = 72.0;
/// Marker sizes are given in CSS pixels (96 per inch).
const POINTS_PER_PIXEL: f32 = 0.75;

/// Plot area inside the page, in points from the lower left corner.
const LEFT: f32 = 46.0;
const RIGHT: f32 = 206.0;
const BOTTOM: f32 = 38.0;
const TOP: f32 = 206.0;

const TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
const LABEL_SIZE: f32 = 7.0;
const TITLE_SIZE: f32 = 8.0;
const CIRCLE_STEPS: usize = 24;

/// A `PlotSurface` producing single-page PDF documents of 3×3 inches.
///
/// Plots are rendered in memory and written to `<base>.pdf` when the surface is
/// closed. A plot opened without a path ends up on the display instead (see
/// `PdfSurface::display`).
#[derive(Clone, Debug, Default)]
pub struct PdfSurface {
    target: Option<PathBuf>,
    buffer: Vec<u8>,
    is_open: bool,
    is_drawn: bool,
    display: Option<Vec<u8>>,
}

impl PdfSurface {
    pub fn new() -> PdfSurface {
        PdfSurface::default()
    }

    /// Page width and height in millimetres.
    pub fn page_size(&self) -> (f32, f32) {
        let side = Mm::from(Pt(DOCUMENT_INCHES * POINTS_PER_INCH)).0;
        (side, side)
    }

    /// The last document rendered without a path.
    pub fn display(&self) -> Option<&[u8]> {
        self.display.as_deref()
    }
}

impl PlotSurface for PdfSurface {
    fn open(&mut self, base: Option<&str>) -> Result<Option<PathBuf>, DualRegulonError> {
        if self.is_open {
            return Err(DualRegulonError::Render(
                "previous document is still open".to_string(),
            ));
        }
        self.buffer.clear();
        self.is_open = true;
        self.is_drawn = false;
        self.target = base.map(|base| PathBuf::from(format!("{}.pdf", base)));
        Ok(self.target.clone())
    }

    fn draw(&mut self, plot: &PairPlot) -> Result<(), DualRegulonError> {
        if !self.is_open {
            return Err(DualRegulonError::Render("no open document".to_string()));
        }
        self.buffer = render_page(plot).map_err(|e| DualRegulonError::Render(e.to_string()))?;
        self.is_drawn = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DualRegulonError> {
        if !self.is_open {
            return Ok(());
        }
        self.is_open = false;
        let target = self.target.take();
        let document = std::mem::take(&mut self.buffer);
        if !self.is_drawn {
            return Ok(());
        }
        match target {
            Some(path) => std::fs::write(path, document)?,
            None => self.display = Some(document),
        }
        Ok(())
    }
}

/// Render the whole figure as a one-page PDF document.
fn render_page(plot: &PairPlot) -> Result<Vec<u8>, printpdf::Error> {
    let side = Mm::from(Pt(DOCUMENT_INCHES * POINTS_PER_INCH));
    let (document, page, layer) = PdfDocument::new(plot.legend.as_str(), side, side, "plot");
    let font = document.add_builtin_font(BuiltinFont::Helvetica)?;
    let layer = document.get_page(page).get_layer(layer);

    draw_axes(&layer, &font, plot);

    let radius = plot.marker_size as f32 * POINTS_PER_PIXEL;
    layer.set_outline_thickness(plot.line_width as f32);
    for series in &plot.series {
        layer.set_fill_color(opaque(series.fill));
        layer.set_outline_color(opaque(series.outline));
        for &(x, y) in &series.points {
            layer.add_polygon(Polygon {
                rings: vec![circle(scale_x(x), scale_y(y), radius)],
                mode: PaintMode::FillStroke,
                winding_order: WindingOrder::NonZero,
            });
        }
    }

    // Legend with the aggregate correlation, upper left corner.
    layer.set_fill_color(black());
    layer.use_text(
        plot.legend.as_str(),
        TITLE_SIZE,
        mm(LEFT + 6.0),
        mm(TOP - 6.0 - TITLE_SIZE),
        &font,
    );

    drop(layer);
    document.save_to_bytes()
}

fn draw_axes(layer: &PdfLayerReference, font: &IndirectFontRef, plot: &PairPlot) {
    layer.set_outline_color(black());
    layer.set_fill_color(black());
    layer.set_outline_thickness(0.75);
    layer.add_line(Line {
        points: vec![
            point(LEFT, BOTTOM),
            point(RIGHT, BOTTOM),
            point(RIGHT, TOP),
            point(LEFT, TOP),
        ],
        is_closed: true,
    });

    for tick in TICKS {
        let label = format!("{}", tick);
        let half_width = text_width(&label, LABEL_SIZE) / 2.0;
        let (x, y) = (scale_x(tick), scale_y(tick));
        layer.add_line(Line {
            points: vec![point(x, BOTTOM), point(x, BOTTOM - 3.0)],
            is_closed: false,
        });
        layer.use_text(
            label.as_str(),
            LABEL_SIZE,
            mm(x - half_width),
            mm(BOTTOM - 4.0 - LABEL_SIZE),
            font,
        );
        layer.add_line(Line {
            points: vec![point(LEFT, y), point(LEFT - 3.0, y)],
            is_closed: false,
        });
        layer.use_text(
            label.as_str(),
            LABEL_SIZE,
            mm(LEFT - 5.0 - 2.0 * half_width),
            mm(y - LABEL_SIZE / 3.0),
            font,
        );
    }

    let x_center = (LEFT + RIGHT) / 2.0 - text_width(&plot.x_title, TITLE_SIZE) / 2.0;
    layer.use_text(plot.x_title.as_str(), TITLE_SIZE, mm(x_center), mm(8.0), font);

    // The y title runs bottom to top along the left edge.
    let y_center = (BOTTOM + TOP) / 2.0 - text_width(&plot.y_title, TITLE_SIZE) / 2.0;
    layer.begin_text_section();
    layer.set_font(font, TITLE_SIZE);
    layer.set_text_matrix(TextMatrix::TranslateRotate(Pt(14.0), Pt(y_center), 90.0));
    layer.write_text(plot.y_title.as_str(), font);
    layer.end_text_section();
}

/// Approximate Helvetica text width in points.
fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

fn scale_x(value: f64) -> f32 {
    LEFT + ((value.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32 * (RIGHT - LEFT)
}

fn scale_y(value: f64) -> f32 {
    BOTTOM + ((value.clamp(-1.0, 1.0) + 1.0) / 2.0) as f32 * (TOP - BOTTOM)
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn point(x: f32, y: f32) -> (Point, bool) {
    (Point::new(mm(x), mm(y)), false)
}

fn circle(x: f32, y: f32, radius: f32) -> Vec<(Point, bool)> {
    (0..CIRCLE_STEPS)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / CIRCLE_STEPS as f32;
            point(x + radius * angle.cos(), y + radius * angle.sin())
        })
        .collect()
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn opaque(color: RgbaColor) -> Color {
    let [r, g, b] = over_white(color);
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// PDF colours carry no opacity here, translucent colours are composed over white.
fn over_white(color: RgbaColor) -> [f32; 3] {
    let alpha = color.alpha as f32;
    let channel = |value: u8| f32::from(value) / 255.0 * alpha + (1.0 - alpha);
    [channel(color.r), channel(color.g), channel(color.b)]
}

#[cfg(test)]
mod tests {
    use super::{over_white, scale_x, scale_y, LEFT, RIGHT, TOP};
    use crate::render::{render_pair, PdfSurface, PlotSurface};
    use crate::test_fixtures::build_dual_regulons;
    use crate::{DualPlotConfig, PairPlot, PairPlotOptions, RgbaColor, TargetProfile};

    fn build_plot() -> PairPlot {
        let merged = build_dual_regulons().merged_network().unwrap();
        let profile =
            TargetProfile::compute(&merged, ("TF1", "TF2"), &PairPlotOptions::default()).unwrap();
        PairPlot::new(&profile, -0.42, &DualPlotConfig::default())
    }

    #[test]
    fn page_is_three_inches_square() {
        let (width, height) = PdfSurface::new().page_size();
        assert!((width - 76.2).abs() < 0.01);
        assert_eq!(width, height);
    }

    #[test]
    fn pdf_document_is_written_on_close() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("TF1.vs.TF2");
        let base = base.to_str().unwrap();

        let mut surface = PdfSurface::new();
        let document = render_pair(&mut surface, &build_plot(), Some(base))
            .unwrap()
            .unwrap();
        assert_eq!(dir.path().join("TF1.vs.TF2.pdf"), document);

        let bytes = std::fs::read(&document).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(surface.display().is_none());
    }

    #[test]
    fn plots_without_path_go_to_display() {
        let mut surface = PdfSurface::new();
        assert_eq!(None, render_pair(&mut surface, &build_plot(), None).unwrap());
        assert!(surface.display().unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn draw_requires_open_document() {
        let mut surface = PdfSurface::new();
        assert!(surface.draw(&build_plot()).is_err());
        surface.open(None).unwrap();
        assert!(surface.open(None).is_err());
        surface.close().unwrap();
        assert!(surface.display().is_none());
    }

    #[test]
    fn axes_span_the_correlation_range() {
        assert_eq!(LEFT, scale_x(-1.0));
        assert_eq!(RIGHT, scale_x(1.0));
        assert_eq!(TOP, scale_y(1.0));
        assert_eq!(RIGHT, scale_x(3.0));
    }

    #[test]
    fn translucent_fills_are_composed_over_white() {
        let half_red = RgbaColor {
            r: 255,
            g: 0,
            b: 0,
            alpha: 0.5,
        };
        assert_eq!([1.0, 0.5, 0.5], over_white(half_red));
        assert_eq!([1.0, 1.0, 1.0], over_white(RgbaColor { alpha: 0.0, ..half_red }));
    }
}
