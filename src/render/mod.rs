//! Output of `PairPlot` figures.
//!
//! `PdfSurface` writes 3×3 inch `<base>.pdf` documents. `SvgSurface` renders the same
//! figure through plotters into `<base>.svg`.
//!
//! A `PlotSurface` is opened once per plot, drawn on, and closed again. Use
//! `render_pair` rather than calling the surface directly: it closes the surface
//! even when drawing fails, so no document is left half-written.

use crate::{DualRegulonError, PairPlot};
use std::path::PathBuf;
use tracing::info;

/// **(internal)** plotters drawing routine shared by all backends.
mod _impl_draw;
/// **(internal)** PDF documents written by printpdf.
mod _impl_pdf_surface;
/// **(internal)** SVG documents written by plotters.
mod _impl_svg_surface;

pub use _impl_pdf_surface::PdfSurface;
pub use _impl_svg_surface::SvgSurface;

/// Something a `PairPlot` can be drawn on.
pub trait PlotSurface {
    /// Start a new document. `base` is the document path without extension; with
    /// `None`, the plot goes to the display surface only.
    ///
    /// Returns the path of the document that will be written on `close`.
    fn open(&mut self, base: Option<&str>) -> Result<Option<PathBuf>, DualRegulonError>;

    fn draw(&mut self, plot: &PairPlot) -> Result<(), DualRegulonError>;

    /// Finish the current document. Must be safe to call after a failed `draw`.
    fn close(&mut self) -> Result<(), DualRegulonError>;
}

/// Draw one plot on `surface`, closing the document on every exit path.
///
/// When a document was written, a confirmation naming it is logged after the
/// document is closed.
pub fn render_pair<S: PlotSurface + ?Sized>(
    surface: &mut S,
    plot: &PairPlot,
    base: Option<&str>,
) -> Result<Option<PathBuf>, DualRegulonError> {
    let document = surface.open(base)?;
    let drawn = surface.draw(plot);
    let closed = surface.close();
    drawn?;
    closed?;
    if let Some(path) = &document {
        info!("File '{}' generated!", path.display());
    }
    Ok(document)
}
