use crate::render::_impl_draw::draw_pair_plot;
use crate::render::PlotSurface;
use crate::{DualRegulonError, PairPlot};
use plotters::prelude::*;
use std::path::PathBuf;

/// Physical size of one document, in inches.
const DOCUMENT_INCHES: f64 = 3.0;
const PIXELS_PER_INCH: f64 = 96.0;

/// A `PlotSurface` producing SVG documents.
///
/// Plots are rendered in memory and written to `<base>.svg` when the surface is
/// closed. A plot opened without a path ends up on the display instead (see
/// `SvgSurface::display`).
#[derive(Clone, Debug)]
pub struct SvgSurface {
    size: (u32, u32),
    target: Option<PathBuf>,
    buffer: String,
    is_open: bool,
    is_drawn: bool,
    display: Option<String>,
}

impl Default for SvgSurface {
    fn default() -> Self {
        let side = (DOCUMENT_INCHES * PIXELS_PER_INCH).round() as u32;
        SvgSurface::with_size(side, side)
    }
}

impl SvgSurface {
    /// A surface producing 3×3 inch documents.
    pub fn new() -> SvgSurface {
        SvgSurface::default()
    }

    /// A surface producing documents of the given size in pixels.
    pub fn with_size(width: u32, height: u32) -> SvgSurface {
        SvgSurface {
            size: (width, height),
            target: None,
            buffer: String::new(),
            is_open: false,
            is_drawn: false,
            display: None,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// The last plot rendered without a document path.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

impl PlotSurface for SvgSurface {
    fn open(&mut self, base: Option<&str>) -> Result<Option<PathBuf>, DualRegulonError> {
        if self.is_open {
            return Err(DualRegulonError::Render(
                "previous document is still open".to_string(),
            ));
        }
        self.buffer.clear();
        self.is_open = true;
        self.is_drawn = false;
        self.target = base.map(|base| PathBuf::from(format!("{}.svg", base)));
        Ok(self.target.clone())
    }

    fn draw(&mut self, plot: &PairPlot) -> Result<(), DualRegulonError> {
        if !self.is_open {
            return Err(DualRegulonError::Render("no open document".to_string()));
        }
        let size = self.size;
        self.buffer.clear();
        {
            let root = SVGBackend::with_string(&mut self.buffer, size).into_drawing_area();
            draw_pair_plot(&root, plot).map_err(|e| DualRegulonError::Render(e.to_string()))?;
            root.present()
                .map_err(|e| DualRegulonError::Render(e.to_string()))?;
        }
        self.is_drawn = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DualRegulonError> {
        if !self.is_open {
            return Ok(());
        }
        self.is_open = false;
        let target = self.target.take();
        let svg = std::mem::take(&mut self.buffer);
        if !self.is_drawn {
            return Ok(());
        }
        match target {
            Some(path) => std::fs::write(path, svg)?,
            None => self.display = Some(svg),
        }
        Ok(())
    }
}
