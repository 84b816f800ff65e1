//! Content height measurement.
//!
//! Layout needs a pixel height for content-bearing widgets (labels). The
//! [`TextMeasurer`] seam keeps the engine independent of any rendering
//! surface: the stock [`HeuristicMeasurer`] estimates heights from wrapped
//! line counts, while platform measurers that need a live surface plug in
//! through [`Surface`] with guaranteed detach on every exit path.

use unicode_width::UnicodeWidthStr;

use crate::{
    error::{Error, Result},
    style::{StyleProp, StyleSheet, StyleValue},
};

/// Font attributes a measurer needs, extracted from a resolved base sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family stack.
    pub family: String,
    /// Font size in pixels.
    pub size: u32,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
}

impl FontSpec {
    /// Extract font attributes from a sheet, falling back to the wireframe
    /// defaults for anything unresolved.
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        let family = match sheet.get(StyleProp::FontFamily) {
            Some(StyleValue::Str(s)) => s.clone(),
            _ => "sans-serif".to_owned(),
        };
        let size = match sheet.get(StyleProp::FontSize) {
            Some(StyleValue::Px(v)) => *v,
            _ => 16,
        };
        let line_height = match sheet.get(StyleProp::LineHeight) {
            Some(StyleValue::Num(v)) => *v,
            Some(StyleValue::Px(v)) => *v as f64,
            _ => 1.5,
        };
        Self {
            family,
            size,
            line_height,
        }
    }
}

/// The text measurement collaborator consumed by the layout engine.
pub trait TextMeasurer {
    /// The pixel height of `text` rendered at `width` with `font`.
    fn measure_height(&self, text: &str, width: u32, font: &FontSpec) -> Result<u32>;
}

/// A deterministic measurer that estimates glyph advance as a fraction of
/// the font size and counts wrapped lines.
#[derive(Debug, Clone)]
pub struct HeuristicMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub glyph_width: f64,
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self { glyph_width: 0.5 }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure_height(&self, text: &str, width: u32, font: &FontSpec) -> Result<u32> {
        if width == 0 {
            return Err(Error::Measure("zero width measurement target".into()));
        }
        let advance = (font.size as f64 * self.glyph_width).max(1.0);
        let columns = ((width as f64 / advance).floor() as usize).max(1);
        let lines = if text.width() <= columns {
            1
        } else {
            textwrap::wrap(text, columns).len().max(1)
        };
        let line_px = (font.size as f64 * font.line_height).ceil() as u32;
        Ok(lines as u32 * line_px)
    }
}

/// A transient off-screen measurement surface.
///
/// The canvas handle is created per measurement and must be detached
/// afterwards; [`SurfaceMeasurer`] guarantees the detach even when the
/// measurement itself fails.
pub trait Surface {
    /// The per-measurement canvas handle.
    type Canvas;

    /// Create and attach a measurement canvas.
    fn attach(&self) -> Result<Self::Canvas>;

    /// Measure text on an attached canvas.
    fn measure(&self, canvas: &Self::Canvas, text: &str, width: u32, font: &FontSpec)
    -> Result<u32>;

    /// Detach and destroy the canvas.
    fn detach(&self, canvas: Self::Canvas);
}

/// Adapts a [`Surface`] into a [`TextMeasurer`] with scoped canvas
/// acquisition.
#[derive(Debug, Clone)]
pub struct SurfaceMeasurer<S> {
    surface: S,
}

impl<S: Surface> SurfaceMeasurer<S> {
    /// Wrap a surface.
    pub fn new(surface: S) -> Self {
        Self { surface }
    }
}

impl<S: Surface> TextMeasurer for SurfaceMeasurer<S> {
    fn measure_height(&self, text: &str, width: u32, font: &FontSpec) -> Result<u32> {
        let canvas = self.surface.attach()?;
        let canvas = scopeguard::guard(canvas, |canvas| self.surface.detach(canvas));
        self.surface.measure(&canvas, text, width, font)
    }
}
