//! Glyph metrics records.

use crate::provider::{FaceId, GlyphIndex};

/// Device-space metrics of a glyph, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Advance distance of the glyph.
    pub advance: f64,
    /// Height of the ink rectangle.
    pub height: f64,
    /// Width of the ink rectangle.
    pub width: f64,
    /// Left edge of the ink rectangle.
    pub x_min: f64,
    /// Right edge of the ink rectangle.
    pub x_max: f64,
    /// Bottom edge of the ink rectangle (y grows upwards).
    pub y_min: f64,
    /// Top edge of the ink rectangle.
    pub y_max: f64,
    /// Distance from the baseline to the top of the glyph.
    /// This is TeX's definition of "height".
    pub iceberg: f64,
    /// Whether the renderer should shear the glyph.
    pub slanted: bool,
}

/// Everything the backend resolved for one (symbol, font, dpi) lookup.
///
/// This is what the metrics cache stores and what a renderer needs to draw
/// the glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphInfo {
    /// The backing face.
    pub face: FaceId,
    /// The resolved family tag, after style fallback.
    pub family: String,
    /// The resolved point size.
    pub size: f64,
    /// PostScript name of the backing face, if it has one.
    pub postscript: Option<String>,
    /// Device-space metrics.
    pub metrics: Metrics,
    /// Glyph name from the font's post table, if any.
    pub glyph_name: Option<String>,
    /// The resolved codepoint.
    pub codepoint: char,
    /// Glyph index within the face.
    pub glyph: GlyphIndex,
    /// Vertical baseline offset applied to the ink extrema.
    pub offset: f64,
}
