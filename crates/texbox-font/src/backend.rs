//! The font backend.
//!
//! [`FontBackend`] turns a (symbol, font, resolution) request into device
//! space [`Metrics`]. It resolves the symbol to a codepoint, picks the
//! backing face for the font's type tag (with the italic fallback rule),
//! asks a [`GlyphProvider`] for font-unit data and scales it. Results are
//! memoized in a [`MetricsCache`] owned by the backend.

use std::sync::Arc;

use texbox_core::logging::targets;
use tracing::debug;

use crate::cache::{CacheStats, GlyphKey, MetricsCache};
use crate::canvas::Canvas;
use crate::config::BackendConfig;
use crate::error::{FontError, FontResult};
use crate::font::{Font, family};
use crate::metrics::{GlyphInfo, Metrics};
use crate::provider::{GlyphProvider, TtfProvider};
use crate::symbols;

/// PostScript name of the big-operator extension font, whose glyphs are
/// shifted to sit around the math axis.
const CMEX_POSTSCRIPT_NAME: &str = "Cmex10";

/// Rendering and measuring primitives used by the layout engine.
pub trait Backend {
    /// Draw a symbol with its reference point at `(x, y)`.
    fn render_glyph(&self, x: f64, y: f64, font: &Font, symbol: &str, dpi: f64)
    -> FontResult<()>;

    /// Draw a filled rectangle from `(x1, y1)` to `(x2, y2)`.
    fn render_rect_filled(&self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Metrics of a symbol.
    fn metrics(&self, symbol: &str, font: &Font, dpi: f64, math: bool) -> FontResult<Metrics>;

    /// The x-height of a font at `dpi`.
    fn x_height(&self, font: &Font, dpi: f64) -> FontResult<f64>;

    /// The line thickness matching `font`, used for fraction bars and
    /// radicals.
    fn underline_thickness(&self, font: &Font, dpi: f64) -> f64;

    /// Kerning between two adjacent symbols.
    fn kern(&self, font1: &Font, sym1: &str, font2: &Font, sym2: &str, dpi: f64)
    -> FontResult<f64>;
}

/// A [`Backend`] measuring glyphs through a [`GlyphProvider`].
///
/// The font table is fixed at construction. Lookups are memoized per
/// (symbol, font, dpi) and may run concurrently from several threads.
///
/// # Example
///
/// ```no_run
/// use texbox_font::{Backend, BackendConfig, Font, FontBackend};
///
/// let backend = FontBackend::new(&BackendConfig::dejavu("/usr/share/fonts/truetype/dejavu"))?;
/// let metrics = backend.metrics(r"\alpha", &Font::italic(12.0), 72.0, true)?;
/// assert!(metrics.slanted);
/// # Ok::<(), texbox_font::FontError>(())
/// ```
pub struct FontBackend<P: GlyphProvider = TtfProvider> {
    provider: P,
    cache: MetricsCache,
    canvas: Canvas,
}

impl FontBackend<TtfProvider> {
    /// Load the fonts of a configuration.
    pub fn new(config: &BackendConfig) -> FontResult<Self> {
        Ok(Self::with_provider(TtfProvider::from_config(config)?))
    }
}

impl<P: GlyphProvider> FontBackend<P> {
    /// Create a backend over an existing provider.
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            cache: MetricsCache::new(),
            canvas: Canvas::new(),
        }
    }

    /// The underlying glyph provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The draw operations recorded so far.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Statistics of the metrics cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Everything resolved for a symbol, computed once per
    /// (symbol, font, dpi).
    ///
    /// Failures are reported as [`FontError::Lookup`] naming the symbol and
    /// the requested style.
    pub fn glyph_info(
        &self,
        symbol: &str,
        font: &Font,
        dpi: f64,
        math: bool,
    ) -> FontResult<Arc<GlyphInfo>> {
        let key = GlyphKey::new(symbol, font.clone(), dpi);
        self.cache
            .get_or_try_insert_with(key, || self.resolve(symbol, font, dpi, math))
            .map_err(|source| FontError::Lookup {
                symbol: symbol.to_string(),
                style: font.kind().to_string(),
                source: Box::new(source),
            })
    }

    fn resolve(&self, symbol: &str, font: &Font, dpi: f64, math: bool) -> FontResult<GlyphInfo> {
        let codepoint = symbols::unicode_index(symbol, math)?;

        // Only letters are italicized; everything else in the BMP is set
        // upright.
        let mut kind = font.kind();
        if kind == family::ITALIC && u32::from(codepoint) < 0x10000 && !symbols::is_letter(codepoint)
        {
            kind = family::ROMAN;
        }
        let slanted = kind == family::ITALIC || symbols::is_slanted(symbol);

        let face = self
            .provider
            .face(kind)
            .ok_or_else(|| FontError::MissingFamily {
                family: kind.to_string(),
            })?;
        let units_per_em = self.provider.units_per_em(face)?;
        if units_per_em == 0 {
            return Err(FontError::Parse {
                family: kind.to_string(),
                reason: "units per em is zero".to_string(),
            });
        }
        let postscript = self.provider.postscript_name(face)?;
        let glyph = self.provider.glyph_index(face, codepoint)?;
        let glyph_name = self.provider.glyph_name(face, glyph)?;
        let advance = self.provider.advance(face, glyph)?;
        let bounds = self.provider.bounds(face, glyph)?;

        let size = font.size();
        let scale = size / f64::from(units_per_em);
        let x_min = f64::from(bounds.x_min) * scale;
        let x_max = f64::from(bounds.x_max) * scale;
        let y_min = f64::from(bounds.y_min) * scale;
        let y_max = f64::from(bounds.y_max) * scale;
        let width = x_max - x_min;
        let height = y_max - y_min;

        let offset = if postscript.as_deref() == Some(CMEX_POSTSCRIPT_NAME) {
            height / 2.0 + size / 3.0 * dpi / 72.0
        } else {
            0.0
        };

        debug!(
            target: targets::BACKEND,
            symbol,
            ?codepoint,
            family = kind,
            glyph = glyph.0,
            slanted,
            "resolved glyph"
        );

        Ok(GlyphInfo {
            face,
            family: kind.to_string(),
            size,
            postscript,
            metrics: Metrics {
                advance: f64::from(advance) * scale,
                height,
                width,
                x_min,
                x_max,
                y_min: y_min + offset,
                y_max: y_max + offset,
                iceberg: y_max + offset,
                slanted,
            },
            glyph_name,
            codepoint,
            glyph,
            offset,
        })
    }
}

impl<P: GlyphProvider> Backend for FontBackend<P> {
    fn render_glyph(
        &self,
        x: f64,
        y: f64,
        font: &Font,
        symbol: &str,
        dpi: f64,
    ) -> FontResult<()> {
        let info = self.glyph_info(symbol, font, dpi, true)?;
        self.canvas.render_glyph(x, y, GlyphInfo::clone(&info));
        Ok(())
    }

    fn render_rect_filled(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.canvas.render_rect_filled(x1, y1, x2, y2);
    }

    fn metrics(&self, symbol: &str, font: &Font, dpi: f64, math: bool) -> FontResult<Metrics> {
        Ok(self.glyph_info(symbol, font, dpi, math)?.metrics)
    }

    fn x_height(&self, font: &Font, dpi: f64) -> FontResult<f64> {
        let kind = font.kind();
        let face = self
            .provider
            .face(kind)
            .ok_or_else(|| FontError::MissingFamily {
                family: kind.to_string(),
            })?;
        let units_per_em = self.provider.units_per_em(face)?;
        if units_per_em == 0 {
            return Err(FontError::Parse {
                family: kind.to_string(),
                reason: "units per em is zero".to_string(),
            });
        }

        let x_height = match self.provider.x_height(face)? {
            Some(h) => h,
            None => {
                let glyph = self.provider.glyph_index(face, 'x')?;
                self.provider.bounds(face, glyph)?.y_max
            }
        };
        Ok(f64::from(x_height) * font.size() * dpi / 72.0 / f64::from(units_per_em))
    }

    fn underline_thickness(&self, font: &Font, dpi: f64) -> f64 {
        // Fonts' own underline metrics are too unreliable to use.
        (0.75 / 12.0 * font.size() * dpi) / 72.0
    }

    fn kern(
        &self,
        font1: &Font,
        sym1: &str,
        font2: &Font,
        sym2: &str,
        dpi: f64,
    ) -> FontResult<f64> {
        if !font1.same_face_and_size(font2) {
            return Ok(0.0);
        }

        let left = self.glyph_info(sym1, font1, dpi, true)?;
        let right = self.glyph_info(sym2, font2, dpi, true)?;
        if left.face != right.face {
            return Ok(0.0);
        }

        let units_per_em = self.provider.units_per_em(left.face)?;
        let kern = self.provider.kern(left.face, left.glyph, right.glyph)?;
        if kern == 0 || units_per_em == 0 {
            return Ok(0.0);
        }
        Ok(f64::from(kern) * font1.size() / f64::from(units_per_em))
    }
}

impl<P: GlyphProvider + std::fmt::Debug> std::fmt::Debug for FontBackend<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBackend")
            .field("provider", &self.provider)
            .field("cache", &self.cache)
            .field("canvas_ops", &self.canvas.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(FontBackend<TtfProvider>: Send, Sync);
