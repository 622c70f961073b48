//! Turning symbol metrics into box model leaves.

use texbox_core::logging::targets;
use texbox_core::{Dimensions, Node};
use texbox_font::{Backend, Font, FontResult, Metrics};
use tracing::trace;

/// The box a glyph occupies: its advance wide, its iceberg tall, and as
/// deep as its ink reaches below the baseline.
pub fn glyph_dimensions(metrics: &Metrics) -> Dimensions {
    Dimensions::new(metrics.advance, metrics.iceberg, -metrics.y_min)
}

/// A fixed box sized for one symbol.
pub fn symbol_box<B: Backend + ?Sized>(
    backend: &B,
    symbol: &str,
    font: &Font,
    dpi: f64,
    math: bool,
) -> FontResult<Node> {
    let metrics = backend.metrics(symbol, font, dpi, math)?;
    Ok(Node::fixed(glyph_dimensions(&metrics)))
}

/// A horizontal list of symbol boxes, kerned where the font kerns the pair.
///
/// # Example
///
/// ```no_run
/// use texbox::prelude::*;
/// use texbox::layout::text_hlist;
///
/// let backend = FontBackend::new(&BackendConfig::dejavu("/usr/share/fonts/truetype/dejavu"))?;
/// let word = text_hlist(&backend, &["A", "V"], &Font::roman(12.0), 72.0, false)?;
/// println!("{}", word.width());
/// # Ok::<(), FontError>(())
/// ```
pub fn text_hlist<B: Backend + ?Sized>(
    backend: &B,
    symbols: &[&str],
    font: &Font,
    dpi: f64,
    math: bool,
) -> FontResult<Node> {
    let mut children = Vec::with_capacity(symbols.len() * 2);
    let mut prev: Option<&str> = None;

    for &symbol in symbols {
        // Measure before kerning: kern lookups resolve in math mode and
        // would otherwise decide the cached glyph for `symbol`.
        let glyph = symbol_box(backend, symbol, font, dpi, math)?;
        if let Some(prev) = prev {
            let kern = backend.kern(font, prev, font, symbol, dpi)?;
            if kern != 0.0 {
                trace!(target: targets::BACKEND, prev, symbol, kern, "kerned pair");
                children.push(Node::kern(kern));
            }
        }
        children.push(glyph);
        prev = Some(symbol);
    }

    Ok(Node::hlist(children, false))
}
