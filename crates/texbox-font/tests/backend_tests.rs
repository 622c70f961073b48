//! Font backend tests against an in-memory glyph provider.
//!
//! Distances in the stub font are chosen so that at 16pt (1024 units per
//! em) every scaled value is exact.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use texbox_font::{
    Backend, DrawOp, FaceId, Font, FontBackend, FontError, FontResult, GlyphBounds, GlyphIndex,
    GlyphProvider,
};

const UNITS_PER_EM: u16 = 1024;
const SIZE: f64 = 16.0;
const DPI: f64 = 72.0;

struct StubGlyph {
    glyph: u16,
    advance: u16,
    bounds: GlyphBounds,
}

/// Three faces sharing one glyph table: "rm", "it" and the big-operator
/// face "ex". Every provider call is counted.
struct StubProvider {
    families: HashMap<&'static str, FaceId>,
    glyphs: HashMap<char, StubGlyph>,
    calls: AtomicUsize,
}

impl StubProvider {
    fn new() -> Self {
        let families = HashMap::from([("rm", FaceId(0)), ("it", FaceId(1)), ("ex", FaceId(2))]);
        let glyphs = [
            ('a', 1, 512, GlyphBounds::new(64, -64, 448, 512)),
            ('+', 2, 640, GlyphBounds::new(64, 0, 576, 512)),
            ('1', 3, 576, GlyphBounds::new(128, 0, 448, 704)),
            ('\u{222b}', 4, 512, GlyphBounds::new(0, -1024, 512, 1024)),
            ('x', 5, 512, GlyphBounds::new(0, 0, 512, 448)),
            ('\u{393}', 6, 640, GlyphBounds::new(0, 0, 640, 704)),
            ('\u{2212}', 7, 640, GlyphBounds::new(64, 256, 576, 320)),
            (' ', 8, 256, GlyphBounds::default()),
            ('\u{24b6}', 9, 768, GlyphBounds::new(0, -64, 768, 704)),
        ]
        .into_iter()
        .map(|(c, glyph, advance, bounds)| {
            (
                c,
                StubGlyph {
                    glyph,
                    advance,
                    bounds,
                },
            )
        })
        .collect();

        Self {
            families,
            glyphs,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn count(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn by_index(&self, glyph: GlyphIndex) -> FontResult<&StubGlyph> {
        self.glyphs
            .values()
            .find(|g| g.glyph == glyph.0)
            .ok_or(FontError::MissingGlyphData {
                family: "stub".into(),
                glyph: glyph.0,
                what: "outline table entry",
            })
    }
}

impl GlyphProvider for StubProvider {
    fn face(&self, family: &str) -> Option<FaceId> {
        self.count();
        self.families.get(family).copied()
    }

    fn units_per_em(&self, _face: FaceId) -> FontResult<u16> {
        self.count();
        Ok(UNITS_PER_EM)
    }

    fn postscript_name(&self, face: FaceId) -> FontResult<Option<String>> {
        self.count();
        let name = match face.0 {
            0 => "StubSans",
            1 => "StubSans-Oblique",
            _ => "Cmex10",
        };
        Ok(Some(name.to_string()))
    }

    fn glyph_index(&self, _face: FaceId, codepoint: char) -> FontResult<GlyphIndex> {
        self.count();
        self.glyphs
            .get(&codepoint)
            .map(|g| GlyphIndex(g.glyph))
            .ok_or(FontError::GlyphNotFound {
                family: "stub".into(),
                codepoint,
            })
    }

    fn glyph_name(&self, _face: FaceId, glyph: GlyphIndex) -> FontResult<Option<String>> {
        self.count();
        Ok(Some(format!("g{}", glyph.0)))
    }

    fn advance(&self, _face: FaceId, glyph: GlyphIndex) -> FontResult<u16> {
        self.count();
        Ok(self.by_index(glyph)?.advance)
    }

    fn bounds(&self, _face: FaceId, glyph: GlyphIndex) -> FontResult<GlyphBounds> {
        self.count();
        Ok(self.by_index(glyph)?.bounds)
    }

    fn kern(&self, _face: FaceId, left: GlyphIndex, right: GlyphIndex) -> FontResult<i16> {
        self.count();
        // Only the pair "ax" is kerned.
        Ok(if (left.0, right.0) == (1, 5) { -64 } else { 0 })
    }

    fn x_height(&self, face: FaceId) -> FontResult<Option<i16>> {
        self.count();
        Ok(if face.0 == 0 { Some(512) } else { None })
    }
}

fn backend() -> FontBackend<StubProvider> {
    FontBackend::with_provider(StubProvider::new())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn scales_font_units_to_points() {
    let backend = backend();
    let m = backend.metrics("a", &Font::roman(SIZE), DPI, false).unwrap();

    assert_eq!(m.advance, 8.0);
    assert_eq!(m.x_min, 1.0);
    assert_eq!(m.x_max, 7.0);
    assert_eq!(m.y_min, -1.0);
    assert_eq!(m.y_max, 8.0);
    assert_eq!(m.width, 6.0);
    assert_eq!(m.height, 9.0);
    assert_eq!(m.iceberg, 8.0);
    assert!(!m.slanted);
}

#[test]
fn blank_glyph_has_empty_ink() {
    let backend = backend();
    let m = backend.metrics(" ", &Font::roman(SIZE), DPI, false).unwrap();
    assert_eq!(m.advance, 4.0);
    assert_eq!((m.width, m.height, m.iceberg), (0.0, 0.0, 0.0));
}

#[test]
fn repeated_lookups_hit_the_cache() {
    let backend = backend();
    let font = Font::roman(SIZE);

    let first = backend.metrics("a", &font, DPI, false).unwrap();
    let calls = backend.provider().calls();
    assert!(calls > 0);

    let second = backend.metrics("a", &font, DPI, false).unwrap();
    assert_eq!(first, second);
    assert_eq!(backend.provider().calls(), calls);

    let stats = backend.cache_stats();
    assert_eq!((stats.entries, stats.hits, stats.misses), (1, 1, 1));

    // A different resolution is a different entry.
    backend.metrics("a", &font, 96.0, false).unwrap();
    assert_eq!(backend.cache_stats().entries, 2);
    assert!(backend.provider().calls() > calls);
}

#[test]
fn math_flag_is_not_part_of_the_cache_key() {
    let backend = backend();
    let font = Font::roman(SIZE);

    let math = backend.glyph_info("-", &font, DPI, true).unwrap();
    assert_eq!(math.codepoint, '\u{2212}');

    let text = backend.glyph_info("-", &font, DPI, false).unwrap();
    assert_eq!(text.codepoint, '\u{2212}');
    assert_eq!(backend.cache_stats().hits, 1);
}

#[test]
fn text_minus_is_a_hyphen() {
    let backend = backend();
    let err = backend
        .metrics("-", &Font::roman(SIZE), DPI, false)
        .unwrap_err();
    match err {
        FontError::Lookup { source, .. } => {
            assert!(matches!(*source, FontError::GlyphNotFound { codepoint: '-', .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn italic_falls_back_to_roman_for_non_letters() {
    let backend = backend();
    let italic = Font::italic(SIZE);

    for symbol in ["+", "1"] {
        let info = backend.glyph_info(symbol, &italic, DPI, true).unwrap();
        assert_eq!(info.family, "rm", "{symbol}");
        assert_eq!(info.face, FaceId(0));
        assert!(!info.metrics.slanted, "{symbol}");
    }

    let a = backend.glyph_info("a", &italic, DPI, true).unwrap();
    assert_eq!(a.family, "it");
    assert_eq!(a.face, FaceId(1));
    assert!(a.metrics.slanted);
}

#[test]
fn greek_capitals_are_letters() {
    let backend = backend();
    let gamma = backend
        .glyph_info(r"\Gamma", &Font::italic(SIZE), DPI, true)
        .unwrap();
    assert_eq!(gamma.codepoint, '\u{393}');
    assert_eq!(gamma.family, "it");
}

#[test]
fn circled_letters_are_set_upright() {
    let backend = backend();
    let info = backend
        .glyph_info("\u{24b6}", &Font::italic(SIZE), DPI, true)
        .unwrap();
    assert_eq!(info.family, "rm");
    assert!(!info.metrics.slanted);
}

#[test]
fn integrals_are_always_slanted() {
    let backend = backend();
    let m = backend
        .metrics(r"\int", &Font::roman(SIZE), DPI, true)
        .unwrap();
    assert!(m.slanted);
}

#[test]
fn big_operator_font_is_offset() {
    let backend = backend();
    let font = Font::new("regular", SIZE, "ex");
    let info = backend.glyph_info(r"\int", &font, DPI, true).unwrap();

    assert_eq!(info.postscript.as_deref(), Some("Cmex10"));
    assert_eq!(info.metrics.height, 32.0);
    let offset = 16.0 + SIZE / 3.0;
    assert_close(info.offset, offset);
    assert_close(info.metrics.y_min, -16.0 + offset);
    assert_close(info.metrics.y_max, 16.0 + offset);
    assert_close(info.metrics.iceberg, 16.0 + offset);

    // The offset grows with resolution.
    let hires = backend.glyph_info(r"\int", &font, 144.0, true).unwrap();
    assert_close(hires.offset, 16.0 + SIZE / 3.0 * 2.0);

    let upright = backend
        .glyph_info(r"\int", &Font::roman(SIZE), DPI, true)
        .unwrap();
    assert_eq!(upright.offset, 0.0);
}

#[test]
fn glyph_info_records_names() {
    let backend = backend();
    let info = backend
        .glyph_info("x", &Font::roman(SIZE), DPI, false)
        .unwrap();
    assert_eq!(info.glyph, GlyphIndex(5));
    assert_eq!(info.glyph_name.as_deref(), Some("g5"));
    assert_eq!(info.postscript.as_deref(), Some("StubSans"));
    assert_eq!(info.size, SIZE);
}

#[test]
fn unknown_symbol_names_symbol_and_style() {
    let backend = backend();
    let err = backend
        .metrics(r"\notasymbol", &Font::italic(SIZE), DPI, true)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("notasymbol"), "{message}");
    assert!(message.contains(r#""it""#), "{message}");
    match err {
        FontError::Lookup { source, .. } => {
            assert!(matches!(*source, FontError::UnknownSymbol { .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(backend.cache_stats().entries, 0);
}

#[test]
fn missing_family_is_an_error() {
    let backend = backend();
    let err = backend
        .metrics("a", &Font::new("regular", SIZE, "bf"), DPI, false)
        .unwrap_err();
    match err {
        FontError::Lookup { source, style, .. } => {
            assert_eq!(style, "bf");
            assert!(matches!(*source, FontError::MissingFamily { ref family } if family == "bf"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn underline_thickness_is_fixed_fraction_of_size() {
    let backend = backend();
    assert_eq!(backend.underline_thickness(&Font::roman(12.0), 72.0), 0.75);
    assert_eq!(backend.underline_thickness(&Font::roman(12.0), 144.0), 1.5);
    assert_eq!(backend.provider().calls(), 0);
}

#[test]
fn kerning_within_one_font() {
    let backend = backend();
    let font = Font::roman(SIZE);

    assert_eq!(backend.kern(&font, "a", &font, "x", DPI).unwrap(), -1.0);
    // The second symbol's glyph is used for the right side of the pair.
    assert_eq!(backend.kern(&font, "a", &font, "a", DPI).unwrap(), 0.0);
    assert_eq!(backend.kern(&font, "x", &font, "a", DPI).unwrap(), 0.0);
}

#[test]
fn no_kerning_across_fonts() {
    let backend = backend();
    let font = Font::roman(SIZE);

    let smaller = font.with_size(10.0);
    assert_eq!(backend.kern(&font, "a", &smaller, "x", DPI).unwrap(), 0.0);

    let mono = Font::new("mono", SIZE, "rm");
    assert_eq!(backend.kern(&font, "a", &mono, "x", DPI).unwrap(), 0.0);
    assert_eq!(backend.provider().calls(), 0);

    // Same name and size but different faces.
    let italic = Font::italic(SIZE);
    assert_eq!(backend.kern(&italic, "a", &font, "x", DPI).unwrap(), 0.0);
}

#[test]
fn x_height_from_font_or_glyph() {
    let backend = backend();
    assert_eq!(backend.x_height(&Font::roman(SIZE), DPI).unwrap(), 8.0);
    assert_eq!(backend.x_height(&Font::roman(SIZE), 144.0).unwrap(), 16.0);
    // The italic face has no recorded x-height.
    assert_eq!(backend.x_height(&Font::italic(SIZE), DPI).unwrap(), 7.0);

    let err = backend
        .x_height(&Font::new("regular", SIZE, "bf"), DPI)
        .unwrap_err();
    assert!(matches!(err, FontError::MissingFamily { .. }));
}

#[test]
fn draw_calls_are_recorded() {
    let backend = backend();
    let font = Font::roman(SIZE);

    backend.render_glyph(1.0, 2.0, &font, "a", DPI).unwrap();
    backend.render_rect_filled(0.0, 0.0, 10.0, 0.5);

    let ops = backend.canvas().take();
    assert_eq!(ops.len(), 2);
    match &ops[0] {
        DrawOp::Glyph { x, y, glyph } => {
            assert_eq!((*x, *y), (1.0, 2.0));
            assert_eq!(glyph.codepoint, 'a');
            assert_eq!(glyph.metrics.advance, 8.0);
        }
        other => panic!("unexpected op: {other:?}"),
    }
    assert_eq!(
        ops[1],
        DrawOp::RectFilled {
            x1: 0.0,
            y1: 0.0,
            x2: 10.0,
            y2: 0.5
        }
    );

    assert!(backend.render_glyph(0.0, 0.0, &font, r"\nope", DPI).is_err());
    assert!(backend.canvas().is_empty());
}

#[test]
fn concurrent_lookups_compute_once() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let backend = backend();
    let font = Font::italic(SIZE);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| backend.metrics("a", &font, DPI, true).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().advance, 8.0);
        }
    });

    let stats = backend.cache_stats();
    assert_eq!((stats.entries, stats.hits, stats.misses), (1, 7, 1));
}
