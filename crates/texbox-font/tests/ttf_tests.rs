//! Font backend tests against real TrueType data.
//!
//! `fonts/texbox-test.ttf` is generated by `fonts/build_fixture.py`, which
//! lists every metric asserted here. It has 1000 units per em, so at 10pt
//! one font unit is 0.01pt.

use std::path::PathBuf;

use texbox_font::{Backend, BackendConfig, Font, FontBackend, FontError};

const FIXTURE: &[u8] = include_bytes!("fonts/texbox-test.ttf");
const SIZE: f64 = 10.0;
const DPI: f64 = 72.0;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/texbox-test.ttf")
}

fn backend() -> FontBackend {
    let config = BackendConfig::new()
        .font_data("rm", FIXTURE.to_vec())
        .font_data("it", FIXTURE.to_vec());
    FontBackend::new(&config).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn scales_glyph_metrics() {
    let backend = backend();
    let m = backend.metrics("A", &Font::roman(SIZE), DPI, false).unwrap();

    assert_close(m.advance, 6.5);
    assert_close(m.x_min, 0.0);
    assert_close(m.x_max, 6.0);
    assert_close(m.y_min, 0.0);
    assert_close(m.y_max, 7.0);
    assert_close(m.width, 6.0);
    assert_close(m.height, 7.0);
    assert_close(m.iceberg, 7.0);
    assert!(!m.slanted);

    let a = backend.metrics("a", &Font::roman(20.0), DPI, false).unwrap();
    assert_close(a.advance, 10.4);
    assert_close(a.y_min, -0.2);
    assert_close(a.iceberg, 10.4);
}

#[test]
fn space_has_advance_but_no_ink() {
    let backend = backend();
    let m = backend.metrics(" ", &Font::roman(SIZE), DPI, false).unwrap();
    assert_close(m.advance, 2.5);
    assert_eq!((m.width, m.height, m.iceberg), (0.0, 0.0, 0.0));
}

#[test]
fn records_font_and_glyph_names() {
    let backend = backend();
    let info = backend.glyph_info("A", &Font::roman(SIZE), DPI, true).unwrap();
    assert_eq!(info.postscript.as_deref(), Some("TexboxTest-Regular"));
    assert_eq!(info.glyph_name.as_deref(), Some("A"));
    assert_eq!(info.offset, 0.0);

    let minus = backend.glyph_info("-", &Font::roman(SIZE), DPI, true).unwrap();
    assert_eq!(minus.codepoint, '\u{2212}');
    assert_eq!(minus.glyph_name.as_deref(), Some("uni2212"));
    assert_close(minus.metrics.advance, 6.0);
}

#[test]
fn text_hyphen_and_math_minus_differ() {
    let font = Font::roman(SIZE);
    let hyphen = backend().metrics("-", &font, DPI, false).unwrap();
    let minus = backend().metrics("-", &font, DPI, true).unwrap();
    assert_close(hyphen.advance, 3.4);
    assert_close(minus.advance, 6.0);
}

#[test]
fn italic_letters_use_the_italic_face() {
    let backend = backend();
    let a = backend.glyph_info("a", &Font::italic(SIZE), DPI, true).unwrap();
    assert_eq!(a.family, "it");
    assert!(a.metrics.slanted);

    let minus = backend.glyph_info("-", &Font::italic(SIZE), DPI, true).unwrap();
    assert_eq!(minus.family, "rm");
}

#[test]
fn kerns_from_the_kern_table() {
    let backend = backend();
    let font = Font::roman(SIZE);
    assert_close(backend.kern(&font, "A", &font, "V", DPI).unwrap(), -0.8);
    assert_close(backend.kern(&font, "V", &font, "A", DPI).unwrap(), -0.6);
    assert_eq!(backend.kern(&font, "A", &font, "x", DPI).unwrap(), 0.0);
}

#[test]
fn x_height_from_os2_table() {
    let backend = backend();
    assert_close(backend.x_height(&Font::roman(SIZE), DPI).unwrap(), 4.8);
    assert_close(backend.x_height(&Font::roman(SIZE), 144.0).unwrap(), 9.6);
}

#[test]
fn missing_glyph_is_reported() {
    let backend = backend();
    let err = backend.metrics("b", &Font::roman(SIZE), DPI, false).unwrap_err();
    match err {
        FontError::Lookup { source, .. } => {
            assert!(matches!(*source, FontError::GlyphNotFound { codepoint: 'b', .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn families_sharing_a_file_kern_together() {
    let path = fixture_path();
    let config = BackendConfig::new()
        .font_file("default", path.clone())
        .font_file("regular", path.clone())
        .font_file("rm", path.clone())
        .font_file("it", path);
    let backend = FontBackend::new(&config).unwrap();
    assert_eq!(backend.provider().face_count(), 1);

    let regular = Font::new("regular", SIZE, "regular");
    let roman = Font::roman(SIZE);
    assert_close(backend.kern(&regular, "A", &roman, "V", DPI).unwrap(), -0.8);
    assert_close(backend.kern(&Font::italic(SIZE), "A", &roman, "V", DPI).unwrap(), -0.8);
}
