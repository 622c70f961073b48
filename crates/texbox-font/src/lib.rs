//! Font metrics backend for texbox.
//!
//! This crate measures symbols for the box model. It maps TeX symbol names
//! to Unicode codepoints, loads TrueType/OpenType fonts with `ttf-parser`,
//! and computes device-space glyph metrics, memoized per
//! (symbol, font, resolution).
//!
//! - **Fonts**: [`Font`] descriptors and the [`BackendConfig`] family table
//! - **Symbols**: the TeX symbol resolver in [`symbols`]
//! - **Providers**: the [`GlyphProvider`] seam and its [`TtfProvider`]
//! - **Backend**: [`FontBackend`], implementing [`Backend`]
//!
//! # Example
//!
//! ```no_run
//! use texbox_font::{Backend, BackendConfig, Font, FontBackend};
//!
//! let config = BackendConfig::from_toml_file("fonts.toml")?;
//! let backend = FontBackend::new(&config)?;
//!
//! let font = Font::roman(12.0);
//! let plus = backend.metrics("+", &font, 72.0, true)?;
//! let rule = backend.underline_thickness(&font, 72.0);
//! println!("advance {} rule {}", plus.advance, rule);
//! # Ok::<(), texbox_font::FontError>(())
//! ```

mod backend;
mod cache;
mod canvas;
mod config;
mod error;
mod font;
mod metrics;
mod provider;
pub mod symbols;

pub use backend::{Backend, FontBackend};
pub use cache::{CacheStats, GlyphKey, MetricsCache};
pub use canvas::{Canvas, DrawOp};
pub use config::{BackendConfig, FontSource};
pub use error::{FontError, FontResult};
pub use font::{Font, family};
pub use metrics::{GlyphInfo, Metrics};
pub use provider::{FaceId, GlyphBounds, GlyphIndex, GlyphProvider, TtfProvider};
