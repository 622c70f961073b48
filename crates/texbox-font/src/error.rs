//! Error types for the font crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading fonts or resolving glyph metrics.
///
/// None of these are recoverable for the symbol at hand: the font set is
/// fixed when the backend is constructed, so a failed lookup means the
/// configured font data cannot typeset the requested symbol.
#[derive(Error, Debug)]
pub enum FontError {
    /// A font file could not be read.
    #[error("could not read font file {path:?}: {source}")]
    Io {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Font data was rejected by the font parser.
    #[error("could not parse font for family {family:?}: {reason}")]
    Parse {
        /// The family tag the data was loaded for.
        family: String,
        /// Why the data was rejected.
        reason: String,
    },

    /// No backing font exists for the resolved family.
    #[error("could not find a font for family {family:?}")]
    MissingFamily {
        /// The resolved family tag.
        family: String,
    },

    /// The symbol is not a single character nor a known TeX symbol name.
    #[error("{symbol:?} is not a valid unicode character or TeX symbol")]
    UnknownSymbol {
        /// The symbol text as given.
        symbol: String,
    },

    /// The font has no glyph for the codepoint.
    #[error("font for family {family:?} has no glyph for {codepoint:?}")]
    GlyphNotFound {
        /// The family searched.
        family: String,
        /// The codepoint requested.
        codepoint: char,
    },

    /// The font could not provide a required piece of glyph data.
    #[error("font for family {family:?} has no {what} for glyph {glyph}")]
    MissingGlyphData {
        /// The family searched.
        family: String,
        /// The glyph index.
        glyph: u16,
        /// What was missing (`"advance"`, `"bounds"`, ...).
        what: &'static str,
    },

    /// A face handle did not refer to a loaded face.
    #[error("invalid font face handle {0}")]
    InvalidFace(usize),

    /// The configuration file could not be parsed.
    #[error("invalid font configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A metrics lookup failed for a symbol.
    #[error("could not resolve metrics for symbol {symbol:?} in style {style:?}: {source}")]
    Lookup {
        /// The unresolved symbol.
        symbol: String,
        /// The requested style (font type tag).
        style: String,
        /// The underlying failure.
        #[source]
        source: Box<FontError>,
    },
}

/// Result type for font operations.
pub type FontResult<T> = Result<T, FontError>;
