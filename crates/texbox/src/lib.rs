//! texbox - TeX-style box layout with TrueType font metrics.
//!
//! This is the umbrella crate that re-exports the box model and the font
//! backend, and bridges the two in [`layout`].
//!
//! # Example
//!
//! ```no_run
//! use texbox::prelude::*;
//!
//! fn main() -> Result<(), FontError> {
//!     let backend = FontBackend::new(&BackendConfig::dejavu("/usr/share/fonts/truetype/dejavu"))?;
//!     let font = Font::italic(12.0);
//!
//!     let x = texbox::layout::symbol_box(&backend, "x", &font, 72.0, true)?;
//!     let formula = Node::hcentered(vec![x, Node::kern(2.0)]);
//!     println!("{:?}", formula.dimensions());
//!     Ok(())
//! }
//! ```

pub use texbox_core::*;

pub mod layout;
pub mod prelude;

/// Font metrics backend.
pub mod font {
    pub use texbox_font::*;
}
