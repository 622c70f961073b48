//! Prelude module for texbox.
//!
//! ```ignore
//! use texbox::prelude::*;
//! ```

// ============================================================================
// Box Model
// ============================================================================

pub use texbox_core::{Dimensions, GlueKind, GlueSpec, Node, PackMode, hpack, vpack};

// ============================================================================
// Fonts
// ============================================================================

pub use texbox_font::{
    Backend, BackendConfig, Font, FontBackend, FontError, FontResult, GlyphProvider, Metrics,
};
