//! A recording render target.
//!
//! The backend does not rasterize anything itself. Draw calls are recorded
//! as [`DrawOp`]s on a [`Canvas`] for a renderer to replay.

use parking_lot::Mutex;

use crate::metrics::GlyphInfo;

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A glyph drawn with its reference point at `(x, y)`.
    Glyph {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
        /// The resolved glyph.
        glyph: GlyphInfo,
    },
    /// A filled rectangle from `(x1, y1)` to `(x2, y2)`.
    RectFilled {
        /// First corner, horizontal.
        x1: f64,
        /// First corner, vertical.
        y1: f64,
        /// Second corner, horizontal.
        x2: f64,
        /// Second corner, vertical.
        y2: f64,
    },
}

/// An ordered list of draw operations, shareable between threads.
#[derive(Debug, Default)]
pub struct Canvas {
    ops: Mutex<Vec<DrawOp>>,
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a glyph.
    pub fn render_glyph(&self, x: f64, y: f64, glyph: GlyphInfo) {
        self.ops.lock().push(DrawOp::Glyph { x, y, glyph });
    }

    /// Record a filled rectangle.
    pub fn render_rect_filled(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ops.lock().push(DrawOp::RectFilled { x1, y1, x2, y2 });
    }

    /// A copy of the recorded operations, in order.
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.lock().clone()
    }

    /// Remove and return the recorded operations.
    pub fn take(&self) -> Vec<DrawOp> {
        std::mem::take(&mut *self.ops.lock())
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard the recorded operations.
    pub fn clear(&self) {
        self.ops.lock().clear();
    }
}
