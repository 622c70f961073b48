//! Logging facilities for texbox.
//!
//! texbox uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` directives to
//! filter logs by subsystem, e.g. `RUST_LOG=texbox_font::cache=trace`.

/// Target names for log filtering.
pub mod targets {
    /// List packing target.
    pub const PACK: &str = "texbox_core::pack";
    /// Font backend target (metrics lookups, draw calls).
    pub const BACKEND: &str = "texbox_font::backend";
    /// Glyph metrics provider target (font loading, glyph queries).
    pub const PROVIDER: &str = "texbox_font::provider";
    /// Metrics cache target (hits and misses).
    pub const CACHE: &str = "texbox_font::cache";
}
