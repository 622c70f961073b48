//! Glue kinds and their stretch/shrink specifications.

use std::fmt;
use std::str::FromStr;

/// The kind of a glue node.
///
/// Glue has a natural size of zero. Its kind only matters to a
/// stretch-resolution pass, which texbox does not perform; the kind is
/// retained on the node so such a pass can be layered on later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlueKind {
    /// No stretch and no shrink.
    #[default]
    Empty,
    /// Finite stretch/shrink, as used between words and for centering.
    Ss,
    /// First-order infinite stretch.
    Fil,
    /// Second-order infinite stretch.
    Fill,
    /// Third-order infinite stretch.
    Filll,
    /// First-order infinite shrink.
    NegFil,
    /// Second-order infinite shrink.
    NegFill,
    /// Third-order infinite shrink.
    NegFilll,
}

impl GlueKind {
    /// All glue kinds, in declaration order.
    pub const ALL: [GlueKind; 8] = [
        GlueKind::Empty,
        GlueKind::Ss,
        GlueKind::Fil,
        GlueKind::Fill,
        GlueKind::Filll,
        GlueKind::NegFil,
        GlueKind::NegFill,
        GlueKind::NegFilll,
    ];

    /// The TeX name of this kind (`"fil"`, `"neg_fill"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            GlueKind::Empty => "empty",
            GlueKind::Ss => "ss",
            GlueKind::Fil => "fil",
            GlueKind::Fill => "fill",
            GlueKind::Filll => "filll",
            GlueKind::NegFil => "neg_fil",
            GlueKind::NegFill => "neg_fill",
            GlueKind::NegFilll => "neg_filll",
        }
    }

    /// The glue specification for this kind.
    pub fn spec(self) -> GlueSpec {
        match self {
            GlueKind::Empty => GlueSpec::new(0.0, 0.0, 0, 0.0, 0),
            GlueKind::Ss => GlueSpec::new(0.0, 1.0, 1, -1.0, 1),
            GlueKind::Fil => GlueSpec::new(0.0, 1.0, 1, 0.0, 0),
            GlueKind::Fill => GlueSpec::new(0.0, 1.0, 2, 0.0, 0),
            GlueKind::Filll => GlueSpec::new(0.0, 1.0, 3, 0.0, 0),
            GlueKind::NegFil => GlueSpec::new(0.0, 0.0, 0, 1.0, 1),
            GlueKind::NegFill => GlueSpec::new(0.0, 0.0, 0, 1.0, 2),
            GlueKind::NegFilll => GlueSpec::new(0.0, 0.0, 0, 1.0, 3),
        }
    }
}

impl fmt::Display for GlueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown glue name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGlueError(String);

impl fmt::Display for ParseGlueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown glue kind: {:?}", self.0)
    }
}

impl std::error::Error for ParseGlueError {}

impl FromStr for GlueKind {
    type Err = ParseGlueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlueKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseGlueError(s.to_string()))
    }
}

/// A TeX glue specification.
///
/// Orders are 0 for finite amounts and 1 through 3 for `fil`, `fill`
/// and `filll`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlueSpec {
    /// Natural width.
    pub width: f64,
    /// Stretch amount.
    pub stretch: f64,
    /// Order of infinity of the stretch.
    pub stretch_order: u8,
    /// Shrink amount.
    pub shrink: f64,
    /// Order of infinity of the shrink.
    pub shrink_order: u8,
}

impl GlueSpec {
    /// Create a new glue specification.
    pub const fn new(
        width: f64,
        stretch: f64,
        stretch_order: u8,
        shrink: f64,
        shrink_order: u8,
    ) -> Self {
        Self {
            width,
            stretch,
            stretch_order,
            shrink,
            shrink_order,
        }
    }
}
