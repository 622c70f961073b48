//! Font descriptors.

use std::hash::{Hash, Hasher};

/// Well-known font type tags.
pub mod family {
    /// The default family.
    pub const DEFAULT: &str = "default";
    /// The regular family (same face as roman in the classic table).
    pub const REGULAR: &str = "regular";
    /// The upright (roman) family.
    pub const ROMAN: &str = "rm";
    /// The italic family.
    pub const ITALIC: &str = "it";
}

/// A font descriptor: a name, a nominal point size and a type tag.
///
/// `Font` does not reference font data; the backend resolves its type tag
/// (`"rm"`, `"it"`, `"default"`, ...) to a loaded face. Descriptors are
/// plain values and compare by value, which makes them usable as cache keys.
///
/// # Example
///
/// ```
/// use texbox_font::Font;
///
/// let font = Font::italic(12.0);
/// assert_eq!(font.kind(), "it");
/// assert_eq!(font.with_size(10.0).size(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    size: f64,
    kind: String,
}

impl Font {
    /// Create a new font descriptor.
    pub fn new(name: impl Into<String>, size: f64, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            kind: kind.into(),
        }
    }

    /// An upright font of the given size.
    pub fn roman(size: f64) -> Self {
        Self::new(family::REGULAR, size, family::ROMAN)
    }

    /// An italic font of the given size.
    pub fn italic(size: f64) -> Self {
        Self::new(family::REGULAR, size, family::ITALIC)
    }

    /// The font name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The nominal size in points.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The type tag (`"rm"`, `"it"`, ...).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Whether the type tag requests italics.
    pub fn is_italic(&self) -> bool {
        self.kind == family::ITALIC
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f64) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different type tag.
    pub fn with_kind(&self, kind: impl Into<String>) -> Self {
        let mut font = self.clone();
        font.kind = kind.into();
        font
    }

    /// Whether two fonts share name and size, so that kerning between their
    /// glyphs is defined.
    pub fn same_face_and_size(&self, other: &Font) -> bool {
        self.name == other.name && self.size.to_bits() == other.size.to_bits()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size.to_bits() == other.size.to_bits()
            && self.kind == other.kind
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.to_bits().hash(state);
        self.kind.hash(state);
    }
}
