//! Glyph metrics providers.
//!
//! A [`GlyphProvider`] answers the narrow set of questions the backend asks
//! about font data: which face backs a family, glyph indices, advances,
//! bounding boxes, kerning and names. All distances are in font units.
//! [`TtfProvider`] implements it on top of `ttf-parser`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use texbox_core::logging::targets;
use tracing::{debug, info};

use crate::config::{BackendConfig, FontSource};
use crate::error::{FontError, FontResult};

/// Handle of a loaded font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceId(pub usize);

/// Index of a glyph within a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GlyphIndex(pub u16);

/// Ink bounding box of a glyph, in font units (y grows upwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphBounds {
    /// Left edge.
    pub x_min: i16,
    /// Bottom edge.
    pub y_min: i16,
    /// Right edge.
    pub x_max: i16,
    /// Top edge.
    pub y_max: i16,
}

impl GlyphBounds {
    /// Create a new bounding box.
    pub const fn new(x_min: i16, y_min: i16, x_max: i16, y_max: i16) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

/// Source of per-glyph font data.
///
/// Implementations own a fixed table of faces, built once at construction.
/// Every query fails with a [`FontError`] if the face handle, codepoint or
/// glyph cannot be resolved.
pub trait GlyphProvider: Send + Sync {
    /// The face backing a family tag, if one was loaded.
    fn face(&self, family: &str) -> Option<FaceId>;

    /// Font units per em of a face.
    fn units_per_em(&self, face: FaceId) -> FontResult<u16>;

    /// PostScript name of a face.
    fn postscript_name(&self, face: FaceId) -> FontResult<Option<String>>;

    /// Glyph index of a codepoint.
    fn glyph_index(&self, face: FaceId, codepoint: char) -> FontResult<GlyphIndex>;

    /// Name of a glyph.
    fn glyph_name(&self, face: FaceId, glyph: GlyphIndex) -> FontResult<Option<String>>;

    /// Horizontal advance of a glyph.
    fn advance(&self, face: FaceId, glyph: GlyphIndex) -> FontResult<u16>;

    /// Ink bounding box of a glyph. Glyphs without outlines have empty bounds.
    fn bounds(&self, face: FaceId, glyph: GlyphIndex) -> FontResult<GlyphBounds>;

    /// Horizontal kerning between two glyphs; zero if the pair is not kerned.
    fn kern(&self, face: FaceId, left: GlyphIndex, right: GlyphIndex) -> FontResult<i16>;

    /// The x-height of a face, if the font records one.
    fn x_height(&self, face: FaceId) -> FontResult<Option<i16>>;
}

/// A face loaded into a [`TtfProvider`].
struct LoadedFace {
    family: String,
    data: Arc<[u8]>,
    index: u32,
}

/// A [`GlyphProvider`] backed by TrueType/OpenType data parsed with
/// `ttf-parser`.
///
/// Font data is validated when loaded and re-parsed on each query, which
/// is cheap since `ttf-parser` only reads the table directory up front.
/// The backend's metrics cache keeps queries to once per glyph.
pub struct TtfProvider {
    faces: Vec<LoadedFace>,
    families: HashMap<String, FaceId>,
}

impl TtfProvider {
    /// Load every family of a configuration.
    ///
    /// Families naming the same face of the same file share one [`FaceId`],
    /// so kerning works across them. Any unreadable or unparseable font
    /// aborts loading.
    pub fn from_config(config: &BackendConfig) -> FontResult<Self> {
        let mut provider = Self {
            faces: Vec::new(),
            families: HashMap::new(),
        };
        let mut files: HashMap<PathBuf, Arc<[u8]>> = HashMap::new();
        let mut file_faces: HashMap<(PathBuf, u32), FaceId> = HashMap::new();

        for (family, source) in config.families() {
            match source {
                FontSource::File { path, index } => {
                    let key = (path.clone(), *index);
                    if let Some(&id) = file_faces.get(&key) {
                        provider.alias(family, id)?;
                        continue;
                    }
                    let data = match files.get(path) {
                        Some(data) => Arc::clone(data),
                        None => {
                            let bytes = std::fs::read(path).map_err(|source| FontError::Io {
                                path: path.clone(),
                                source,
                            })?;
                            let data: Arc<[u8]> = Arc::from(bytes);
                            files.insert(path.clone(), Arc::clone(&data));
                            data
                        }
                    };
                    let id = provider.load(family, data, *index)?;
                    file_faces.insert(key, id);
                }
                FontSource::Data { data, index } => {
                    provider.load(family, Arc::clone(data), *index)?;
                }
            }
        }

        Ok(provider)
    }

    /// Load font data for a family, replacing any face it had.
    pub fn load(&mut self, family: &str, data: Arc<[u8]>, index: u32) -> FontResult<FaceId> {
        let face = ttf_parser::Face::parse(&data, index).map_err(|e| FontError::Parse {
            family: family.to_string(),
            reason: e.to_string(),
        })?;
        info!(
            target: targets::PROVIDER,
            family,
            glyphs = face.number_of_glyphs(),
            units_per_em = face.units_per_em(),
            "loaded font"
        );

        let id = FaceId(self.faces.len());
        self.faces.push(LoadedFace {
            family: family.to_string(),
            data,
            index,
        });
        self.families.insert(family.to_string(), id);
        Ok(id)
    }

    /// Map a family to an already loaded face.
    pub fn alias(&mut self, family: &str, face: FaceId) -> FontResult<()> {
        let loaded = self.faces.get(face.0).ok_or(FontError::InvalidFace(face.0))?;
        debug!(target: targets::PROVIDER, family, face = %loaded.family, "sharing loaded face");
        self.families.insert(family.to_string(), face);
        Ok(())
    }

    /// Number of loaded faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Family tags with a loaded face, sorted.
    pub fn family_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.families.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn with_face<T>(
        &self,
        face: FaceId,
        f: impl FnOnce(&str, &ttf_parser::Face<'_>) -> FontResult<T>,
    ) -> FontResult<T> {
        let loaded = self.faces.get(face.0).ok_or(FontError::InvalidFace(face.0))?;
        let parsed =
            ttf_parser::Face::parse(&loaded.data, loaded.index).map_err(|e| FontError::Parse {
                family: loaded.family.clone(),
                reason: e.to_string(),
            })?;
        f(&loaded.family, &parsed)
    }

    fn check_glyph(family: &str, face: &ttf_parser::Face<'_>, glyph: GlyphIndex) -> FontResult<()> {
        if glyph.0 < face.number_of_glyphs() {
            Ok(())
        } else {
            Err(FontError::MissingGlyphData {
                family: family.to_string(),
                glyph: glyph.0,
                what: "outline table entry",
            })
        }
    }
}

impl GlyphProvider for TtfProvider {
    fn face(&self, family: &str) -> Option<FaceId> {
        self.families.get(family).copied()
    }

    fn units_per_em(&self, face: FaceId) -> FontResult<u16> {
        self.with_face(face, |_, f| Ok(f.units_per_em()))
    }

    fn postscript_name(&self, face: FaceId) -> FontResult<Option<String>> {
        self.with_face(face, |_, f| {
            Ok(f.names()
                .into_iter()
                .filter(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
                .find_map(|name| name.to_string()))
        })
    }

    fn glyph_index(&self, face: FaceId, codepoint: char) -> FontResult<GlyphIndex> {
        self.with_face(face, |family, f| {
            let glyph = f
                .glyph_index(codepoint)
                .ok_or_else(|| FontError::GlyphNotFound {
                    family: family.to_string(),
                    codepoint,
                })?;
            debug!(target: targets::PROVIDER, family, ?codepoint, glyph = glyph.0, "glyph index");
            Ok(GlyphIndex(glyph.0))
        })
    }

    fn glyph_name(&self, face: FaceId, glyph: GlyphIndex) -> FontResult<Option<String>> {
        self.with_face(face, |family, f| {
            Self::check_glyph(family, f, glyph)?;
            Ok(f.glyph_name(ttf_parser::GlyphId(glyph.0)).map(str::to_string))
        })
    }

    fn advance(&self, face: FaceId, glyph: GlyphIndex) -> FontResult<u16> {
        self.with_face(face, |family, f| {
            f.glyph_hor_advance(ttf_parser::GlyphId(glyph.0))
                .ok_or_else(|| FontError::MissingGlyphData {
                    family: family.to_string(),
                    glyph: glyph.0,
                    what: "advance",
                })
        })
    }

    fn bounds(&self, face: FaceId, glyph: GlyphIndex) -> FontResult<GlyphBounds> {
        self.with_face(face, |family, f| {
            Self::check_glyph(family, f, glyph)?;
            // Blank glyphs such as the space have no outline.
            Ok(f.glyph_bounding_box(ttf_parser::GlyphId(glyph.0))
                .map(|r| GlyphBounds::new(r.x_min, r.y_min, r.x_max, r.y_max))
                .unwrap_or_default())
        })
    }

    fn kern(&self, face: FaceId, left: GlyphIndex, right: GlyphIndex) -> FontResult<i16> {
        self.with_face(face, |_, f| {
            let Some(kern) = f.tables().kern.as_ref() else {
                return Ok(0);
            };
            let value = kern
                .subtables
                .into_iter()
                .filter(|st| st.horizontal && !st.variable)
                .find_map(|st| {
                    st.glyphs_kerning(ttf_parser::GlyphId(left.0), ttf_parser::GlyphId(right.0))
                })
                .unwrap_or(0);
            Ok(value)
        })
    }

    fn x_height(&self, face: FaceId) -> FontResult<Option<i16>> {
        self.with_face(face, |_, f| Ok(f.x_height()))
    }
}

impl std::fmt::Debug for TtfProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfProvider")
            .field("families", &self.family_names())
            .finish()
    }
}
