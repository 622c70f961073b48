//! Font backend configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{FontError, FontResult};
use crate::font::family;

/// Where the data of one font family comes from.
#[derive(Clone)]
pub enum FontSource {
    /// A font file on disk.
    File {
        /// Path to a TTF, OTF, TTC or OTC file.
        path: PathBuf,
        /// Face index within a collection (0 for single-face files).
        index: u32,
    },
    /// Font data already in memory.
    Data {
        /// Raw font file contents.
        data: Arc<[u8]>,
        /// Face index within a collection.
        index: u32,
    },
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::File { path, index } => f
                .debug_struct("File")
                .field("path", path)
                .field("index", index)
                .finish(),
            FontSource::Data { data, index } => f
                .debug_struct("Data")
                .field("len", &data.len())
                .field("index", index)
                .finish(),
        }
    }
}

/// Configuration for constructing a font backend.
///
/// Maps family tags (`"rm"`, `"it"`, `"default"`, ...) to font sources.
/// The italic fallback rule resolves to `"rm"`, so configurations that
/// use italics should provide both.
///
/// # Example
///
/// ```
/// use texbox_font::BackendConfig;
///
/// let config = BackendConfig::from_toml_str(r#"
///     [families]
///     rm = "/usr/share/fonts/DejaVuSans.ttf"
///     it = { path = "/usr/share/fonts/DejaVuSans-Oblique.ttf", index = 0 }
/// "#).unwrap();
///
/// assert_eq!(config.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    families: BTreeMap<String, FontSource>,
}

impl BackendConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic DejaVu family table, with fonts looked up in `dir`.
    ///
    /// `default`, `regular` and `rm` map to `DejaVuSans.ttf`, `it` maps to
    /// `DejaVuSans-Oblique.ttf`.
    pub fn dejavu(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let sans = dir.join("DejaVuSans.ttf");
        Self::new()
            .font_file(family::DEFAULT, &sans)
            .font_file(family::REGULAR, &sans)
            .font_file(family::ROMAN, &sans)
            .font_file(family::ITALIC, dir.join("DejaVuSans-Oblique.ttf"))
    }

    /// Set the source of a family.
    #[must_use]
    pub fn family(mut self, tag: impl Into<String>, source: FontSource) -> Self {
        self.families.insert(tag.into(), source);
        self
    }

    /// Load a family from a font file.
    #[must_use]
    pub fn font_file(self, tag: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.family(
            tag,
            FontSource::File {
                path: path.into(),
                index: 0,
            },
        )
    }

    /// Load a family from in-memory font data.
    #[must_use]
    pub fn font_data(self, tag: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        self.family(
            tag,
            FontSource::Data {
                data: data.into(),
                index: 0,
            },
        )
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> FontResult<Self> {
        let file: ConfigFile = toml::from_str(s)?;
        let families = file
            .families
            .into_iter()
            .map(|(tag, entry)| {
                let source = match entry {
                    SourceEntry::Path(path) => FontSource::File { path, index: 0 },
                    SourceEntry::Detailed { path, index } => FontSource::File { path, index },
                };
                (tag, source)
            })
            .collect();
        Ok(Self { families })
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FontResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The configured families, in tag order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &FontSource)> {
        self.families.iter().map(|(tag, source)| (tag.as_str(), source))
    }

    /// The source of a family, if configured.
    pub fn source(&self, tag: &str) -> Option<&FontSource> {
        self.families.get(tag)
    }

    /// Number of configured families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether no family is configured.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    families: BTreeMap<String, SourceEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceEntry {
    Path(PathBuf),
    Detailed {
        path: PathBuf,
        #[serde(default)]
        index: u32,
    },
}
