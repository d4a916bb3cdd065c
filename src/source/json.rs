//! JSON character dumps.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::GlyphSource;
use crate::error::{Error, Result};
use crate::model::PageGlyphs;

/// On-disk shape of a character dump.
///
/// Either an object with a `pages` array or a bare array of pages. Each
/// page lists its characters as `{text, x0, x1, top, bottom, fontname, size}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlyphDump {
    /// `{"pages": [...]}`
    Document {
        /// Pages of the document
        pages: Vec<PageGlyphs>,
    },
    /// `[...]`
    Pages(Vec<PageGlyphs>),
}

impl GlyphDump {
    /// Take the pages out of the dump.
    pub fn into_pages(self) -> Vec<PageGlyphs> {
        match self {
            GlyphDump::Document { pages } | GlyphDump::Pages(pages) => pages,
        }
    }
}

/// Reads character dumps written as JSON by a layout extractor.
#[derive(Debug, Clone, Default)]
pub struct JsonGlyphSource {
    _private: (),
}

impl JsonGlyphSource {
    /// Create a new JSON glyph source.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn parse(&self, bytes: &[u8]) -> std::result::Result<Vec<PageGlyphs>, serde_json::Error> {
        let dump: GlyphDump = serde_json::from_slice(bytes)?;
        Ok(dump.into_pages())
    }
}

impl GlyphSource for JsonGlyphSource {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn load(&self, path: &Path) -> Result<Vec<PageGlyphs>> {
        let bytes = fs::read(path)
            .map_err(|e| Error::DocumentUnreadable(format!("{}: {}", path.display(), e)))?;
        let pages = self
            .parse(&bytes)
            .map_err(|e| Error::DocumentUnreadable(format!("{}: {}", path.display(), e)))?;

        log::debug!("Loaded {} pages from {}", pages.len(), path.display());
        Ok(pages)
    }

    fn load_bytes(&self, bytes: &[u8]) -> Result<Vec<PageGlyphs>> {
        self.parse(bytes)
            .map_err(|e| Error::DocumentUnreadable(e.to_string()))
    }
}
