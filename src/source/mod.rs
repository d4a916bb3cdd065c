//! Glyph sources: the boundary to external layout extractors.
//!
//! Turning a binary page-based document into positioned glyphs is the job
//! of an external extractor. A [`GlyphSource`] reads whatever that
//! extractor produced and hands back pages of glyphs. Sources are looked up
//! by file extension through a [`SourceRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use pdf_outline::source::SourceRegistry;
//! use std::path::Path;
//!
//! fn main() -> pdf_outline::Result<()> {
//!     let registry = SourceRegistry::with_defaults();
//!     let pages = registry.load(Path::new("report.chars.json"))?;
//!     println!("{} pages", pages.len());
//!     Ok(())
//! }
//! ```

mod json;

pub use json::{GlyphDump, JsonGlyphSource};

use crate::error::{Error, Result};
use crate::model::PageGlyphs;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for glyph sources.
///
/// Implementations must report any failure to produce glyphs as
/// [`Error::DocumentUnreadable`]. A document that loads but has no glyphs
/// is not a failure.
pub trait GlyphSource: Send + Sync {
    /// Get the supported file extensions for this source.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["json"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Load the pages of the document at `path`.
    fn load(&self, path: &Path) -> Result<Vec<PageGlyphs>>;

    /// Load the pages of a document held in memory.
    fn load_bytes(&self, bytes: &[u8]) -> Result<Vec<PageGlyphs>>;
}

/// Registry of glyph sources keyed by extension and name.
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn GlyphSource>>,
    by_name: HashMap<String, Arc<dyn GlyphSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the default sources (JSON glyph dumps).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JsonGlyphSource::new()));
        registry
    }

    /// Register a source for all its supported extensions.
    pub fn register(&mut self, source: Arc<dyn GlyphSource>) {
        for ext in source.supported_extensions() {
            self.sources.insert(ext.to_lowercase(), source.clone());
        }
        self.by_name.insert(source.name().to_lowercase(), source);
    }

    /// Get a source by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn GlyphSource>> {
        self.sources.get(&ext.to_lowercase()).cloned()
    }

    /// Get a source by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn GlyphSource>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.sources.contains_key(&ext.to_lowercase())
    }

    /// Check if a path has a supported extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.supports(ext))
    }

    /// Load a document with the source matching its extension.
    pub fn load(&self, path: &Path) -> Result<Vec<PageGlyphs>> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            Error::DocumentUnreadable(format!("{}: file has no extension", path.display()))
        })?;

        let source = self.get_by_extension(ext).ok_or_else(|| {
            Error::DocumentUnreadable(format!(
                "{}: no glyph source for extension: {}",
                path.display(),
                ext
            ))
        })?;

        source.load(path)
    }

    /// Load a document with a source chosen by name, whatever its extension.
    pub fn load_as(&self, path: &Path, name: &str) -> Result<Vec<PageGlyphs>> {
        let source = self.get_by_name(name).ok_or_else(|| {
            Error::InvalidOption(format!("unknown glyph source: {}", name))
        })?;
        source.load(path)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
