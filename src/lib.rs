//! # pdf-outline
//!
//! Reconstructs a document's title and heading outline from positioned,
//! styled glyphs, without relying on embedded bookmarks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outline::{extract_outline_from_file, render};
//!
//! fn main() -> pdf_outline::Result<()> {
//!     // A character dump written by a layout extractor
//!     let outline = extract_outline_from_file("report.chars.json")?;
//!
//!     let json = render::to_json(&outline, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Line aggregation**: glyphs grouped into lines by rounded top coordinate
//! - **Normalization**: letter-spaced text (`"T i t l e"`) joined back together
//! - **Body size**: the most common line size is taken as body text
//! - **Classification**: title / H1 / H2 / H3 / paragraph per line
//! - **Aggregation**: multi-line titles merged, headings emitted in order
//!
//! Every threshold lives in [`OutlineOptions`].

pub mod batch;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use batch::{extract_batch, BatchItem, BatchSummary};
pub use error::{Error, Result};
pub use model::{
    BoundingBox, Glyph, HeadingEntry, HeadingLevel, OutlineDocument, PageGlyphs, Span, Tag,
    TaggedSpan,
};
pub use parser::{Analysis, FontStatistics, OutlineExtractor, OutlineOptions};
pub use render::JsonFormat;
pub use source::{GlyphSource, JsonGlyphSource, SourceRegistry};

use std::path::Path;

/// Build the outline of a document from its pages of glyphs.
///
/// # Example
///
/// ```
/// use pdf_outline::{extract_outline, Glyph, PageGlyphs};
///
/// let mut page = PageGlyphs::with_width(1, 612.0);
/// page.push(Glyph::new("A", 300.0, 72.0, 312.0, 96.0, "Helvetica-Bold", 24.0));
/// let outline = extract_outline(&[page]);
/// assert_eq!(outline.title, "A");
/// ```
pub fn extract_outline(pages: &[PageGlyphs]) -> OutlineDocument {
    OutlineExtractor::new().extract(pages)
}

/// Build the outline of a document with custom options.
///
/// Fails only if the options are invalid.
///
/// # Example
///
/// ```
/// use pdf_outline::{extract_outline_with_options, OutlineOptions};
///
/// let options = OutlineOptions::new()
///     .with_near_top_threshold(100.0)
///     .with_heading_deltas(1.8, 1.2, 0.5);
/// let outline = extract_outline_with_options(&[], options).unwrap();
/// assert!(outline.is_empty());
/// ```
pub fn extract_outline_with_options(
    pages: &[PageGlyphs],
    options: OutlineOptions,
) -> Result<OutlineDocument> {
    Ok(OutlineExtractor::with_options(options)?.extract(pages))
}

/// Build the outline of a character dump on disk.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::extract_outline_from_file;
///
/// let outline = extract_outline_from_file("report.chars.json").unwrap();
/// println!("{}", outline.title);
/// ```
pub fn extract_outline_from_file<P: AsRef<Path>>(path: P) -> Result<OutlineDocument> {
    extract_outline_from_file_with_options(path, OutlineOptions::default())
}

/// Build the outline of a character dump on disk with custom options.
pub fn extract_outline_from_file_with_options<P: AsRef<Path>>(
    path: P,
    options: OutlineOptions,
) -> Result<OutlineDocument> {
    let extractor = OutlineExtractor::with_options(options)?;
    batch::extract_one(path.as_ref(), &SourceRegistry::with_defaults(), &extractor)
}

/// Build the outline of a JSON character dump held in memory.
pub fn extract_outline_from_bytes(data: &[u8]) -> Result<OutlineDocument> {
    let pages = JsonGlyphSource::new().load_bytes(data)?;
    Ok(extract_outline(&pages))
}
