//! Data model for outline reconstruction.
//!
//! Glyphs come in from an external layout extractor, are aggregated into
//! line [`Span`]s, tagged, and finally reduced to an [`OutlineDocument`].

mod glyph;
mod outline;
mod span;

pub use glyph::{Glyph, PageGlyphs};
pub use outline::{HeadingEntry, HeadingLevel, OutlineDocument};
pub use span::{BoundingBox, Span, Tag, TaggedSpan};
