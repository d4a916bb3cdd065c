//! Glyph-level input types produced by an external layout extractor.

use serde::{Deserialize, Serialize};

/// A single positioned character on a page.
///
/// Coordinates use a top-left origin: `top` grows downward, as in most
/// character dumps produced by layout extractors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The character (occasionally a ligature expanded to several chars)
    pub text: String,
    /// Left edge
    pub x0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub top: f32,
    /// Bottom edge
    pub bottom: f32,
    /// Font family name (e.g., "ABCDEF+Helvetica-Bold")
    #[serde(alias = "fontname", default)]
    pub font_name: String,
    /// Font size in points
    pub size: f32,
}

impl Glyph {
    /// Create a new glyph.
    pub fn new(
        text: impl Into<String>,
        x0: f32,
        top: f32,
        x1: f32,
        bottom: f32,
        font_name: impl Into<String>,
        size: f32,
    ) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
            font_name: font_name.into(),
            size,
        }
    }
}

/// All glyphs of one page, in arbitrary order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageGlyphs {
    /// Page number (1-indexed)
    #[serde(alias = "page", alias = "page_number")]
    pub number: u32,

    /// Page width in points, when the extractor reports it
    #[serde(default)]
    pub width: Option<f32>,

    /// Page height in points, when the extractor reports it
    #[serde(default)]
    pub height: Option<f32>,

    /// Glyphs on the page
    #[serde(alias = "chars", default)]
    pub glyphs: Vec<Glyph>,
}

impl PageGlyphs {
    /// Create an empty page with unknown geometry.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Default::default()
        }
    }

    /// Create an empty page with a known width.
    pub fn with_width(number: u32, width: f32) -> Self {
        Self {
            number,
            width: Some(width),
            ..Default::default()
        }
    }

    /// Add a glyph to the page.
    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Check if the page carries no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
