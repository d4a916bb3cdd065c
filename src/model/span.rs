//! Line-level spans and their structural tags.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in page coordinates (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// A box with no area (or inverted edges, or non-finite coordinates).
    pub fn is_degenerate(&self) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite();
        !finite || self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// One reconstructed text line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Line text, glyphs concatenated left to right
    pub text: String,
    /// Majority font size, rounded to 0.1pt
    pub size: f32,
    /// Majority font family
    pub font_name: String,
    /// Union of the glyph boxes
    pub bbox: BoundingBox,
    /// Page number (1-indexed)
    pub page: u32,
    /// Width of the page the line sits on
    pub page_width: f32,
}

impl Span {
    /// Create a new span.
    pub fn new(
        text: impl Into<String>,
        size: f32,
        font_name: impl Into<String>,
        bbox: BoundingBox,
        page: u32,
        page_width: f32,
    ) -> Self {
        Self {
            text: text.into(),
            size,
            font_name: font_name.into(),
            bbox,
            page,
            page_width,
        }
    }
}

/// Structural role of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Part of the document title
    Title,
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
    /// Body text or anything unclassified
    Paragraph,
}

impl Tag {
    /// Heading rank: paragraph 0, h3 1, h2 2, h1 3. Titles have no rank.
    pub fn heading_rank(&self) -> Option<u8> {
        match self {
            Tag::Paragraph => Some(0),
            Tag::H3 => Some(1),
            Tag::H2 => Some(2),
            Tag::H1 => Some(3),
            Tag::Title => None,
        }
    }

    /// Whether this is one of the heading tags.
    pub fn is_heading(&self) -> bool {
        matches!(self, Tag::H1 | Tag::H2 | Tag::H3)
    }

    /// Lowercase name as used in debug output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Title => "title",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Paragraph => "paragraph",
        }
    }
}

/// A span with its assigned tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    /// The underlying line (text already normalized)
    #[serde(flatten)]
    pub span: Span,
    /// Assigned role
    pub tag: Tag,
}

impl TaggedSpan {
    /// Attach a tag to a span.
    pub fn new(span: Span, tag: Tag) -> Self {
        Self { span, tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_geometry() {
        let bbox = BoundingBox::new(100.0, 50.0, 300.0, 74.0);
        assert_eq!(bbox.width(), 200.0);
        assert_eq!(bbox.height(), 24.0);
        assert_eq!(bbox.center_x(), 200.0);
        assert!(!bbox.is_degenerate());
    }

    #[test]
    fn test_bounding_box_degenerate() {
        assert!(BoundingBox::new(10.0, 10.0, 10.0, 20.0).is_degenerate());
        assert!(BoundingBox::new(10.0, 20.0, 30.0, 20.0).is_degenerate());
        assert!(BoundingBox::new(f32::NAN, 0.0, 10.0, 10.0).is_degenerate());
        assert!(BoundingBox::default().is_degenerate());
    }

    #[test]
    fn test_bounding_box_union() {
        let a = BoundingBox::new(10.0, 10.0, 20.0, 20.0);
        let b = BoundingBox::new(5.0, 15.0, 30.0, 18.0);
        assert_eq!(a.union(&b), BoundingBox::new(5.0, 10.0, 30.0, 20.0));
    }

    #[test]
    fn test_tag_rank_order() {
        let ranks: Vec<u8> = [Tag::Paragraph, Tag::H3, Tag::H2, Tag::H1]
            .iter()
            .filter_map(|t| t.heading_rank())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert_eq!(Tag::Title.heading_rank(), None);
        assert!(Tag::H2.is_heading());
        assert!(!Tag::Title.is_heading());
    }
}
