//! Outline output types.

use serde::{Deserialize, Serialize};

use super::Tag;

/// Heading level in the reconstructed outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Map a heading tag to its level. Non-heading tags have none.
    pub fn from_tag(tag: Tag) -> Option<Self> {
        match tag {
            Tag::H1 => Some(HeadingLevel::H1),
            Tag::H2 => Some(HeadingLevel::H2),
            Tag::H3 => Some(HeadingLevel::H3),
            Tag::Title | Tag::Paragraph => None,
        }
    }

    /// Nesting depth (1 for H1).
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "H{}", self.depth())
    }
}

/// A single outline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading level
    pub level: HeadingLevel,

    /// Normalized heading text
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,
}

impl HeadingEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title plus ordered heading outline of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlineDocument {
    /// Document title, empty when none was found
    pub title: String,

    /// Headings in document order
    pub outline: Vec<HeadingEntry>,
}

impl OutlineDocument {
    /// Create a new outline document.
    pub fn new(title: impl Into<String>, outline: Vec<HeadingEntry>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// The result for a document with no spans.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if neither a title nor any heading was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }

    /// Number of headings in the outline.
    pub fn heading_count(&self) -> usize {
        self.outline.len()
    }

    /// Count headings at one level.
    pub fn count_level(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|e| e.level == level).count()
    }
}
