//! Classification and aggregation thresholds.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Slack for comparing sizes and gaps that were rounded to 0.1pt.
pub(crate) const SIZE_EPSILON: f32 = 1e-3;

/// Tunable thresholds for span classification and title aggregation.
///
/// Heading geometry varies a lot across document styles, so every cutoff
/// lives here rather than in the classifier. All distances are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineOptions {
    /// A first-page line whose top is above this is "near the top"
    pub near_top_threshold: f32,

    /// Max distance between a line's center and the page center
    pub center_tolerance: f32,

    /// Substrings of a font name (case-insensitive) that mark it bold
    pub bold_keywords: Vec<String>,

    /// Number of leading spans eligible for the early title rule
    pub early_title_window: usize,

    /// How far below the largest size an early title may be
    pub max_size_tolerance: f32,

    /// Early titles need more than this many characters
    pub min_title_chars: usize,

    /// Size above body size for an H1
    pub h1_delta: f32,

    /// Size above body size for an H2
    pub h2_delta: f32,

    /// Size above body size for a bold H3
    pub h3_delta: f32,

    /// Max size difference between consecutive title lines
    pub title_size_tolerance: f32,

    /// Max vertical gap between consecutive title lines
    pub title_max_gap: f32,

    /// Headings closer than this below the title are skipped
    pub title_heading_guard_gap: f32,

    /// Page width used when the extractor does not report one
    pub default_page_width: f32,
}

impl OutlineOptions {
    /// Create options with documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the near-top threshold for the first-page title rule.
    pub fn with_near_top_threshold(mut self, points: f32) -> Self {
        self.near_top_threshold = points;
        self
    }

    /// Set the centering tolerance.
    pub fn with_center_tolerance(mut self, points: f32) -> Self {
        self.center_tolerance = points;
        self
    }

    /// Replace the bold keyword set.
    pub fn with_bold_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bold_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set how many leading spans the early title rule considers.
    pub fn with_early_title_window(mut self, spans: usize) -> Self {
        self.early_title_window = spans;
        self
    }

    /// Set the tolerance against the largest size for early titles.
    pub fn with_max_size_tolerance(mut self, points: f32) -> Self {
        self.max_size_tolerance = points;
        self
    }

    /// Set the minimum title length for early titles.
    pub fn with_min_title_chars(mut self, chars: usize) -> Self {
        self.min_title_chars = chars;
        self
    }

    /// Set the three heading deltas at once.
    pub fn with_heading_deltas(mut self, h1: f32, h2: f32, h3: f32) -> Self {
        self.h1_delta = h1;
        self.h2_delta = h2;
        self.h3_delta = h3;
        self
    }

    /// Set the size tolerance between title lines.
    pub fn with_title_size_tolerance(mut self, points: f32) -> Self {
        self.title_size_tolerance = points;
        self
    }

    /// Set the max gap between title lines.
    pub fn with_title_max_gap(mut self, points: f32) -> Self {
        self.title_max_gap = points;
        self
    }

    /// Set the guard gap for headings directly below the title.
    pub fn with_title_heading_guard_gap(mut self, points: f32) -> Self {
        self.title_heading_guard_gap = points;
        self
    }

    /// Set the fallback page width.
    pub fn with_default_page_width(mut self, points: f32) -> Self {
        self.default_page_width = points;
        self
    }

    /// Check whether a font name carries one of the bold keywords.
    pub fn is_bold_font(&self, font_name: &str) -> bool {
        if font_name.is_empty() {
            return false;
        }
        let lower = font_name.to_lowercase();
        self.bold_keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| lower.contains(&k.to_lowercase()))
    }

    /// Reject thresholds that cannot describe a heading ladder.
    pub fn validate(&self) -> Result<()> {
        let distances = [
            ("near_top_threshold", self.near_top_threshold),
            ("center_tolerance", self.center_tolerance),
            ("max_size_tolerance", self.max_size_tolerance),
            ("h1_delta", self.h1_delta),
            ("h2_delta", self.h2_delta),
            ("h3_delta", self.h3_delta),
            ("title_size_tolerance", self.title_size_tolerance),
            ("title_max_gap", self.title_max_gap),
            ("title_heading_guard_gap", self.title_heading_guard_gap),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.default_page_width.is_finite() || self.default_page_width <= 0.0 {
            return Err(Error::InvalidOption(format!(
                "default_page_width must be positive, got {}",
                self.default_page_width
            )));
        }

        if self.h2_delta > self.h1_delta || self.h3_delta > self.h2_delta {
            return Err(Error::InvalidOption(format!(
                "heading deltas must satisfy h1 >= h2 >= h3, got {} / {} / {}",
                self.h1_delta, self.h2_delta, self.h3_delta
            )));
        }

        Ok(())
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            near_top_threshold: 200.0,
            center_tolerance: 50.0,
            bold_keywords: vec!["bold".to_string(), "black".to_string(), "heavy".to_string()],
            early_title_window: 5,
            max_size_tolerance: 0.5,
            min_title_chars: 3,
            h1_delta: 2.0,
            h2_delta: 1.2,
            h3_delta: 0.5,
            title_size_tolerance: 1.0,
            title_max_gap: 30.0,
            title_heading_guard_gap: 20.0,
            default_page_width: 612.0, // US Letter, 8.5 * 72
        }
    }
}
