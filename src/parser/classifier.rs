//! Rule cascade that tags each span with a structural role.

use super::font_stats::FontStatistics;
use super::options::{OutlineOptions, SIZE_EPSILON};
use crate::model::{Span, Tag, TaggedSpan};

/// Tags spans as title, heading or paragraph.
///
/// Rules are tried in order and the first match wins:
///
/// 1. first-page title: bold, centered, near the top, at least body size
/// 2. early title: bold, among the first spans, close to the largest size
/// 3. headings by size delta over body size (H3 additionally needs bold)
/// 4. paragraph
pub struct SpanClassifier<'a> {
    options: &'a OutlineOptions,
    stats: &'a FontStatistics,
}

impl<'a> SpanClassifier<'a> {
    /// Create a classifier for one document.
    pub fn new(options: &'a OutlineOptions, stats: &'a FontStatistics) -> Self {
        Self { options, stats }
    }

    /// Tag every span. `spans` must already be in canonical (page, top)
    /// order, since the early title rule looks at each span's position.
    pub fn classify_all(&self, spans: Vec<Span>) -> Vec<TaggedSpan> {
        spans
            .into_iter()
            .enumerate()
            .map(|(ordinal, span)| {
                let tag = self.classify(&span, ordinal);
                log::trace!(
                    "#{} p{} {:.1}pt {:?} -> {}",
                    ordinal,
                    span.page,
                    span.size,
                    span.text,
                    tag.as_str()
                );
                TaggedSpan::new(span, tag)
            })
            .collect()
    }

    /// Tag one span given its position in the document.
    pub fn classify(&self, span: &Span, ordinal: usize) -> Tag {
        // Nothing to anchor a heading on
        if span.text.is_empty() || span.bbox.is_degenerate() || !span.size.is_finite() {
            return Tag::Paragraph;
        }

        let is_bold = self.options.is_bold_font(&span.font_name);

        if self.is_page_anchored_title(span, is_bold) || self.is_early_title(span, ordinal, is_bold)
        {
            return Tag::Title;
        }

        self.heading_tag(span.size, is_bold)
    }

    /// Heading level from size alone (plus boldness for H3).
    ///
    /// Monotone in `size`: a larger size never yields a lower rank.
    pub fn heading_tag(&self, size: f32, is_bold: bool) -> Tag {
        let delta = self.stats.delta(size) + SIZE_EPSILON;

        if delta >= self.options.h1_delta {
            Tag::H1
        } else if delta >= self.options.h2_delta {
            Tag::H2
        } else if is_bold && delta >= self.options.h3_delta {
            Tag::H3
        } else {
            Tag::Paragraph
        }
    }

    fn is_page_anchored_title(&self, span: &Span, is_bold: bool) -> bool {
        if span.page != 1 || !is_bold {
            return false;
        }

        let near_top = span.bbox.top < self.options.near_top_threshold;
        let page_center = span.page_width / 2.0;
        let centered = (span.bbox.center_x() - page_center).abs() <= self.options.center_tolerance;

        near_top && centered && span.size + SIZE_EPSILON >= self.stats.body_size
    }

    fn is_early_title(&self, span: &Span, ordinal: usize, is_bold: bool) -> bool {
        if ordinal >= self.options.early_title_window || !is_bold {
            return false;
        }

        let near_max =
            self.stats.max_size - span.size <= self.options.max_size_tolerance + SIZE_EPSILON;

        near_max && span.text.chars().count() > self.options.min_title_chars
    }
}
