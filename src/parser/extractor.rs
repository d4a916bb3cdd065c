//! The outline pipeline: glyphs to title and headings.

use super::classifier::SpanClassifier;
use super::font_stats::FontStatistics;
use super::lines::aggregate_lines;
use super::normalize::normalize_text;
use super::options::OutlineOptions;
use super::outline::OutlineBuilder;
use crate::error::Result;
use crate::model::{OutlineDocument, PageGlyphs, Tag, TaggedSpan};

/// Everything the pipeline derived for one document.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Font statistics, `None` when the document had no spans
    pub stats: Option<FontStatistics>,
    /// Every span with its tag, in canonical order
    pub spans: Vec<TaggedSpan>,
    /// The final title and outline
    pub outline: OutlineDocument,
}

impl Analysis {
    /// Number of spans carrying a tag.
    pub fn tag_count(&self, tag: Tag) -> usize {
        self.spans.iter().filter(|s| s.tag == tag).count()
    }
}

/// Reconstructs title and outline from positioned glyphs.
///
/// Holds only read-only options, so one extractor can be shared across
/// threads that each process their own document.
#[derive(Debug, Clone, Default)]
pub struct OutlineExtractor {
    options: OutlineOptions,
}

impl OutlineExtractor {
    /// Create an extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom options, validating them first.
    pub fn with_options(options: OutlineOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options in use.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Build the outline of one document.
    pub fn extract(&self, pages: &[PageGlyphs]) -> OutlineDocument {
        self.analyze(pages).outline
    }

    /// Run every stage and keep the intermediate results.
    pub fn analyze(&self, pages: &[PageGlyphs]) -> Analysis {
        let mut spans = aggregate_lines(pages, self.options.default_page_width);
        for span in &mut spans {
            span.text = normalize_text(&span.text);
        }

        let Some(stats) = FontStatistics::from_spans(&spans) else {
            log::debug!("No spans found, returning empty outline");
            return Analysis {
                stats: None,
                spans: Vec::new(),
                outline: OutlineDocument::empty(),
            };
        };

        let tagged = SpanClassifier::new(&self.options, &stats).classify_all(spans);
        let outline = OutlineBuilder::new(&self.options).build(&tagged);

        Analysis {
            stats: Some(stats),
            spans: tagged,
            outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Glyph;

    fn line(page: &mut PageGlyphs, text: &str, x0: f32, top: f32, font: &str, size: f32) {
        let advance = size * 0.5;
        for (i, c) in text.chars().enumerate() {
            let x = x0 + i as f32 * advance;
            page.push(Glyph::new(c.to_string(), x, top, x + advance, top + size, font, size));
        }
    }

    #[test]
    fn test_empty_document() {
        let extractor = OutlineExtractor::new();
        let analysis = extractor.analyze(&[]);
        assert!(analysis.stats.is_none());
        assert!(analysis.outline.is_empty());

        let doc = extractor.extract(&[PageGlyphs::new(1), PageGlyphs::new(2)]);
        assert_eq!(doc, OutlineDocument::empty());
    }

    #[test]
    fn test_letter_spaced_heading_normalized() {
        let mut page = PageGlyphs::with_width(1, 612.0);
        for i in 0..6 {
            line(&mut page, "body text line", 72.0, 300.0 + i as f32 * 14.0, "Times", 10.0);
        }
        line(&mut page, "S u m m a r y", 72.0, 250.0, "Times-Roman", 14.0);

        let doc = OutlineExtractor::new().extract(&[page]);
        assert_eq!(doc.outline.len(), 1);
        assert_eq!(doc.outline[0].text, "Summary");
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = OutlineOptions::new().with_heading_deltas(0.5, 1.0, 2.0);
        assert!(OutlineExtractor::with_options(options).is_err());
    }

    #[test]
    fn test_tag_counts() {
        let mut page = PageGlyphs::with_width(1, 612.0);
        for i in 0..4 {
            line(&mut page, "plain body", 72.0, 400.0 + i as f32 * 14.0, "Times", 10.0);
        }
        line(&mut page, "Background", 72.0, 350.0, "Times-Roman", 12.5);

        let analysis = OutlineExtractor::new().analyze(&[page]);
        assert_eq!(analysis.tag_count(Tag::Paragraph), 4);
        assert_eq!(analysis.tag_count(Tag::H1), 1);
        assert_eq!(analysis.stats.unwrap().body_size, 10.0);
    }
}
