//! Title aggregation and outline assembly.
//!
//! A single left-to-right fold over the tagged spans. While collecting the
//! title, consecutive `title` lines are merged if they continue the first
//! one; the first real heading (or a title line that breaks continuity)
//! switches the scan to collecting headings for the rest of the document.

use super::options::{OutlineOptions, SIZE_EPSILON};
use crate::model::{BoundingBox, HeadingEntry, HeadingLevel, OutlineDocument, Tag, TaggedSpan};

/// Phase of the scan. Never returns to `CollectingTitle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    CollectingTitle,
    CollectingHeadings,
}

/// Style and position of an accepted title line.
#[derive(Debug, Clone)]
struct TitleLine {
    font_name: String,
    size: f32,
    page: u32,
    bbox: BoundingBox,
}

impl TitleLine {
    fn from_span(tagged: &TaggedSpan) -> Self {
        Self {
            font_name: tagged.span.font_name.clone(),
            size: tagged.span.size,
            page: tagged.span.page,
            bbox: tagged.span.bbox,
        }
    }
}

/// Accumulator carried through the fold.
#[derive(Debug, Default)]
struct Scan {
    state: ScanState,
    /// First accepted title line
    anchor: Option<TitleLine>,
    /// Most recently accepted title line
    last: Option<TitleLine>,
    title_lines: Vec<String>,
    outline: Vec<HeadingEntry>,
}

impl Scan {
    fn accept_title(&mut self, tagged: &TaggedSpan) {
        let line = TitleLine::from_span(tagged);
        if self.anchor.is_none() {
            self.anchor = Some(line.clone());
        }
        self.last = Some(line);
        self.title_lines.push(tagged.span.text.clone());
    }

    fn emit_heading(&mut self, tagged: &TaggedSpan) {
        if let Some(level) = HeadingLevel::from_tag(tagged.tag) {
            self.outline.push(HeadingEntry::new(
                level,
                tagged.span.text.clone(),
                tagged.span.page,
            ));
        }
    }

    fn finish(self) -> OutlineDocument {
        let title = self
            .title_lines
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        OutlineDocument::new(title, self.outline)
    }
}

/// Builds the final title and outline from tagged spans.
pub struct OutlineBuilder<'a> {
    options: &'a OutlineOptions,
}

impl<'a> OutlineBuilder<'a> {
    /// Create a builder.
    pub fn new(options: &'a OutlineOptions) -> Self {
        Self { options }
    }

    /// Fold the tagged spans, in canonical order, into an outline.
    ///
    /// Never fails: a document without titles or headings gives an empty
    /// title and an empty outline.
    pub fn build(&self, spans: &[TaggedSpan]) -> OutlineDocument {
        let scan = spans
            .iter()
            .fold(Scan::default(), |scan, tagged| self.step(scan, tagged));

        log::debug!(
            "Outline: {} title lines, {} headings",
            scan.title_lines.len(),
            scan.outline.len()
        );
        scan.finish()
    }

    fn step(&self, mut scan: Scan, tagged: &TaggedSpan) -> Scan {
        match scan.state {
            ScanState::CollectingTitle => match tagged.tag {
                Tag::Title => {
                    if scan.anchor.is_none() || self.continues_title(&scan, tagged) {
                        scan.accept_title(tagged);
                    } else {
                        // Breaks continuity: dropped, and the title is closed
                        log::trace!("Title closed by {:?}", tagged.span.text);
                        scan.state = ScanState::CollectingHeadings;
                    }
                }
                tag if tag.is_heading() => {
                    if self.hugs_title(&scan, tagged) {
                        log::trace!("Skipping {:?} directly below title", tagged.span.text);
                    } else {
                        scan.state = ScanState::CollectingHeadings;
                        scan.emit_heading(tagged);
                    }
                }
                // Paragraphs neither close the title nor join it
                _ => {}
            },
            ScanState::CollectingHeadings => scan.emit_heading(tagged),
        }
        scan
    }

    /// Whether a title-tagged span continues the title collected so far.
    fn continues_title(&self, scan: &Scan, tagged: &TaggedSpan) -> bool {
        let (Some(anchor), Some(last)) = (&scan.anchor, &scan.last) else {
            return false;
        };
        let span = &tagged.span;

        let same_font = span.font_name == anchor.font_name || span.font_name == last.font_name;
        let same_size =
            (span.size - last.size).abs() <= self.options.title_size_tolerance + SIZE_EPSILON;
        let same_page = span.page == anchor.page;
        let gap = span.bbox.top - last.bbox.bottom;
        let close = gap <= self.options.title_max_gap + SIZE_EPSILON;

        same_font && same_size && same_page && close
    }

    /// Whether a heading sits just below the last title line on the title page.
    fn hugs_title(&self, scan: &Scan, tagged: &TaggedSpan) -> bool {
        let (Some(anchor), Some(last)) = (&scan.anchor, &scan.last) else {
            return false;
        };
        if tagged.span.page != anchor.page {
            return false;
        }

        let gap = tagged.span.bbox.top - last.bbox.bottom;
        (0.0..=self.options.title_heading_guard_gap + SIZE_EPSILON).contains(&gap)
    }
}
