//! Line aggregation: positioned glyphs to line spans.
//!
//! Glyphs sharing the same `top` coordinate (rounded to 0.1pt) form one
//! line. Within a line, glyphs are read left to right, and the line takes
//! the majority font size and family of its glyphs.

use std::collections::BTreeMap;

use crate::model::{BoundingBox, Glyph, PageGlyphs, Span};

/// Round to one decimal place.
pub(crate) fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Integer key for a value rounded to one decimal place.
pub(crate) fn tenth_key(value: f32) -> i64 {
    (value * 10.0).round() as i64
}

/// Most frequent value, ties going to the first one encountered.
pub(crate) fn mode_first<T, I>(values: I) -> Option<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        // Strictly greater keeps the earliest value on ties
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Aggregate all pages into spans in canonical (page, top) order.
///
/// Pages are processed in ascending page number. `default_page_width` is
/// used for pages whose width the extractor did not report.
pub fn aggregate_lines(pages: &[PageGlyphs], default_page_width: f32) -> Vec<Span> {
    let mut ordered: Vec<&PageGlyphs> = pages.iter().collect();
    ordered.sort_by_key(|p| p.number);

    let mut spans = Vec::new();
    for page in ordered {
        let width = page
            .width
            .filter(|w| w.is_finite() && *w > 0.0)
            .unwrap_or(default_page_width);
        let page_spans = aggregate_page(page, width);
        log::trace!("Page {}: {} lines", page.number, page_spans.len());
        spans.extend(page_spans);
    }

    log::debug!(
        "Aggregated {} lines from {} pages",
        spans.len(),
        pages.len()
    );
    spans
}

/// Aggregate one page's glyphs into lines, top to bottom.
pub fn aggregate_page(page: &PageGlyphs, page_width: f32) -> Vec<Span> {
    if page.glyphs.is_empty() {
        return vec![];
    }

    let mut buckets: BTreeMap<i64, Vec<&Glyph>> = BTreeMap::new();
    for glyph in &page.glyphs {
        buckets.entry(tenth_key(glyph.top)).or_default().push(glyph);
    }

    buckets
        .into_values()
        .filter_map(|mut glyphs| {
            // Stable sort keeps extractor order for glyphs at the same x
            glyphs.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));
            build_span(&glyphs, page.number, page_width)
        })
        .collect()
}

/// Build a span from the glyphs of one line, already sorted by x.
fn build_span(glyphs: &[&Glyph], page: u32, page_width: f32) -> Option<Span> {
    let first = glyphs.first()?;

    let text: String = glyphs.iter().map(|g| g.text.as_str()).collect();

    let size_key = mode_first(glyphs.iter().map(|g| tenth_key(g.size)))?;
    let font_name = mode_first(glyphs.iter().map(|g| g.font_name.as_str()))?;

    let bbox = glyphs.iter().skip(1).fold(
        BoundingBox::new(first.x0, first.top, first.x1, first.bottom),
        |acc, g| acc.union(&BoundingBox::new(g.x0, g.top, g.x1, g.bottom)),
    );

    Some(Span::new(
        text.trim(),
        size_key as f32 / 10.0,
        font_name,
        bbox,
        page,
        page_width,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(text: &str, x0: f32, top: f32, font: &str, size: f32) -> Glyph {
        Glyph::new(text, x0, top, x0 + size * 0.5, top + size, font, size)
    }

    fn word(text: &str, x0: f32, top: f32, font: &str, size: f32) -> Vec<Glyph> {
        text.chars()
            .enumerate()
            .map(|(i, c)| glyph(&c.to_string(), x0 + i as f32 * size * 0.5, top, font, size))
            .collect()
    }

    #[test]
    fn test_mode_first_tie_break() {
        assert_eq!(mode_first(vec![1, 2, 2, 1]), Some(1));
        assert_eq!(mode_first(vec![3, 1, 1]), Some(1));
        assert_eq!(mode_first(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(11.96), 12.0);
        assert_eq!(round_tenth(10.04), 10.0);
        assert_eq!(tenth_key(72.04), 720);
    }

    #[test]
    fn test_glyphs_sorted_left_to_right() {
        let mut page = PageGlyphs::with_width(1, 612.0);
        // Shuffled glyph order
        page.push(glyph("c", 20.0, 100.0, "Times", 10.0));
        page.push(glyph("a", 0.0, 100.0, "Times", 10.0));
        page.push(glyph("b", 10.0, 100.0, "Times", 10.0));

        let spans = aggregate_page(&page, 612.0);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "abc");
    }

    #[test]
    fn test_lines_ordered_top_to_bottom() {
        let mut page = PageGlyphs::with_width(1, 612.0);
        page.glyphs.extend(word("second", 50.0, 200.0, "Times", 10.0));
        page.glyphs.extend(word("first", 50.0, 100.0, "Times", 10.0));

        let spans = aggregate_page(&page, 612.0);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_top_rounding_groups_jitter() {
        let mut page = PageGlyphs::new(1);
        page.push(glyph("a", 0.0, 100.01, "Times", 10.0));
        page.push(glyph("b", 5.0, 100.04, "Times", 10.0));
        page.push(glyph("c", 10.0, 100.3, "Times", 10.0));

        let spans = aggregate_page(&page, 612.0);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "ab");
        assert_eq!(spans[1].text, "c");
    }

    #[test]
    fn test_majority_size_and_font() {
        let mut page = PageGlyphs::new(1);
        page.glyphs
            .extend(word("Head", 0.0, 50.0, "Arial-Bold", 18.0));
        page.push(glyph("x", 40.0, 50.0, "Symbol", 9.0));

        let spans = aggregate_page(&page, 612.0);
        assert_eq!(spans[0].size, 18.0);
        assert_eq!(spans[0].font_name, "Arial-Bold");
    }

    #[test]
    fn test_bounding_box_union() {
        let mut page = PageGlyphs::new(1);
        page.push(Glyph::new("a", 10.0, 100.0, 15.0, 110.0, "Times", 10.0));
        page.push(Glyph::new("b", 15.0, 100.0, 21.0, 112.0, "Times", 12.0));

        let spans = aggregate_page(&page, 612.0);
        assert_eq!(spans[0].bbox, BoundingBox::new(10.0, 100.0, 21.0, 112.0));
    }

    #[test]
    fn test_empty_page_yields_nothing() {
        let page = PageGlyphs::new(1);
        assert!(aggregate_page(&page, 612.0).is_empty());
    }

    #[test]
    fn test_pages_in_number_order_with_default_width() {
        let mut p2 = PageGlyphs::new(2);
        p2.glyphs.extend(word("later", 0.0, 10.0, "Times", 10.0));
        let mut p1 = PageGlyphs::with_width(1, 595.0);
        p1.glyphs.extend(word("earlier", 0.0, 500.0, "Times", 10.0));
        let empty = PageGlyphs::new(3);

        let spans = aggregate_lines(&[p2, empty, p1], 612.0);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "earlier");
        assert_eq!(spans[0].page, 1);
        assert_eq!(spans[0].page_width, 595.0);
        assert_eq!(spans[1].page, 2);
        assert_eq!(spans[1].page_width, 612.0);
    }
}
