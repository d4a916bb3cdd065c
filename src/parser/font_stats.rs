//! Document-wide font size statistics.

use std::collections::HashMap;

use super::lines::{round_tenth, tenth_key};
use crate::model::Span;

/// Font size statistics used as the baseline for heading detection.
///
/// Computed once over an immutable snapshot of all spans, before any
/// classification happens.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStatistics {
    /// Body text font size (most common span size)
    pub body_size: f32,
    /// Largest span size in the document
    pub max_size: f32,
    /// Span count per size, keyed in tenths of a point
    pub size_histogram: HashMap<i64, usize>,
}

impl FontStatistics {
    /// Analyze the spans of one document.
    ///
    /// Returns `None` for a document without spans. Ties between equally
    /// common sizes go to the size seen first in span order.
    pub fn from_spans(spans: &[Span]) -> Option<Self> {
        let mut size_histogram: HashMap<i64, usize> = HashMap::new();
        let mut first_seen: Vec<i64> = Vec::new();
        let mut max_size = f32::MIN;

        for span in spans {
            let key = tenth_key(span.size);
            let count = size_histogram.entry(key).or_insert(0);
            if *count == 0 {
                first_seen.push(key);
            }
            *count += 1;
            if span.size.is_finite() {
                max_size = max_size.max(span.size);
            }
        }

        // Scan in first-seen order so ties keep the earliest size
        let mut body_key: Option<(i64, usize)> = None;
        for key in first_seen {
            let count = size_histogram[&key];
            if body_key.map_or(true, |(_, best)| count > best) {
                body_key = Some((key, count));
            }
        }
        let (body_key, _) = body_key?;
        let body_size = body_key as f32 / 10.0;

        if max_size == f32::MIN {
            max_size = body_size;
        }

        log::debug!(
            "Font statistics: body={:.1}pt, max={:.1}pt, {} distinct sizes",
            body_size,
            max_size,
            size_histogram.len()
        );

        Some(Self {
            body_size,
            max_size: round_tenth(max_size),
            size_histogram,
        })
    }

    /// How far a size sits above body size.
    pub fn delta(&self, size: f32) -> f32 {
        size - self.body_size
    }

    /// Number of spans set at a size.
    pub fn count(&self, size: f32) -> usize {
        self.size_histogram
            .get(&tenth_key(size))
            .copied()
            .unwrap_or(0)
    }
}
