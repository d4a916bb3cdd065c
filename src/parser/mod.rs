//! Outline reconstruction pipeline.
//!
//! Stages, in order: line aggregation, text normalization, body-size
//! estimation, span classification, title aggregation and outline building.

mod classifier;
mod extractor;
mod font_stats;
mod lines;
mod normalize;
mod options;
mod outline;

pub use classifier::SpanClassifier;
pub use extractor::{Analysis, OutlineExtractor};
pub use font_stats::FontStatistics;
pub use lines::{aggregate_lines, aggregate_page};
pub use normalize::normalize_text;
pub use options::OutlineOptions;
pub use outline::OutlineBuilder;
