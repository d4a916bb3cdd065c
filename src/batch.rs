//! Parallel outline extraction over many documents.
//!
//! Each document runs through its own pipeline instance on a rayon worker;
//! the extractor and registry are shared read-only. A document that cannot
//! be read is reported in its own [`BatchItem`] without affecting the rest.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::Result;
use crate::model::OutlineDocument;
use crate::parser::OutlineExtractor;
use crate::source::SourceRegistry;

/// Outcome for one document of a batch.
#[derive(Debug)]
pub struct BatchItem {
    /// Input path
    pub path: PathBuf,
    /// The outline, or why the document could not be processed
    pub result: Result<OutlineDocument>,
}

impl BatchItem {
    /// Whether the document was processed.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Success and failure counts of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents processed
    pub succeeded: usize,
    /// Documents that could not be read
    pub failed: usize,
}

impl BatchSummary {
    /// Tally a set of batch items.
    pub fn from_items(items: &[BatchItem]) -> Self {
        let succeeded = items.iter().filter(|i| i.is_ok()).count();
        Self {
            succeeded,
            failed: items.len() - succeeded,
        }
    }

    /// Total number of documents.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Extract the outline of one document from disk.
pub fn extract_one(
    path: &Path,
    registry: &SourceRegistry,
    extractor: &OutlineExtractor,
) -> Result<OutlineDocument> {
    let pages = registry.load(path)?;
    Ok(extractor.extract(&pages))
}

/// Extract outlines for many documents in parallel.
///
/// Results come back in the same order as `paths`.
pub fn extract_batch<P>(
    paths: &[P],
    registry: &SourceRegistry,
    extractor: &OutlineExtractor,
) -> Vec<BatchItem>
where
    P: AsRef<Path> + Sync,
{
    extract_batch_with_progress(paths, registry, extractor, |_| {})
}

/// Like [`extract_batch`], calling `on_done` as each document finishes.
///
/// `on_done` runs on worker threads, in completion order.
pub fn extract_batch_with_progress<P, F>(
    paths: &[P],
    registry: &SourceRegistry,
    extractor: &OutlineExtractor,
    on_done: F,
) -> Vec<BatchItem>
where
    P: AsRef<Path> + Sync,
    F: Fn(&BatchItem) + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let result = extract_one(path, registry, extractor);
            if let Err(ref e) = result {
                log::warn!("Skipping {}: {}", path.display(), e);
            }
            let item = BatchItem {
                path: path.to_path_buf(),
                result,
            };
            on_done(&item);
            item
        })
        .collect()
}
