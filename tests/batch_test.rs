//! Integration tests for batch extraction over files on disk.

use std::fs;
use std::path::PathBuf;

use pdf_outline::batch::{extract_batch, extract_batch_with_progress, BatchSummary};
use pdf_outline::{
    extract_outline_from_file, Error, HeadingLevel, OutlineExtractor, SourceRegistry,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A one-page dump with a centered bold title and a heading.
fn dump(title: &str, heading: &str) -> String {
    let mut chars = Vec::new();
    let mut push_line = |text: &str, x0: f32, top: f32, font: &str, size: f32| {
        let advance = size * 0.5;
        for (i, c) in text.chars().enumerate() {
            let x = x0 + i as f32 * advance;
            chars.push(serde_json::json!({
                "text": c.to_string(),
                "x0": x,
                "x1": x + advance,
                "top": top,
                "bottom": top + size,
                "fontname": font,
                "size": size,
            }));
        }
    };

    let title_width = title.chars().count() as f32 * 12.0;
    push_line(title, (612.0 - title_width) / 2.0, 72.0, "Helvetica-Bold", 24.0);
    push_line(heading, 72.0, 300.0, "Helvetica-Bold", 14.0);
    for i in 0..8 {
        push_line("plain body text", 72.0, 330.0 + i as f32 * 14.0, "Helvetica", 10.0);
    }

    serde_json::json!({
        "pages": [{"page_number": 1, "width": 612.0, "chars": chars}]
    })
    .to_string()
}

#[test]
fn test_extract_outline_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    fs::write(&path, dump("Annual Report", "Introduction")).unwrap();

    let doc = extract_outline_from_file(&path).unwrap();
    assert_eq!(doc.title, "Annual Report");
    assert_eq!(doc.outline.len(), 1);
    assert_eq!(doc.outline[0].level, HeadingLevel::H1);
    assert_eq!(doc.outline[0].text, "Introduction");
}

#[test]
fn test_batch_keeps_going_past_unreadable_documents() {
    let dir = tempfile::tempdir().unwrap();
    let good_a = dir.path().join("a.json");
    let broken = dir.path().join("b.json");
    let good_c = dir.path().join("c.json");
    fs::write(&good_a, dump("Alpha Plan", "Scope")).unwrap();
    fs::write(&broken, "{\"pages\": [").unwrap();
    fs::write(&good_c, dump("Gamma Notes", "Results")).unwrap();

    let paths: Vec<PathBuf> = vec![good_a, broken.clone(), good_c];
    let registry = SourceRegistry::with_defaults();
    let extractor = OutlineExtractor::new();

    let items = extract_batch(&paths, &registry, &extractor);
    assert_eq!(items.len(), 3);

    assert_eq!(items[0].result.as_ref().unwrap().title, "Alpha Plan");
    assert_eq!(items[1].path, broken);
    assert!(matches!(items[1].result, Err(Error::DocumentUnreadable(_))));
    assert_eq!(items[2].result.as_ref().unwrap().title, "Gamma Notes");

    let summary = BatchSummary::from_items(&items);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 1);
}

#[test]
fn test_batch_progress_callback() {
    let dir = tempfile::tempdir().unwrap();
    let paths: Vec<PathBuf> = (0..4)
        .map(|i| {
            let path = dir.path().join(format!("doc{}.json", i));
            fs::write(&path, dump("Weekly Update", "Highlights")).unwrap();
            path
        })
        .collect();

    let done = AtomicUsize::new(0);
    let items = extract_batch_with_progress(
        &paths,
        &SourceRegistry::with_defaults(),
        &OutlineExtractor::new(),
        |_| {
            done.fetch_add(1, Ordering::SeqCst);
        },
    );

    assert_eq!(done.load(Ordering::SeqCst), 4);
    assert!(items.iter().all(|i| i.is_ok()));
}

#[test]
fn test_empty_dump_is_not_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, r#"{"pages": [{"page_number": 1, "chars": []}]}"#).unwrap();

    let doc = extract_outline_from_file(&path).unwrap();
    assert!(doc.is_empty());
}
