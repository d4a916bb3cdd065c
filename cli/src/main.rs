//! pdf-outline CLI - document outline reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outline::batch::{extract_batch_with_progress, BatchSummary};
use pdf_outline::render::{to_json, to_markdown};
use pdf_outline::{
    HeadingLevel, JsonFormat, OutlineDocument, OutlineExtractor, OutlineOptions, PageGlyphs,
    SourceRegistry, Tag,
};

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(version)]
#[command(about = "Reconstruct title and heading outline from glyph dumps", long_about = None)]
struct Cli {
    /// Input glyph dump (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of one document
    Outline {
        /// Input glyph dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Glyph source to read with, overriding the file extension
        #[arg(long, value_name = "NAME")]
        source: Option<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Extract outlines for every glyph dump in a directory
    Batch {
        /// Directory of glyph dumps
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Show font statistics and tag counts for a document
    Info {
        /// Input glyph dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Glyph source to read with, overriding the file extension
        #[arg(long, value_name = "NAME")]
        source: Option<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// {"title", "outline"} JSON
    Json,
    /// Markdown table of contents
    Markdown,
}

/// Threshold overrides shared by all commands.
#[derive(Args, Default)]
struct TuningArgs {
    /// Options file (JSON); flags below override it
    #[arg(long, value_name = "FILE", env = "PDF_OUTLINE_CONFIG")]
    config: Option<PathBuf>,

    /// First-page title must start above this (points)
    #[arg(long)]
    near_top: Option<f32>,

    /// Max distance from page center for a title (points)
    #[arg(long)]
    center_tolerance: Option<f32>,

    /// Font name substrings that mark bold, comma separated
    #[arg(long, value_delimiter = ',', value_name = "LIST")]
    bold_keywords: Option<Vec<String>>,

    /// Number of leading lines eligible as title
    #[arg(long)]
    early_window: Option<usize>,

    /// How far below the largest size an early title may be
    #[arg(long)]
    max_size_tolerance: Option<f32>,

    /// Early titles need more than this many characters
    #[arg(long)]
    min_title_chars: Option<usize>,

    /// Size delta over body text for H1
    #[arg(long)]
    h1_delta: Option<f32>,

    /// Size delta over body text for H2
    #[arg(long)]
    h2_delta: Option<f32>,

    /// Size delta over body text for bold H3
    #[arg(long)]
    h3_delta: Option<f32>,

    /// Max size difference between title lines
    #[arg(long)]
    title_size_tolerance: Option<f32>,

    /// Max vertical gap between title lines (points)
    #[arg(long)]
    title_max_gap: Option<f32>,

    /// Headings this close below the title are skipped (points)
    #[arg(long)]
    guard_gap: Option<f32>,

    /// Page width when the dump has none (points)
    #[arg(long)]
    page_width: Option<f32>,
}

impl TuningArgs {
    /// Build options from the config file (if any) and flag overrides.
    fn to_options(&self) -> Result<OutlineOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => {
                let data = fs::read(path)
                    .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
                serde_json::from_slice::<OutlineOptions>(&data)
                    .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?
            }
            None => OutlineOptions::default(),
        };

        if let Some(v) = self.near_top {
            options = options.with_near_top_threshold(v);
        }
        if let Some(v) = self.center_tolerance {
            options = options.with_center_tolerance(v);
        }
        if let Some(keywords) = &self.bold_keywords {
            options = options.with_bold_keywords(keywords.iter().map(|k| k.trim()));
        }
        if let Some(v) = self.early_window {
            options = options.with_early_title_window(v);
        }
        if let Some(v) = self.max_size_tolerance {
            options = options.with_max_size_tolerance(v);
        }
        if let Some(v) = self.min_title_chars {
            options = options.with_min_title_chars(v);
        }
        let (h1, h2, h3) = (
            self.h1_delta.unwrap_or(options.h1_delta),
            self.h2_delta.unwrap_or(options.h2_delta),
            self.h3_delta.unwrap_or(options.h3_delta),
        );
        options = options.with_heading_deltas(h1, h2, h3);
        if let Some(v) = self.title_size_tolerance {
            options = options.with_title_size_tolerance(v);
        }
        if let Some(v) = self.title_max_gap {
            options = options.with_title_max_gap(v);
        }
        if let Some(v) = self.guard_gap {
            options = options.with_title_heading_guard_gap(v);
        }
        if let Some(v) = self.page_width {
            options = options.with_default_page_width(v);
        }

        Ok(options)
    }

    fn extractor(&self) -> Result<OutlineExtractor, Box<dyn std::error::Error>> {
        Ok(OutlineExtractor::with_options(self.to_options()?)?)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            format,
            compact,
            source,
            tuning,
        }) => cmd_outline(
            &input,
            output.as_deref(),
            format,
            compact,
            source.as_deref(),
            &tuning,
        ),
        Some(Commands::Batch {
            input,
            output,
            tuning,
        }) => cmd_batch(&input, &output, &tuning),
        Some(Commands::Info {
            input,
            source,
            tuning,
        }) => cmd_info(&input, source.as_deref(), &tuning),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: outline as JSON if input is provided
            if let Some(input) = cli.input {
                cmd_outline(
                    &input,
                    cli.output.as_deref(),
                    Format::Json,
                    false,
                    None,
                    &TuningArgs::default(),
                )
            } else {
                println!("{}", "Usage: pdf-outline <FILE> [OUTPUT]".yellow());
                println!("       pdf-outline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn render(doc: &OutlineDocument, format: Format, compact: bool) -> pdf_outline::Result<String> {
    match format {
        Format::Json if compact => to_json(doc, JsonFormat::Compact),
        Format::Json => to_json(doc, JsonFormat::Pretty),
        Format::Markdown => Ok(to_markdown(doc)),
    }
}

/// Load pages by extension, or with the named source when one is given.
fn load_pages(input: &Path, source: Option<&str>) -> pdf_outline::Result<Vec<PageGlyphs>> {
    let registry = SourceRegistry::with_defaults();
    match source {
        Some(name) => registry.load_as(input, name),
        None => registry.load(input),
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    format: Format,
    compact: bool,
    source: Option<&str>,
    tuning: &TuningArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = tuning.extractor()?;
    let pages = load_pages(input, source)?;
    let doc = extractor.extract(&pages);
    let content = render(&doc, format, compact)?;

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// Glyph dumps directly inside `dir`, sorted by name.
fn collect_inputs(dir: &Path, registry: &SourceRegistry) -> std::io::Result<Vec<PathBuf>> {
    let mut inputs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && registry.supports_path(path))
        .collect();
    inputs.sort();
    Ok(inputs)
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    tuning: &TuningArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = tuning.extractor()?;
    let registry = SourceRegistry::with_defaults();

    fs::create_dir_all(output)?;
    if fs::canonicalize(input)? == fs::canonicalize(output)? {
        return Err("Output directory must differ from the input directory".into());
    }

    let inputs = collect_inputs(input, &registry)?;
    if inputs.is_empty() {
        println!("{} {}", "No glyph dumps found in".yellow(), input.display());
        return Ok(());
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting outlines...");

    let items = extract_batch_with_progress(&inputs, &registry, &extractor, |_| pb.inc(1));

    for item in &items {
        if let Ok(doc) = &item.result {
            let name = item.path.file_name().unwrap_or_default();
            let json = to_json(doc, JsonFormat::Pretty)?;
            fs::write(output.join(name), json)?;
        }
    }
    pb.finish_with_message("Done!");

    let summary = BatchSummary::from_items(&items);
    println!(
        "\n{} {} of {} documents",
        "Processed".green().bold(),
        summary.succeeded,
        summary.total()
    );

    if summary.failed > 0 {
        println!("{}", "Failed:".red().bold());
        for item in items.iter().filter(|i| !i.is_ok()) {
            if let Err(e) = &item.result {
                println!("  {} {}: {}", "└─".dimmed(), item.path.display(), e);
            }
        }
    }

    Ok(())
}

fn cmd_info(
    input: &Path,
    source: Option<&str>,
    tuning: &TuningArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let extractor = tuning.extractor()?;
    let pages = load_pages(input, source)?;
    let analysis = extractor.analyze(&pages);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), pages.len());
    println!(
        "{}: {}",
        "Glyphs".bold(),
        pages.iter().map(|p| p.glyphs.len()).sum::<usize>()
    );
    println!("{}: {}", "Lines".bold(), analysis.spans.len());

    if let Some(ref stats) = analysis.stats {
        println!(
            "{}: {:.1}pt ({} lines)",
            "Body size".bold(),
            stats.body_size,
            stats.count(stats.body_size)
        );
        println!("{}: {:.1}pt", "Largest size".bold(), stats.max_size);
        println!("{}: {}", "Distinct sizes".bold(), stats.size_histogram.len());
    }

    println!();
    println!("{}", "Tags".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for tag in [Tag::Title, Tag::H1, Tag::H2, Tag::H3, Tag::Paragraph] {
        println!("{}: {}", tag.as_str().bold(), analysis.tag_count(tag));
    }

    println!();
    let title = if analysis.outline.title.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        analysis.outline.title.clone()
    };
    println!("{}: {}", "Title".bold(), title);
    println!(
        "{}: {} (H1 {}, H2 {}, H3 {})",
        "Headings".bold(),
        analysis.outline.heading_count(),
        analysis.outline.count_level(HeadingLevel::H1),
        analysis.outline.count_level(HeadingLevel::H2),
        analysis.outline.count_level(HeadingLevel::H3)
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdf-outline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline reconstruction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuning_overrides_defaults() {
        let tuning = TuningArgs {
            near_top: Some(100.0),
            h1_delta: Some(1.8),
            ..Default::default()
        };
        let options = tuning.to_options().unwrap();
        assert_eq!(options.near_top_threshold, 100.0);
        assert_eq!(options.h1_delta, 1.8);
        assert_eq!(options.h2_delta, 1.2);
    }

    #[test]
    fn test_tuning_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, r#"{"h1_delta": 1.5, "early_title_window": 2}"#).unwrap();

        let tuning = TuningArgs {
            config: Some(path),
            early_window: Some(8),
            ..Default::default()
        };
        let options = tuning.to_options().unwrap();
        assert_eq!(options.h1_delta, 1.5);
        assert_eq!(options.early_title_window, 8);
    }

    #[test]
    fn test_tuning_bold_keywords_and_guard_gap() {
        let tuning = TuningArgs {
            bold_keywords: Some(vec!["Semibold".to_string(), " Demi".to_string()]),
            guard_gap: Some(8.0),
            max_size_tolerance: Some(1.0),
            min_title_chars: Some(5),
            ..Default::default()
        };
        let options = tuning.to_options().unwrap();
        assert_eq!(options.bold_keywords, vec!["Semibold", "Demi"]);
        assert_eq!(options.title_heading_guard_gap, 8.0);
        assert_eq!(options.max_size_tolerance, 1.0);
        assert_eq!(options.min_title_chars, 5);
        assert!(options.is_bold_font("Inter-SemiBold"));
        assert!(!options.is_bold_font("Inter-Bold"));
    }

    #[test]
    fn test_flags_parse_from_command_line() {
        let cli = Cli::try_parse_from([
            "pdf-outline",
            "outline",
            "doc.chars",
            "--source",
            "json",
            "--bold-keywords",
            "bold,heavy",
            "--guard-gap",
            "12",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Outline { source, tuning, .. }) => {
                assert_eq!(source.as_deref(), Some("json"));
                let options = tuning.to_options().unwrap();
                assert_eq!(options.bold_keywords, vec!["bold", "heavy"]);
                assert_eq!(options.title_heading_guard_gap, 12.0);
            }
            _ => panic!("expected outline command"),
        }
    }

    #[test]
    fn test_load_pages_with_named_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.chars");
        fs::write(&path, r#"[{"page": 1, "chars": []}]"#).unwrap();

        assert!(load_pages(&path, None).is_err());
        assert_eq!(load_pages(&path, Some("json")).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = TuningArgs {
            h3_delta: Some(5.0),
            ..Default::default()
        };
        assert!(tuning.extractor().is_err());
    }

    #[test]
    fn test_collect_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let inputs = collect_inputs(dir.path(), &SourceRegistry::with_defaults()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }
}
