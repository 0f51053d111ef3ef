//! Batch command - split multiple statement PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use paysplit_core::{BatchResult, IngestOutcome, IngestReport, MemoryStore};

use super::split::{ingest_pages, load_config, split_file};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory; each input gets its own subdirectory
    #[arg(short, long, default_value = "pages")]
    output_dir: PathBuf,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue with the next file when one fails to load
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    batch: Option<BatchResult>,
    report: Option<IngestReport>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // One store across the whole run, so duplicates are caught across files.
    let store = MemoryStore::new();
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("statements");
        let file_dir = args.output_dir.join(stem);

        match split_file(&path, &file_dir, &config, None) {
            Ok(batch) => {
                let report = ingest_pages(&batch, &store);
                results.push(FileResult {
                    path,
                    batch: Some(batch),
                    report: Some(report),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        batch: None,
                        report: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    if args.summary {
        let summary_path = args.output_dir.join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful: Vec<_> = results.iter().filter(|r| r.batch.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    let pages_stored: usize = results
        .iter()
        .filter_map(|r| r.report.as_ref())
        .map(|r| r.stored().count())
        .sum();
    let pages_skipped: usize = results
        .iter()
        .filter_map(|r| r.report.as_ref())
        .map(|r| r.duplicates().count())
        .sum();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed, {} pages stored, {} duplicates skipped",
        style(successful.len()).green(),
        style(failed.len()).red(),
        pages_stored,
        pages_skipped
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "source",
        "page",
        "name",
        "date",
        "amount",
        "company",
        "filename",
        "status",
    ])?;

    for result in results {
        let source = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let Some(batch) = &result.batch else {
            wtr.write_record([
                source,
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or("error"),
            ])?;
            continue;
        };

        for page in &batch.pages {
            let status = result
                .report
                .as_ref()
                .and_then(|r| {
                    r.entries
                        .iter()
                        .find(|e| e.page_number == page.page_number)
                })
                .map(|e| match &e.outcome {
                    IngestOutcome::Stored(_) => "stored",
                    IngestOutcome::DuplicateSkipped => "duplicate",
                    IngestOutcome::Failed(_) => "store_error",
                })
                .unwrap_or("stored");

            wtr.write_record([
                source,
                &page.page_number.to_string(),
                &page.fields.name,
                &page.fields.date,
                &page
                    .fields
                    .amount
                    .map(|a| a.to_string())
                    .unwrap_or_default(),
                &page.fields.company,
                &page.filename,
                status,
            ])?;
        }

        for failure in &batch.failures {
            wtr.write_record([
                source,
                &failure.page_number.to_string(),
                "",
                "",
                "",
                "",
                "",
                &failure.kind.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
