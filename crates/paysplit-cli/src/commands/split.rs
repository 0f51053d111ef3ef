//! Split command - process a single statement PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use paysplit_core::{
    BatchProcessor, BatchResult, CancelToken, IngestOutcome, IngestReport, IngestionGate,
    MemoryStore, PaysplitConfig, ProgressFn, StatementStore,
};

/// Arguments for the split command.
#[derive(Args)]
pub struct SplitArgs {
    /// Input statement PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory for the page files (default: "<input stem>_pages")
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write a JSON summary of the batch into the output directory
    #[arg(long)]
    summary: bool,

    /// Abort on the first failed page instead of skipping it
    #[arg(long)]
    strict: bool,
}

pub async fn run(args: SplitArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.strict {
        config.batch.stop_on_page_error = true;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        let stem = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("statements");
        PathBuf::from(format!("{}_pages", stem))
    });

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message("Splitting...");

    let result = split_file(&args.input, &output_dir, &config, Some(&pb))?;
    let report = ingest_pages(&result, &MemoryStore::new());

    pb.finish_with_message("Done");

    print_report(&result, &report);

    if args.summary {
        let summary_path = output_dir.join("summary.json");
        write_summary(&summary_path, &result)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

/// Load configuration from the given path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PaysplitConfig> {
    Ok(if let Some(path) = config_path {
        PaysplitConfig::from_file(Path::new(path))?
    } else {
        PaysplitConfig::default()
    })
}

/// Run one batch over `input` and write the page files into `output_dir`.
pub fn split_file(
    input: &Path,
    output_dir: &Path,
    config: &PaysplitConfig,
    pb: Option<&ProgressBar>,
) -> anyhow::Result<BatchResult> {
    let data = fs::read(input)?;

    let processor = BatchProcessor::with_config(config.clone());
    let result = match pb {
        Some(pb) => {
            let mut sink = ProgressFn(|pct: f64| pb.set_position(pct.round() as u64));
            processor.process_with(&data, &mut sink, &CancelToken::new())?
        }
        None => processor.process(&data)?,
    };

    fs::create_dir_all(output_dir)?;
    for page in &result.pages {
        // Overwrite on collision, same as regenerating the page would.
        let path = output_dir.join(&page.filename);
        fs::write(&path, &page.page_bytes)?;
        debug!("wrote {}", path.display());
    }

    Ok(result)
}

/// Run the extracted pages through the dedup gate.
pub fn ingest_pages<S: StatementStore>(result: &BatchResult, store: S) -> IngestReport {
    IngestionGate::new(store).ingest_batch(&result.pages)
}

fn print_report(result: &BatchResult, report: &IngestReport) {
    println!();
    println!(
        "{} Processed {}/{} pages",
        style("✓").green(),
        result.processed(),
        result.total()
    );

    for entry in &report.entries {
        match &entry.outcome {
            IngestOutcome::Stored(_) => {
                println!("  {} {}", style("+").green(), entry.filename);
            }
            IngestOutcome::DuplicateSkipped => {
                println!(
                    "  {} {} (duplicate, skipped)",
                    style("=").yellow(),
                    entry.filename
                );
            }
            IngestOutcome::Failed(e) => {
                println!("  {} {}: {}", style("x").red(), entry.filename, e);
            }
        }
    }

    if !result.failures.is_empty() {
        println!();
        println!("{}", style("Failed pages:").red());
        for failure in &result.failures {
            println!("  - {}", failure);
        }
    }
}

fn write_summary(path: &Path, result: &BatchResult) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(result)?;
    fs::write(path, content)?;
    Ok(())
}
