use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use pubmed_trials::table::{self, OutputFormat};
use pubmed_trials::{ClientConfig, DateRange, MonthDate, Pipeline, PipelineConfig, PubMedClient};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "pubmed-trials",
    about = "Find PubMed clinical-trial publications for substance/disease pairs",
    long_about = "Reads a CSV of (active_substance, disease_name) pairs, searches PubMed for \
                  clinical-trial publications on each pair and writes one row per matched \
                  publication with its year, ClinicalTrials.gov IDs and publication types"
)]
struct Cli {
    /// CSV file with `active_substance` and `disease_name` columns
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: jsonl or json
    #[arg(short, long, default_value = "jsonl")]
    format: OutputFormat,

    /// Maximum PMIDs returned per search
    #[arg(long, default_value_t = pubmed_trials::config::DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Earliest publication month (YYYY/MM)
    #[arg(long, default_value = "2000/01")]
    min_date: MonthDate,

    /// Latest publication month (YYYY/MM)
    #[arg(long, default_value = "2020/08")]
    max_date: MonthDate,

    /// Contact email for NCBI requests
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "pubmed-trials")]
    tool: String,

    /// HTTP request timeout in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if cli.min_date > cli.max_date {
        anyhow::bail!(
            "--min-date {} is after --max-date {}",
            cli.min_date,
            cli.max_date
        );
    }

    let mut config = ClientConfig::new()
        .with_tool(&cli.tool)
        .with_timeout(Duration::from_secs(cli.timeout));
    if let Some(email) = &cli.email {
        config = config.with_email(email);
    }

    let pipeline_config = PipelineConfig::new()
        .with_page_size(cli.page_size)
        .with_date_range(DateRange::new(cli.min_date, cli.max_date));

    let pairs = table::load_pairs(&cli.input)
        .with_context(|| format!("Failed to load input pairs from {}", cli.input.display()))?;

    let pipeline = Pipeline::from_client(PubMedClient::with_config(config), pipeline_config);
    let rows = pipeline.run(&pairs).await.context("Pipeline run failed")?;

    match &cli.output {
        Some(path) => table::save_rows(path, &rows, cli.format)
            .with_context(|| format!("Failed to write results to {}", path.display()))?,
        None => table::write_rows(std::io::stdout().lock(), &rows, cli.format)
            .context("Failed to write results to stdout")?,
    }

    info!(rows = rows.len(), "Done");
    Ok(())
}
