//! stem-cluster
//!
//! Groups the entries of a corpus file into clusters and prints each cluster
//! under a two-word label.
//!
//! ```bash
//! stem-cluster 5 bios.txt
//! stem-cluster 5 bios.txt --stopwords            # reads ./stopwords.txt
//! stem-cluster 5 bios.txt --stopwords stop.txt --format json -v
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use stem_cluster::{load_corpus, ClusterConfig, ClusterPipeline, LabelPolicy, StopwordSet};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Cluster short documents and name each cluster
#[derive(Debug, Parser)]
#[command(name = "stem-cluster")]
#[command(version)]
#[command(about = "Cluster short documents by stemmed rarity scores and name each cluster")]
struct Cli {
    /// Minimum combined score for two documents to be connected (must be > 0)
    #[arg(allow_negative_numbers = true)]
    threshold: f64,

    /// Corpus file: blank-line separated entries, name on the first line
    corpus: PathBuf,

    /// Filter stopwords; without a value reads `stopwords.txt`
    #[arg(long, num_args = 0..=1, default_missing_value = "stopwords.txt")]
    stopwords: Option<PathBuf>,

    /// Tokens shorter than this are ignored
    #[arg(long, default_value_t = stem_cluster::config::DEFAULT_MIN_TOKEN_LEN)]
    min_token_len: usize,

    /// Stems found in at least this share of documents are dropped
    #[arg(long, default_value_t = stem_cluster::config::DEFAULT_PREVALENCE_CUTOFF)]
    prevalence_cutoff: f64,

    /// Label a one-word cluster with that word twice instead of failing
    #[arg(long)]
    pad_labels: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> ClusterConfig {
        let policy = if self.pad_labels {
            LabelPolicy::Pad
        } else {
            LabelPolicy::Strict
        };
        ClusterConfig::new(self.threshold)
            .with_min_token_len(self.min_token_len)
            .with_prevalence_cutoff(self.prevalence_cutoff)
            .with_stopwords(self.stopwords.is_some())
            .with_label_policy(policy)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    // reject a bad threshold before reading anything
    config.validate().context("invalid arguments")?;
    debug!(?config, "configuration");

    let records = load_corpus(&cli.corpus).context("loading corpus")?;
    let mut pipeline = ClusterPipeline::new(config);
    if let Some(path) = &cli.stopwords {
        let stopwords = StopwordSet::load(path).context("loading stopwords")?;
        pipeline = pipeline.with_stopwords(stopwords);
    }

    let clustering = pipeline.run(&records).context("clustering corpus")?;
    let report = clustering.report();
    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
