//! CLI tool for preparing domain lists.
//!
//! Builds the flat domain lists that feed the company-intelligence crawler,
//! using the same normalization the unifier joins on.
//!
//! # Usage
//!
//! ```bash
//! # Collect domains from enrichment batches
//! cargo run --bin domains -- extract --output data/unique_domains.txt
//!
//! # Normalize, validate and deduplicate a list in place
//! cargo run --bin domains -- clean data/unique_domains.txt
//!
//! # Split a list into 10 files
//! cargo run --bin domains -- split data/unique_domains.txt --parts 10 --output-dir data/domain_batches
//! ```
//!
//! # Environment Variables
//!
//! - `UNIFY_ENRICHMENT_DIR` (optional): default enrichment directory for `extract`

use guest_unifier::config::Config;
use guest_unifier::infrastructure::persistence::{
    read_domain_list, read_enrichment_dir, write_domain_list, write_split_files,
};
use guest_unifier::logging;
use guest_unifier::utils::domain_list::{
    SplitStrategy, clean_domains, extract_domains, split_domains,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Examples shown for query-stripped and invalid lines.
const EXAMPLE_LIMIT: usize = 5;

/// CLI tool for domain lists.
#[derive(Parser)]
#[command(name = "domains")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract unique domains from enrichment batches
    Extract {
        /// Enrichment batch directory (defaults to UNIFY_ENRICHMENT_DIR)
        #[arg(short, long)]
        enrichment_dir: Option<PathBuf>,

        /// Output list file
        #[arg(short, long, default_value = "data/unique_domains.txt")]
        output: PathBuf,
    },

    /// Normalize, validate and deduplicate a domain list
    Clean {
        /// Input list file
        input: PathBuf,

        /// Output list file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split a domain list into N files
    Split {
        /// Input list file
        input: PathBuf,

        /// Number of output files
        #[arg(short = 'n', long, default_value = "10")]
        parts: NonZeroUsize,

        /// How lines are distributed across files
        #[arg(short, long, value_enum, default_value_t = SplitStrategy::Chunked)]
        strategy: SplitStrategy,

        /// Directory for domains_01.txt ... domains_NN.txt
        #[arg(short, long, default_value = "data/domain_batches")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    logging::init(&config.log_level, &config.log_format)?;

    match cli.command {
        Commands::Extract {
            enrichment_dir,
            output,
        } => {
            let dir = enrichment_dir.unwrap_or(config.enrichment_dir);
            handle_extract(dir, output)
        }
        Commands::Clean { input, output } => {
            let output = output.unwrap_or_else(|| input.clone());
            handle_clean(input, output)
        }
        Commands::Split {
            input,
            parts,
            strategy,
            output_dir,
        } => handle_split(input, parts, strategy, output_dir),
    }
}

/// Extracts candidate domains from every enrichment batch.
fn handle_extract(dir: PathBuf, output: PathBuf) -> Result<()> {
    println!("{}", "🔎 Extract Domains".bright_blue().bold());
    println!();

    let batches = read_enrichment_dir(&dir)
        .with_context(|| format!("Failed to read enrichment from {}", dir.display()))?;
    let envelopes: usize = batches.iter().map(|b| b.datas.len()).sum();

    let report = extract_domains(&batches);
    write_domain_list(&output, &report.domains).context("Failed to write domain list")?;

    println!(
        "  Batches:    {}",
        batches.len().to_string().bright_white()
    );
    println!("  Profiles:   {}", envelopes.to_string().bright_white());
    println!(
        "  Candidates: {}",
        report.candidates.to_string().bright_white()
    );
    println!("  Rejected:   {}", report.rejected.to_string().yellow());
    println!();
    print_sample(report.domains.iter().map(|d| d.as_str()));
    println!(
        "{} {} unique domains → {}",
        "✅".green(),
        report.domains.len().to_string().bright_white().bold(),
        output.display().to_string().cyan()
    );
    println!();

    Ok(())
}

/// Cleans a list file, reporting what changed.
fn handle_clean(input: PathBuf, output: PathBuf) -> Result<()> {
    println!("{}", "🧹 Clean Domains".bright_blue().bold());
    println!();

    let lines = read_domain_list(&input)?;
    let report = clean_domains(lines.iter().map(String::as_str));

    write_domain_list(&output, &report.domains).context("Failed to write domain list")?;

    println!("{}", "Statistics:".bright_white().bold());
    println!("  Original:         {}", report.original.to_string().bright_white());
    println!("  Modified:         {}", report.modified.to_string().cyan());
    println!(
        "  Query stripped:   {}",
        report.query_stripped.len().to_string().cyan()
    );
    println!("  Invalid removed:  {}", report.invalid.len().to_string().yellow());
    println!("  Duplicates:       {}", report.duplicates.to_string().yellow());
    println!(
        "  Final:            {}",
        report.domains.len().to_string().green().bold()
    );
    println!("  Reduction:        {}", report.reduction());
    println!();

    print_examples(
        "Query strings removed:",
        report
            .query_stripped
            .iter()
            .map(|(from, to)| format!("{} → {}", from, to)),
        report.query_stripped.len(),
    );
    print_examples(
        "Invalid domains removed:",
        report.invalid.iter().cloned(),
        report.invalid.len(),
    );

    print_sample(report.domains.iter().map(|d| d.as_str()));
    println!(
        "{} {} clean unique domains → {}",
        "✅".green(),
        report.domains.len().to_string().bright_white().bold(),
        output.display().to_string().cyan()
    );
    println!();

    Ok(())
}

/// Splits a list file into exactly `parts` files.
fn handle_split(
    input: PathBuf,
    parts: NonZeroUsize,
    strategy: SplitStrategy,
    output_dir: PathBuf,
) -> Result<()> {
    println!("{}", "✂️  Split Domains".bright_blue().bold());
    println!();

    let domains = read_domain_list(&input)?;
    let split = split_domains(&domains, parts, strategy);
    let files = write_split_files(&output_dir, &split).context("Failed to write split files")?;

    println!(
        "  Loaded {} domains, {} files ({:?})",
        domains.len().to_string().bright_white(),
        parts.get().to_string().bright_white(),
        strategy
    );
    println!();

    for (path, count) in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {:<18} {}", name.cyan(), count.to_string().bright_white());
    }

    let written: usize = files.iter().map(|(_, count)| count).sum();
    let verdict = if written == domains.len() {
        "✓ Yes".green()
    } else {
        "✗ No".red()
    };
    println!();
    println!(
        "  Written: {}  Original: {}  Match: {}",
        written, domains.len(), verdict
    );
    println!();
    println!(
        "{} {} files in {}",
        "✅".green(),
        files.len().to_string().bright_white().bold(),
        output_dir.display().to_string().cyan()
    );
    println!();

    Ok(())
}

fn print_examples(title: &str, items: impl Iterator<Item = String>, total: usize) {
    if total == 0 {
        return;
    }

    println!("{}", title.bright_white());
    for item in items.take(EXAMPLE_LIMIT) {
        println!("  - {}", item.bright_black());
    }
    if total > EXAMPLE_LIMIT {
        println!("  ... and {} more", total - EXAMPLE_LIMIT);
    }
    println!();
}

fn print_sample<'a>(domains: impl Iterator<Item = &'a str>) {
    let sample: Vec<&str> = domains.take(10).collect();
    if sample.is_empty() {
        return;
    }

    println!("{}", "Sample:".bright_white());
    for domain in sample {
        println!("  - {}", domain);
    }
    println!();
}
