//! Guest unification entry point.
//!
//! Loads configuration, runs one unification over the configured sources,
//! writes the three JSON outputs and prints a coverage report.
//!
//! # Usage
//!
//! ```bash
//! # Use paths from the environment (or .env)
//! cargo run
//!
//! # Override individual paths
//! cargo run -- --identities data/guests.json --output-dir out/
//! ```

use guest_unifier::application::services::UnificationService;
use guest_unifier::config::Config;
use guest_unifier::domain::report::UnificationReport;
use guest_unifier::infrastructure::output::{JsonOutputWriter, WrittenOutputs};
use guest_unifier::infrastructure::persistence::JsonSourceRepository;
use guest_unifier::logging;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// Unify guest profiles with enrichment and company intelligence.
#[derive(Parser)]
#[command(name = "guest-unifier")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Guest directory JSON file (overrides UNIFY_IDENTITIES_FILE)
    #[arg(long)]
    identities: Option<PathBuf>,

    /// Enrichment batch directory (overrides UNIFY_ENRICHMENT_DIR)
    #[arg(long)]
    enrichment_dir: Option<PathBuf>,

    /// Intelligence batch directory (overrides UNIFY_INTELLIGENCE_DIR)
    #[arg(long)]
    intelligence_dir: Option<PathBuf>,

    /// Output directory (overrides UNIFY_OUTPUT_DIR)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Unmatched domains listed in the console report (overrides UNMATCHED_SAMPLE_LIMIT)
    #[arg(long)]
    sample_limit: Option<usize>,

    /// Log progress every N guests (overrides PROGRESS_INTERVAL)
    #[arg(long)]
    progress_interval: Option<usize>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.identities {
            config.identities_file = path;
        }
        if let Some(path) = self.enrichment_dir {
            config.enrichment_dir = path;
        }
        if let Some(path) = self.intelligence_dir {
            config.intelligence_dir = path;
        }
        if let Some(path) = self.output_dir {
            config.output_dir = path;
        }
        if let Some(limit) = self.sample_limit {
            config.unmatched_sample_limit = limit;
        }
        if let Some(interval) = self.progress_interval {
            config.progress_interval = interval;
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    logging::init(&config.log_level, &config.log_format)?;
    config.print_summary();

    let repository = Arc::new(JsonSourceRepository::from_config(&config));
    let service =
        UnificationService::new(repository).with_progress_interval(config.progress_interval);

    let unification = service.run().context("Unification failed")?;

    let written = JsonOutputWriter::new(&config.output_dir)
        .write(&unification)
        .context("Failed to write outputs")?;

    print_report(&unification.report, &written, config.unmatched_sample_limit);

    Ok(())
}

/// Prints coverage, domain matching and output locations.
fn print_report(report: &UnificationReport, written: &WrittenOutputs, sample_limit: usize) {
    let total = report.total_guests;

    println!();
    println!("{}", "📊 Unification Report".bright_blue().bold());
    println!();
    println!(
        "  Total guests: {}",
        total.to_string().bright_white().bold()
    );
    println!();

    println!("{}", "Coverage:".bright_white().bold());
    let rows = [
        ("Profile link", report.with_profile_link, report.coverage.profile_link),
        ("Enrichment", report.with_enrichment, report.coverage.enrichment),
        ("Intelligence", report.with_intelligence, report.coverage.intelligence),
        ("Email", report.with_email, report.coverage.email),
        ("Company", report.with_company, report.coverage.company),
    ];
    for (label, count, pct) in rows {
        println!(
            "  {:<14} {:>6}/{:<6} {}",
            label,
            count.to_string().cyan(),
            total,
            format!("({:.1}%)", pct).bright_black()
        );
    }
    println!(
        "  {:<14} {:>6}",
        "No enrichment",
        report.without_enrichment().to_string().yellow()
    );
    println!();

    println!("{}", "Domain matching:".bright_white().bold());
    println!(
        "  Resolved domains: {}",
        report.with_resolved_domain.to_string().cyan()
    );
    println!(
        "  Matched:          {}",
        report.domain_matches.to_string().green()
    );
    println!(
        "  Unmatched:        {}",
        report.domain_mismatches.to_string().yellow()
    );

    let (sample, remaining) = report.unmatched_sample(sample_limit);
    if !sample.is_empty() {
        println!();
        println!(
            "{}",
            format!("Unmatched domains (first {}):", sample.len()).bright_white()
        );
        for unmatched in sample {
            println!(
                "  - {} {}",
                unmatched.domain.as_str().yellow(),
                format!("({})", unmatched.username).bright_black()
            );
        }
        if remaining > 0 {
            println!("  {}", format!("... and {} more", remaining).bright_black());
        }
    }
    println!();

    println!("{}", "Outputs:".bright_white().bold());
    println!(
        "  {} {}",
        written.all_records.display().to_string().cyan(),
        format!("({} profiles)", written.all_count).bright_black()
    );
    println!(
        "  {} {}",
        written.intelligence_records.display().to_string().cyan(),
        format!("({} profiles)", written.intelligence_count).bright_black()
    );
    println!("  {}", written.report.display().to_string().cyan());
    println!();
    println!("{}", "✅ Unification complete".green().bold());
}
