use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_seqrules::scoring::{MatchPolicy, ScoreConfig};
use u_seqrules::MeasureCalculator;

#[derive(Parser, Debug)]
#[command(name = "seqrule-measures")]
#[command(version)]
#[command(about = "Recompute quality measures of sequential rules against a sequence database", long_about = None)]
struct Cli {
    /// Sequence database in SPMF format (`-1` ends an itemset, `-2` a sequence)
    #[arg(short, long, value_name = "FILE")]
    database: PathBuf,

    /// Rule file, one `a,b ==> c` rule per line
    #[arg(short, long, value_name = "FILE")]
    rules: PathBuf,

    /// Report destination
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Occurrence semantics (positional or scattered)
    #[arg(long, default_value_t = MatchPolicy::Positional)]
    policy: MatchPolicy,

    /// Keep counts already present on the rules instead of resetting them
    #[arg(long = "no-reset")]
    no_reset: bool,

    /// Enable debug output on stderr
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing subscriber; `RUST_LOG` is honoured either way.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = ScoreConfig::default()
        .with_policy(cli.policy)
        .with_reset_before_scoring(!cli.no_reset);
    let calculator = MeasureCalculator::new(config).context("invalid scoring options")?;

    let summary = calculator
        .calculate(&cli.database, &cli.rules, &cli.output)
        .with_context(|| {
            format!(
                "failed to score {} against {}",
                cli.rules.display(),
                cli.database.display()
            )
        })?;

    eprintln!(
        "{} rules scored against {} sequences ({} matched) -> {}",
        summary.rule_count,
        summary.sequence_count,
        summary.matched_rules,
        cli.output.display()
    );
    Ok(())
}
