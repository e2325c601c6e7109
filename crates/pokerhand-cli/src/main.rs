use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use pokerhand_cli::config::HandConfig;
use pokerhand_cli::logging::init_logging;
use pokerhand_cli::report::evaluate_hands;

/// Poker hand classifier.
#[derive(Debug, Parser)]
#[command(
    name = "pokerhand",
    author,
    version,
    about = "Classify poker hands with wild cards, low aces and suppressed categories"
)]
struct Cli {
    /// Cards of one hand (e.g. 10H JH QH KH AH, or JOKER). Replaces `hands` from the config.
    #[arg(value_name = "CARD")]
    cards: Vec<String>,

    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Let aces also play low (A-2-3-4-5).
    #[arg(long)]
    ace_low: bool,

    /// Add a wild card: an exact card (JH) or a rank (2 = every two). Repeatable.
    #[arg(short, long, value_name = "TOKEN")]
    wild: Vec<String>,

    /// Override the hand size the categories are measured against.
    #[arg(short = 'n', long, value_name = "COUNT")]
    cards_to_evaluate: Option<usize>,

    /// Skip a category (e.g. royalflush, 2pair). Repeatable.
    #[arg(long, value_name = "CATEGORY")]
    dont_allow: Vec<String>,

    /// Report pairs at or above this rank as `minpair`.
    #[arg(long, value_name = "RANK")]
    min_pair: Option<String>,

    /// Print one JSON object per hand.
    #[arg(long)]
    json: bool,

    /// Exit after validating the configuration (no hands are evaluated).
    #[arg(long)]
    validate_only: bool,

    /// Enable structured logs to stderr (or `logging.file`) at this level.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => HandConfig::from_path(path)?,
        None => HandConfig::default(),
    };

    if !cli.cards.is_empty() {
        config.hands = vec![cli.cards];
    }

    if cli.ace_low {
        config.options.ace_can_be_low = true;
    }

    config.options.wild_cards.extend(cli.wild);
    config.options.dont_allow.extend(cli.dont_allow);

    if let Some(count) = cli.cards_to_evaluate {
        config.options.cards_to_evaluate = Some(count);
    }

    if let Some(rank) = cli.min_pair {
        config.options.min_pair = Some(rank);
    }

    if let Some(level) = cli.log_level {
        config.logging.enable_structured = true;
        config.logging.tracing_level = level;
    }

    config.validate()?;

    if config.hands.is_empty() {
        bail!("no hands to evaluate: pass CARD arguments or list `hands` in the config file");
    }

    let _logging_guard = init_logging(&config.logging)?;

    if cli.validate_only {
        println!(
            "Configuration valid: {} hand{} ready to evaluate.",
            config.hands.len(),
            if config.hands.len() == 1 { "" } else { "s" }
        );
        return Ok(());
    }

    let reports = evaluate_hands(&config.hands, &config.options);
    for report in &reports {
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report.to_text());
        }
    }

    if let Some(first) = reports.first() {
        if !cli.json {
            for entry in &first.ignored {
                eprintln!("warning: {entry}");
            }
        }
    }

    let failures = reports.iter().filter(|report| report.is_error()).count();
    if failures > 0 {
        for report in reports.iter().filter(|report| report.is_error()) {
            if let Some(error) = report.error.as_deref() {
                eprintln!("error: {error}");
            }
        }
        bail!(
            "{failures} of {} hand{} could not be evaluated",
            reports.len(),
            if reports.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
