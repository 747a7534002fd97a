//! Spree replay tool
//!
//! Runs a recorded JSONL session log through the spree tracker and prints
//! what a live host would have announced, plus the bounty standings.

use std::path::PathBuf;

use clap::Parser;
use spree_tracker::{
    default_config_toml, default_templates_toml, read_session_log, MessageTemplates, Replay,
    ReplayReport, SpreeError, SpreeTracker, TrackerConfig,
};

/// Command line arguments for the replay tool
#[derive(Parser, Debug)]
#[command(name = "spree-replay")]
#[command(about = "Replay a session log through the spree tracker")]
struct Args {
    /// JSONL session log to replay
    #[arg(required_unless_present_any = ["print_default_config", "print_default_templates"])]
    log: Option<PathBuf>,

    /// Tracker configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Announcement templates (TOML)
    #[arg(long)]
    templates: Option<PathBuf>,

    /// Print actions as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,

    /// Print the default announcement templates and exit
    #[arg(long)]
    print_default_templates: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return;
    }
    if args.print_default_templates {
        print!("{}", default_templates_toml());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), SpreeError> {
    let config = match &args.config {
        Some(path) => TrackerConfig::from_file(path)?,
        None => TrackerConfig::default(),
    };
    let templates = match &args.templates {
        Some(path) => MessageTemplates::from_file(path)?,
        None => MessageTemplates::default(),
    };

    let Some(log) = &args.log else {
        return Ok(());
    };
    let events = read_session_log(log)?;
    tracing::info!("Loaded {} events from {:?}", events.len(), log);

    let report = Replay::new(SpreeTracker::new(config, templates)).run(&events);

    if args.json {
        print_json(&report)?;
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_json(report: &ReplayReport) -> Result<(), SpreeError> {
    for action in &report.actions {
        println!("{}", action.to_jsonl()?);
    }
    Ok(())
}

fn print_text(report: &ReplayReport) {
    println!("Spree Replay");
    println!("============");
    println!("Events: {}", report.events);
    println!();

    for line in report.transcript() {
        println!("  {}", line);
    }

    if !report.standings.is_empty() {
        println!();
        println!("Bounty standings:");
        for (id, standing) in &report.standings {
            println!(
                "  {:>6}  +{:<4} -{:<4} net {}",
                id,
                standing.wins,
                standing.losses,
                standing.net()
            );
        }
    }

    if !report.final_streaks.is_empty() {
        println!();
        println!("Streaks at end of session:");
        for (id, streak) in &report.final_streaks {
            println!("  {:>6}  {}", id, streak);
        }
    }
}
