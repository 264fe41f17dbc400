//! supera-cli: Command-line interface for semantic particle labeling.
//!
//! Reads simulation truth records as JSON, labels every event and writes
//! the resulting particle hierarchy.
#![allow(clippy::uninlined_format_args)]

mod io;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::info;
use std::path::PathBuf;
use std::time::Instant;
use supera_algorithms::{EventLabeler, EventLabels, MergeStatistics};
use supera_core::{LabelConfig, SemanticType};
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("labeling error: {0}")]
    Core(#[from] supera_core::Error),
}

/// Semantic types that may be merged into their ancestor.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fragment {
    /// Ionization electrons (eIoni)
    Ionization,
    /// Delta rays (muIoni, hIoni, muPairProd)
    Delta,
    /// Compton electrons
    Compton,
    /// Photo-electrons
    PhotoElectron,
    /// Electrons from unlisted processes
    OtherShower,
}

impl From<Fragment> for SemanticType {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Ionization => SemanticType::Ionization,
            Fragment::Delta => SemanticType::Delta,
            Fragment::Compton => SemanticType::Compton,
            Fragment::PhotoElectron => SemanticType::PhotoElectron,
            Fragment::OtherShower => SemanticType::OtherShower,
        }
    }
}

/// Semantic particle labeling for detector-simulation truth records.
#[derive(Parser)]
#[command(name = "supera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Label events and write the particle hierarchy as JSON
    Label {
        /// Input JSON file (array of events, each an array of records)
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Labeling configuration (JSON); missing keys use defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fragment types merged into their nearest valid ancestor
        #[arg(long, value_enum)]
        fragment: Vec<Fragment>,

        /// Skip the particle validity check
        #[arg(long)]
        no_validity_check: bool,
    },

    /// Label events and print per-event summaries
    Info {
        /// Input JSON file
        input: PathBuf,

        /// Labeling configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn load_config(path: Option<&PathBuf>) -> Result<LabelConfig> {
    match path {
        Some(path) => {
            info!("Reading configuration: {}", path.display());
            io::read_config(path)
        }
        None => Ok(LabelConfig::default()),
    }
}

fn total_stats(events: &[EventLabels]) -> MergeStatistics {
    let mut total = MergeStatistics::default();
    for event in events {
        total += event.stats;
    }
    total
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Label {
            input,
            output,
            config,
            fragment,
            no_validity_check,
        } => {
            let mut config = load_config(config.as_ref())?;
            if !fragment.is_empty() {
                config.fragment_types = fragment.into_iter().map(SemanticType::from).collect();
            }
            if no_validity_check {
                config.check_particle_validity = false;
            }
            let start = Instant::now();
            let labeler = EventLabeler::new(config)?;
            info!("Fragment types: {:?}", labeler.config().fragment_types);
            if !labeler.config().check_particle_validity {
                info!("Particle validity check disabled");
            }

            info!("Reading: {}", input.display());
            let events = io::read_events(&input)?;
            let labeled = labeler.label_events(&events)?;

            info!("Writing output to: {}", output.display());
            io::write_labels(&output, &labeled)?;

            let particles: usize = labeled.iter().map(|e| e.labels.len()).sum();
            let groups: usize = labeled.iter().map(|e| e.groups().count()).sum();
            let stats = total_stats(&labeled);

            eprintln!(
                "Labeled {} events in {:.2}s",
                labeled.len(),
                start.elapsed().as_secs_f64()
            );
            eprintln!("Particles: {}", particles);
            eprintln!("Groups: {}", groups);
            eprintln!(
                "Merges: {} (unresolved {}, cyclic {})",
                stats.merges, stats.unresolved, stats.cyclic
            );
        }

        Commands::Info { input, config } => {
            let labeler = EventLabeler::new(load_config(config.as_ref())?)?;
            let events = io::read_events(&input)?;
            let labeled = labeler.label_events(&events)?;

            println!("File: {}", input.display());
            println!("Events: {}", labeled.len());

            for (idx, event) in labeled.iter().enumerate() {
                println!(
                    "Event {}: {} particles, {} groups, {} merges in {} passes",
                    idx,
                    event.labels.len(),
                    event.groups().count(),
                    event.stats.merges,
                    event.stats.passes
                );
                let counts = event.count_by_type();
                for semantic_type in SemanticType::ALL {
                    if let Some(count) = counts.get(&semantic_type) {
                        println!("  {:<14} {:>6}", semantic_type.name(), count);
                    }
                }
                if event.stats.unresolved > 0 || event.stats.cyclic > 0 {
                    println!(
                        "  unresolved fragments: {}, cyclic: {}",
                        event.stats.unresolved, event.stats.cyclic
                    );
                }
                if event.out_of_bounds > 0 {
                    println!("  out of world bounds: {}", event.out_of_bounds);
                }
            }
        }
    }

    Ok(())
}
