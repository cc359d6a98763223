use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use sport_scout::snapshot::MetricSnapshot;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 2;
const EXIT_IO: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank sports for an athlete snapshot (default if no subcommand)
    Recommend {
        /// Path to the snapshot JSON (reads stdin when omitted)
        snapshot: Option<PathBuf>,
    },
    /// Report which required metrics the snapshot is missing
    Check {
        /// Path to the snapshot JSON (reads stdin when omitted)
        snapshot: Option<PathBuf>,
    },
    /// Print the active sport catalogue
    Profiles,
}

#[derive(Parser, Debug)]
#[command(name = "sport-scout")]
#[command(about = "Athlete sport recommendation CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a catalogue file (defaults to ~/.config/sport-scout/catalog.yaml,
    /// falling back to the built-in catalogue)
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Recommend { snapshot: None });
    let start_time = Instant::now();

    // Load and validate the catalogue at startup
    let catalog_path = cli.catalog.map(PathBuf::from);
    let catalog = match sport_scout::catalog::load_catalog(catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalogue error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = sport_scout::catalog::validate_catalog(&catalog) {
        eprintln!("Catalogue errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!("Loaded {} sport profiles", catalog.sports.len());
        for (i, sport) in catalog.sports.iter().enumerate() {
            eprintln!(
                "  Profile {}: {} ({} criteria)",
                i + 1,
                sport.name,
                sport.criteria.len()
            );
        }
    }

    let use_colors = sport_scout::output::should_use_colors();

    match command {
        Commands::Recommend { snapshot } => {
            let snapshot = load_snapshot_or_exit(snapshot, cli.verbose);

            let results = match sport_scout::scoring::score_athlete(&catalog, &snapshot) {
                Ok(results) => results,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_DATA);
                }
            };

            println!("{}", sport_scout::output::format_summary(&snapshot));
            println!();
            println!(
                "{}",
                sport_scout::output::format_recommendation_table(&results, use_colors)
            );
            println!();
            for (rank, result) in results.iter().enumerate() {
                println!(
                    "{}",
                    sport_scout::output::format_match_detail(result, rank, use_colors)
                );
                println!();
            }

            if cli.verbose {
                eprintln!(
                    "Scored {} sports in {:?}",
                    catalog.sports.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Check { snapshot } => {
            let snapshot = load_snapshot_or_exit(snapshot, cli.verbose);

            println!(
                "{}",
                sport_scout::output::format_sufficiency_report(&snapshot, use_colors)
            );

            let missing = sport_scout::metrics::Metric::REQUIRED
                .iter()
                .filter(|&&metric| snapshot.resolve(metric) <= 0.0)
                .count();
            if missing > 0 {
                eprintln!();
                eprintln!("{} required metrics are missing or empty.", missing);
                std::process::exit(EXIT_DATA);
            }
        }
        Commands::Profiles => {
            println!(
                "{}",
                sport_scout::output::format_catalog(&catalog, use_colors)
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_snapshot_or_exit(path: Option<PathBuf>, verbose: bool) -> MetricSnapshot {
    match read_snapshot(path) {
        Ok(snapshot) => {
            if verbose {
                eprintln!("Snapshot loaded");
            }
            snapshot
        }
        Err(e) => {
            eprintln!("Snapshot error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    }
}

fn read_snapshot(path: Option<PathBuf>) -> anyhow::Result<MetricSnapshot> {
    let content = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot at {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read snapshot from stdin")?;
            buffer
        }
    };

    let snapshot: MetricSnapshot =
        serde_json::from_str(&content).context("Failed to parse snapshot: invalid JSON")?;
    Ok(snapshot)
}
