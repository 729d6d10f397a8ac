//! Partition Check CLI Tool
//!
//! Draws many random partitions and reports how often each player lands on
//! team 1. With an even selection every frequency should sit close to 0.5.
//!
//! Usage:
//!   cargo run --bin partition-check -- --players 10 --trials 20000
//!   cargo run --bin partition-check -- --roster data/players.json --seed 7

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use team_randomizer::roster::{JsonFileRosterProvider, RosterProvider, RosterStore};
use team_randomizer::team::TeamPartitioner;
use team_randomizer::types::{PlayerId, RosterEntry};
use team_randomizer::utils::team1_size;
use tracing::info;

#[derive(Parser)]
#[command(name = "partition-check")]
#[command(about = "Measure how evenly random team draws spread players")]
struct Cli {
    /// Roster file; every player in it is selected
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Size of the synthetic roster used when no file is given
    #[arg(short, long, default_value = "10")]
    players: usize,

    /// Number of draws
    #[arg(short, long, default_value = "10000")]
    trials: usize,

    /// Shuffle seed
    #[arg(short, long)]
    seed: Option<u64>,
}

fn synthetic_roster(players: usize) -> Vec<RosterEntry> {
    (1..=players as PlayerId)
        .map(|id| RosterEntry::new(id, format!("player{}", id), 1000))
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let entries = match &cli.roster {
        Some(path) => JsonFileRosterProvider::new(path).load_roster()?,
        None => synthetic_roster(cli.players),
    };
    if entries.is_empty() {
        anyhow::bail!("Roster is empty, nothing to draw");
    }
    if cli.trials == 0 {
        anyhow::bail!("Need at least one trial");
    }

    let mut seen = HashSet::new();
    if let Some(entry) = entries.iter().find(|entry| !seen.insert(entry.id)) {
        anyhow::bail!(
            "Duplicate player id {} ({}), frequencies are reported per id",
            entry.id,
            entry.name
        );
    }

    let mut roster = RosterStore::from_entries(&entries);
    roster.select_all();

    let selected = roster.selected_count();
    let expected = team1_size(selected) as f64 / selected as f64;
    info!(
        "Drawing {} partitions of {} players (expected team 1 frequency {:.3})",
        cli.trials, selected, expected
    );

    let mut partitioner = TeamPartitioner::from_seed_option(cli.seed);
    let mut team1_counts: HashMap<PlayerId, usize> = HashMap::new();
    for _ in 0..cli.trials {
        for member in partitioner.partition(&roster).team1 {
            *team1_counts.entry(member.player_id).or_default() += 1;
        }
    }

    let mut max_deviation: f64 = 0.0;
    println!("{:>5}  {:<20} {:>9}", "id", "name", "team 1");
    for player in roster.players() {
        let frequency =
            team1_counts.get(&player.id).copied().unwrap_or_default() as f64 / cli.trials as f64;
        max_deviation = max_deviation.max((frequency - expected).abs());
        println!("{:>5}  {:<20} {:>9.4}", player.id, player.name, frequency);
    }
    println!("Max deviation from {:.3}: {:.4}", expected, max_deviation);

    Ok(())
}
