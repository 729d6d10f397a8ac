//! Main entry point for the Team Randomizer
//!
//! Loads configuration and the roster, then runs an interactive session on
//! the terminal: select today's players, draw teams, enter the final score.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use team_randomizer::config::AppConfig;
use team_randomizer::roster::JsonFileRosterProvider;
use team_randomizer::service::{Command, MatchSession, HELP_TEXT};
use team_randomizer::types::{JoinKey, TeamSide, TiePolicy};
use team_randomizer::utils::format_delta;
use tracing::{error, info, warn};

/// Team Randomizer - random teams and rating tracking for pickup matches
#[derive(Parser)]
#[command(
    name = "team-randomizer",
    version,
    about = "Draw random teams from today's players and track ratings",
    long_about = "Team Randomizer keeps a roster of rated players, splits the players \
                 selected for today into two random teams, and moves every participant's \
                 rating up or down once the final score is entered."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Roster file override
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Override roster file (JSON array of {id, name, rating})"
    )]
    roster: Option<PathBuf>,

    /// Shuffle seed override
    #[arg(long, value_name = "SEED", help = "Fix the shuffle seed to replay draws")]
    seed: Option<u64>,

    /// Join key override
    #[arg(
        long,
        value_name = "KEY",
        help = "How team entries map back to players (by-name, by-id)"
    )]
    join_key: Option<JoinKey>,

    /// Tie policy override
    #[arg(
        long,
        value_name = "POLICY",
        help = "What a draw does to ratings (both-lose, neutral)"
    )]
    tie_policy: Option<TiePolicy>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and roster, then exit)
    #[arg(long, help = "Validate configuration and roster and exit")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment, file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(roster) = &args.roster {
        config.roster.path = roster.clone();
    }
    if let Some(seed) = args.seed {
        config.teams.seed = Some(seed);
    }
    if let Some(join_key) = args.join_key {
        config.rating.join_key = join_key;
    }
    if let Some(tie_policy) = args.tie_policy {
        config.rating.tie_policy = tie_policy;
    }
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    team_randomizer::config::validate_config(&config)?;
    Ok(config)
}

/// Display startup banner with configuration summary
fn display_startup_banner(config: &AppConfig) {
    info!("Starting {} v{}", config.service.name, team_randomizer::VERSION);
    info!("   Roster: {}", config.roster.path.display());
    info!("   Rating adjustment: {}", config.rating.adjustment);
    info!("   Join key: {}", config.rating.join_key);
    info!("   Tie policy: {}", config.rating.tie_policy);
    match config.teams.seed {
        Some(seed) => info!("   Shuffle seed: {}", seed),
        None => info!("   Shuffle seed: random"),
    }
}

fn print_roster(session: &MatchSession) {
    for player in session.roster_view() {
        println!(
            "[{}] {:>3}  {:<20} {:>6}  /ranks/{}.svg",
            if player.selected { "x" } else { " " },
            player.id,
            player.name,
            player.rating,
            player.tier
        );
    }
    println!("{} selected", session.roster().selected_count());
}

fn print_teams(session: &MatchSession) {
    if session.assignment().is_empty() {
        println!("No teams drawn yet");
        return;
    }

    let rows = session.team_view();
    for side in [TeamSide::Team1, TeamSide::Team2] {
        println!(
            "{} (total {})",
            side,
            session.assignment().total_rating(side)
        );
        for row in rows.iter().filter(|row| row.side == side) {
            println!(
                "    {:<20} {:>6}  /ranks/{}.svg",
                row.name, row.rating, row.tier
            );
        }
    }
}

fn print_history(session: &MatchSession) {
    if session.history().is_empty() {
        println!("No matches played yet");
        return;
    }

    for (index, record) in session.history().iter().enumerate() {
        println!(
            "#{} {}  {} : {}  {}",
            index + 1,
            record.played_at.format("%H:%M"),
            record.score1,
            record.score2,
            record.outcome
        );
    }
}

/// Run one command; returns false when the session should end
fn execute(
    session: &mut MatchSession,
    provider: &JsonFileRosterProvider,
    command: Command,
) -> Result<bool> {
    match command {
        Command::List => print_roster(session),
        Command::Toggle(ids) => {
            for id in ids {
                match session.toggle_selected(id) {
                    Some(true) => println!("Player {} selected", id),
                    Some(false) => println!("Player {} unselected", id),
                    None => println!("No player with id {}", id),
                }
            }
        }
        Command::Randomize => {
            session.randomize_teams();
            print_teams(session);
        }
        Command::Teams => print_teams(session),
        Command::Score { score1, score2 } => {
            if session.assignment().is_empty() {
                warn!("Scores submitted before any teams were drawn");
                println!("Draw teams with 'randomize' before entering a score");
                return Ok(true);
            }
            let update = session.submit_scores(score1, score2);
            println!("{}", update.outcome);
            for change in &update.rating_changes {
                println!(
                    "    {:<20} {:>6} -> {:>6} ({})",
                    change.name,
                    change.old_rating,
                    change.new_rating,
                    format_delta(change.delta())
                );
            }
        }
        Command::History => print_history(session),
        Command::Reload => {
            session.reload_from(provider)?;
            println!("Roster reloaded, {} players", session.roster().len());
        }
        Command::Help => println!("{}", HELP_TEXT),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn run_session(mut session: MatchSession, provider: &JsonFileRosterProvider) -> Result<()> {
    println!("{}", HELP_TEXT);
    print_roster(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => match execute(&mut session, provider, command) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => error!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }

    info!(
        "Session finished after {} matches",
        session.history().len()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_startup_banner(&config);

    let provider = JsonFileRosterProvider::new(&config.roster.path);
    let session = match MatchSession::from_config(&config, &provider) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to start session: {}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        info!(
            "Configuration and roster valid ({} players), exiting",
            session.roster().len()
        );
        return Ok(());
    }

    run_session(session, &provider)
}
