use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use playoff_core::constants::{DEFAULT_SAMPLES, DEFAULT_STRENGTH_WEIGHT, OUTCOMES_PER_GAME};
use playoff_core::{
    current_standings, data, run_projection, teams_by_probability, GameOverrides, League,
    ProjectionMode, ProjectionParams, ProjectionResult, TeamProbability,
};

#[derive(Parser)]
#[command(
    name = "playoff-odds",
    about = "Project playoff qualification odds from the remaining schedule",
    version
)]
struct Cli {
    /// Projection strategy: auto, exact or monte-carlo.
    #[arg(long, default_value_t = ProjectionMode::Auto)]
    mode: ProjectionMode,

    /// Monte Carlo trial count.
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: u64,

    /// Strength weight in [0, 1]; 0 treats every game as a coin flip.
    #[arg(long, default_value_t = DEFAULT_STRENGTH_WEIGHT)]
    weight: f64,

    /// Seed for the Monte Carlo sampler (default: entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Force a game's outcome, as GAME=OUTCOME (repeatable). Game indices
    /// are the bracketed numbers in the upcoming-games list; outcomes are
    /// slots 0-4 in canonical order.
    #[arg(long = "force", value_name = "GAME=OUTCOME")]
    force: Vec<String>,

    /// File of game_index,outcome_index override lines.
    #[arg(long, value_name = "FILE")]
    overrides_file: Option<PathBuf>,

    /// League dataset JSON; the bundled EHL dataset is used when omitted.
    #[arg(long, value_name = "FILE")]
    league: Option<PathBuf>,

    /// Emit the JSON report instead of tables.
    #[arg(long)]
    json: bool,

    /// Also write the JSON report to this file.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionReport<'a> {
    generated_at: String,
    mode_used: ProjectionMode,
    denominator: f64,
    scenario_count: u64,
    teams: &'a [TeamProbability],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.samples == 0 {
        bail!("--samples must be a positive number");
    }
    if !(0.0..=1.0).contains(&cli.weight) {
        bail!("--weight must be in [0, 1], got {}", cli.weight);
    }

    let league = load_league(&cli)?;
    let overrides = collect_overrides(&cli, &league)?;

    let params = ProjectionParams {
        mode: cli.mode,
        samples: cli.samples,
        strength_weight: cli.weight,
        overrides,
        seed: cli.seed,
    };
    let result = run_projection(&league, &params)?;
    let sorted = teams_by_probability(&result.probabilities);

    let report = ProjectionReport {
        generated_at: Utc::now().to_rfc3339(),
        mode_used: result.mode_used,
        denominator: result.denominator,
        scenario_count: result.scenario_count,
        teams: &sorted,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_tables(&league, &result, &sorted);
    }

    if let Some(path) = &cli.out {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, format!("{json}\n"))
            .with_context(|| format!("writing {}", path.display()))?;
        if !cli.json {
            println!("\nSaved JSON projection to {}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_league(cli: &Cli) -> Result<League> {
    match &cli.league {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading league dataset {}", path.display()))?;
            League::from_json(&raw)
                .with_context(|| format!("parsing league dataset {}", path.display()))
        }
        None => Ok(data::ehl_league()),
    }
}

/// Merge file and flag overrides, rejecting anything out of range before the
/// engine sees it (the engine would silently treat bad entries as absent).
fn collect_overrides(cli: &Cli, league: &League) -> Result<GameOverrides> {
    let mut overrides = match &cli.overrides_file {
        Some(path) => GameOverrides::read_from_file(path)
            .with_context(|| format!("reading overrides from {}", path.display()))?,
        None => GameOverrides::new(),
    };

    for spec in &cli.force {
        let (game, outcome) = spec
            .split_once('=')
            .ok_or_else(|| anyhow!("--force expects GAME=OUTCOME, got {spec:?}"))?;
        let game: usize = game
            .trim()
            .parse()
            .with_context(|| format!("bad game index in --force {spec:?}"))?;
        let outcome: usize = outcome
            .trim()
            .parse()
            .with_context(|| format!("bad outcome index in --force {spec:?}"))?;
        overrides.force(game, outcome);
    }

    let game_count = league.remaining_games().len();
    for (game, outcome) in overrides.iter() {
        if game >= game_count {
            bail!("override targets game {game}, but only {game_count} games remain");
        }
        if outcome >= OUTCOMES_PER_GAME {
            bail!("override for game {game} selects outcome {outcome}, valid slots are 0-4");
        }
    }

    Ok(overrides)
}

fn print_tables(league: &League, result: &ProjectionResult, sorted: &[TeamProbability]) {
    println!("\nCURRENT STANDINGS");
    for section in current_standings(league) {
        println!("\n{}", section.division);
        println!("{:<26} {:>3} {:>5} {:>6}", "Team", "GP", "Pts", "PPG");
        for row in &section.rows {
            println!(
                "{:<26} {:>3} {:>5} {:>6.2}",
                row.team, row.games_played, row.points, row.ppg
            );
        }
    }

    println!("\nUPCOMING GAMES");
    for (position, game) in league.upcoming_games().iter().enumerate() {
        println!(
            "{:>2}. [{:>2}] {} vs {}",
            position + 1,
            game.game_index,
            game.home,
            game.away
        );
    }

    println!("\nMode used: {}", result.mode_used);
    match result.mode_used {
        ProjectionMode::Exact => {
            println!("Scenario mass checked: {:.6}", result.denominator)
        }
        _ => println!("Samples: {}", result.denominator as u64),
    }

    println!("\nPLAYOFF CHANCES");
    for row in sorted {
        println!("{:<26} {:>6.2}%", row.team, row.probability);
    }
}
