//! selfplay: run seeded solo matches and report how fast each tier clears
//! the board.
//!
//! Usage:
//!   selfplay --games 50 --difficulty hard --mode extended
//!   selfplay --board-size 20 --airplanes 10 --seed 7 --json
//!   RUST_LOG=airbattle_ai=debug selfplay --games 1 --show-board

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use airbattle_core::coords::{column_labels, row_labels};
use airbattle_core::enums::{CellState, Difficulty};
use airbattle_core::modes::{GameMode, ModeConfig};
use airbattle_core::types::Position;
use airbattle_sim::{Board, MatchConfig, MatchReport, MatchRunner};

#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Play seeded airplane-hunt matches and summarize turn counts")]
struct Args {
    /// Number of matches; match i uses seed + i
    #[arg(long, default_value_t = 20)]
    games: u32,
    /// easy, medium or hard
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// standard, extended or custom
    #[arg(long)]
    mode: Option<String>,
    /// Custom board side length (10..=20)
    #[arg(long)]
    board_size: Option<i32>,
    /// Custom fleet size (1..=10)
    #[arg(long)]
    airplanes: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Stop each match after this many turns
    #[arg(long)]
    max_turns: Option<u32>,
    /// JSON match config; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// Print the final board of the last match
    #[arg(long)]
    show_board: bool,
}

#[derive(Serialize)]
struct Summary {
    config: MatchConfig,
    games: usize,
    completed: usize,
    mean_turns: f64,
    min_turns: u32,
    max_turns: u32,
    regenerations: u32,
    max_move_micros: u64,
    reports: Vec<MatchReport>,
}

fn parse_difficulty(text: &str) -> Result<Difficulty, String> {
    Difficulty::ALL
        .into_iter()
        .find(|d| d.name().eq_ignore_ascii_case(text))
        .ok_or_else(|| format!("unknown difficulty `{text}` (expected easy, medium or hard)"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("selfplay: {err}");
        process::exit(1);
    }
}

fn build_config(args: &Args) -> Result<MatchConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::from_json(&fs::read_to_string(path)?)?,
        None => MatchConfig::default(),
    };
    if let Some(id) = &args.mode {
        config.mode = ModeConfig::for_mode(GameMode::from_id(id)?);
    }
    if args.board_size.is_some() || args.airplanes.is_some() {
        config.mode = ModeConfig::custom(
            args.board_size.unwrap_or(config.mode.board_size),
            args.airplanes.unwrap_or(config.mode.airplanes),
        )?;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.max_turns.is_some() {
        config.max_turns = args.max_turns;
    }
    config.mode.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(args)?;
    info!(
        mode = config.mode.mode.id(),
        board_size = config.mode.board_size,
        airplanes = config.mode.airplanes,
        difficulty = config.difficulty.name(),
        games = args.games,
        "starting self-play"
    );

    let mut reports = Vec::with_capacity(args.games as usize);
    let mut last_board = None;
    for game in 0..args.games {
        let mut runner = MatchRunner::new(MatchConfig {
            seed: config.seed.wrapping_add(game as u64),
            ..config.clone()
        })?;
        while !runner.is_finished() {
            runner.step()?;
        }
        reports.push(runner.report());
        last_board = Some(runner.board().clone());
    }

    let summary = summarize(config, reports);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    if args.show_board {
        if let Some(board) = &last_board {
            print_board(board);
        }
    }
    Ok(())
}

fn summarize(config: MatchConfig, reports: Vec<MatchReport>) -> Summary {
    let turns: Vec<u32> = reports.iter().map(|r| r.turns).collect();
    let mean_turns = match turns.len() {
        0 => 0.0,
        n => turns.iter().map(|&t| t as f64).sum::<f64>() / n as f64,
    };
    Summary {
        config,
        games: reports.len(),
        completed: reports.iter().filter(|r| r.completed).count(),
        mean_turns,
        min_turns: turns.iter().copied().min().unwrap_or(0),
        max_turns: turns.iter().copied().max().unwrap_or(0),
        regenerations: reports.iter().map(|r| r.regenerations).sum(),
        max_move_micros: reports.iter().map(|r| r.max_move_micros).max().unwrap_or(0),
        reports,
    }
}

fn print_summary(summary: &Summary) {
    let mode = &summary.config.mode;
    println!("=== SELF-PLAY RESULTS ===");
    println!(
        "  Board:         {}x{} ({}), {} airplanes",
        mode.board_size,
        mode.board_size,
        mode.mode.name(),
        mode.airplanes
    );
    println!("  Difficulty:    {}", summary.config.difficulty.name());
    println!("  Games:         {} ({} completed)", summary.games, summary.completed);
    println!("  Mean turns:    {:.1}", summary.mean_turns);
    println!("  Min/max turns: {}/{}", summary.min_turns, summary.max_turns);
    println!("  Regenerations: {}", summary.regenerations);
    println!("  Slowest move:  {}us", summary.max_move_micros);
}

fn print_board(board: &Board) {
    let size = board.size();
    println!();
    print!("    ");
    for label in column_labels(size) {
        print!("{label:>2}");
    }
    println!();
    for (row, label) in row_labels(size).into_iter().enumerate() {
        print!("{label:>3} ");
        for col in 0..size {
            let glyph = match board.cell_state(Position::new(row as i32, col), true) {
                CellState::Empty => '.',
                CellState::Airplane => '#',
                CellState::Hit => 'X',
                CellState::Miss => 'o',
                CellState::Killed => '*',
            };
            print!("{glyph:>2}");
        }
        println!();
    }
}
