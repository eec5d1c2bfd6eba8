//! Gomoku AI Engine CLI
//!
//! Play against the engine on the terminal, or watch it play itself.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gomoku::{
    AIEngine, Board, Difficulty, EngineConfig, Game, GameError, Outcome, Pos, RecordBook, Stone,
    BOARD_SIZE,
};

/// Gomoku against a minimax engine.
#[derive(Parser)]
#[command(name = "gomoku", version, about = "Gomoku AI engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a game against the engine, one "row col" move per line
    Play {
        /// Color you play; Black moves first
        #[arg(long, value_enum, default_value_t = Color::Black)]
        color: Color,

        /// easy, medium or hard (defaults to the config file)
        #[arg(long)]
        difficulty: Option<String>,

        /// Path to TOML configuration file
        #[arg(long, default_value = "gomoku.toml")]
        config: PathBuf,

        /// Record the result under this name
        #[arg(long)]
        nickname: Option<String>,

        /// Where player records are kept
        #[arg(long, default_value = "records.json")]
        records: PathBuf,
    },
    /// Let the engine play both sides
    Selfplay {
        /// easy, medium or hard
        #[arg(long, default_value = "medium")]
        difficulty: String,

        /// Fix the RNG seed for a repeatable game
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Play {
            color,
            difficulty,
            config,
            nickname,
            records,
        } => {
            let config = EngineConfig::load_or_default(&config)
                .with_context(|| format!("loading config from {}", config.display()))?;
            let difficulty = difficulty
                .map(|name| Difficulty::from_name(&name))
                .unwrap_or(config.difficulty);
            let outcome = play(color.into(), difficulty, config)?;
            if let Some(nickname) = nickname {
                save_result(&records, &nickname, color.into(), outcome)?;
            }
            Ok(())
        }
        Command::Selfplay { difficulty, seed } => {
            let config = EngineConfig {
                seed,
                ..EngineConfig::default()
            };
            selfplay(Difficulty::from_name(&difficulty), config)
        }
    }
}

fn play(human: Stone, difficulty: Difficulty, config: EngineConfig) -> Result<Outcome> {
    let mut engine = AIEngine::with_config(config).context("building engine")?;
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You play {:?} ({}), engine plays {difficulty}.", human, human.symbol());
    print_board(game.board(), None);

    while !game.is_over() {
        if game.to_move() == human {
            print!("your move (row col)> ");
            io::stdout().flush().context("flushing stdout")?;

            let Some(line) = lines.next() else {
                bail!("input closed before the game ended");
            };
            let line = line.context("reading move")?;
            let line = line.trim();
            if line == "quit" || line == "q" {
                bail!("game abandoned");
            }
            let Some((row, col)) = parse_move(line) else {
                println!("expected two numbers, e.g. \"7 7\"");
                continue;
            };
            match game.play_at(row, col) {
                Ok(_) => {}
                Err(GameError::Board(err)) => {
                    println!("{err}");
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            let ai = game.to_move();
            let result = engine.select_move_with_stats(game.board_mut(), ai, difficulty);
            let Some(pos) = result.best_move else {
                bail!("engine found no move on a non-final board");
            };
            info!(%pos, search_type = ?result.search_type, score = result.score, "engine move");
            game.play(pos)?;
            println!(
                "engine plays {pos} ({:?}, {} nodes, {}ms)",
                result.search_type, result.nodes, result.time_ms
            );
        }
        print_board(game.board(), game.last_move());
    }

    let outcome = game.outcome();
    match outcome {
        Outcome::Win(stone) if stone == human => println!("You win!"),
        Outcome::Win(_) => println!("Engine wins."),
        Outcome::Draw => println!("Draw."),
        Outcome::InProgress => {}
    }
    Ok(outcome)
}

fn selfplay(difficulty: Difficulty, config: EngineConfig) -> Result<()> {
    let mut engine = AIEngine::with_config(config).context("building engine")?;
    let mut game = Game::new();

    while !game.is_over() {
        let side = game.to_move();
        let Some(pos) = engine.select_move(game.board_mut(), side, difficulty) else {
            break;
        };
        if let Err(err) = game.play(pos) {
            // The engine only proposes empty cells
            error!(%pos, %err, "engine proposed an illegal move");
            break;
        }
        println!("{:3}. {:?} {pos}", game.moves().len(), side);
    }

    print_board(game.board(), game.last_move());
    match game.outcome() {
        Outcome::Win(stone) => println!("{stone:?} wins after {} moves", game.moves().len()),
        Outcome::Draw => println!("Draw"),
        Outcome::InProgress => println!("Stopped"),
    }
    Ok(())
}

fn save_result(path: &Path, nickname: &str, human: Stone, outcome: Outcome) -> Result<()> {
    // Draws and abandoned games are not counted
    let won = match outcome {
        Outcome::Win(stone) => stone == human,
        Outcome::Draw | Outcome::InProgress => return Ok(()),
    };

    let mut book = RecordBook::load(path)
        .with_context(|| format!("loading records from {}", path.display()))?;
    let record = book.record_result(nickname, won);
    println!(
        "{}: {} wins, {} losses ({:.1}%)",
        record.nickname,
        record.wins,
        record.losses,
        record.win_rate * 100.0
    );
    book.save(path)
        .with_context(|| format!("saving records to {}", path.display()))
}

fn parse_move(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Print board with coordinates; the last move is bracketed.
fn print_board(board: &Board, last: Option<Pos>) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{:3}", c);
    }
    println!();

    for r in 0..BOARD_SIZE {
        print!("{:2} ", r);
        for c in 0..BOARD_SIZE {
            let pos = Pos::new(r as u8, c as u8);
            let ch = board.get(pos).symbol();
            if last == Some(pos) {
                print!("[{ch}]");
            } else {
                print!(" {ch} ");
            }
        }
        println!();
    }
}
