//! Word Search - CLI
//!
//! Word search puzzle with TUI and line modes, scoring, undo and a leaderboard.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rustc_hash::FxHashSet;
use word_search::{
    commands::{run_benchmark, run_simple},
    game::GameEngine,
    output::{display::print_placements, print_benchmark_result, print_board},
    wordlists::{
        DEFAULT_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_search",
    about = "Word search puzzle game with scoring, undo and a leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'default' (built-in 11 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    words: String,

    /// Seed for reproducible boards
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Player name (prompted for when omitted)
    #[arg(short, long, global = true)]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (type cells as row,col pairs)
    Simple,

    /// Print a generated board
    Show {
        /// Also list where each word was placed
        #[arg(short, long)]
        reveal: bool,
    },

    /// Measure how reliably words get placed
    Benchmark {
        /// Number of boards to generate
        #[arg(short = 'c', long, default_value = "1000")]
        count: usize,
    },
}

/// Load the target list based on the -w flag
fn load_words(words_mode: &str) -> Result<Vec<String>> {
    let words = match words_mode {
        "default" => words_from_slice(DEFAULT_WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?,
    };

    if words.is_empty() {
        bail!("Word list '{words_mode}' contains no usable words");
    }
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.words)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, cli.seed, cli.name.as_deref()),
        Commands::Simple => run_simple_command(&words, cli.seed, cli.name.as_deref()),
        Commands::Show { reveal } => {
            run_show_command(&words, cli.seed, reveal);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&words, count, cli.seed);
            Ok(())
        }
    }
}

fn build_game(words: &[String], seed: Option<u64>, name: Option<&str>) -> GameEngine {
    let mut game = match seed {
        Some(seed) => GameEngine::with_seed(words, seed),
        None => GameEngine::new(words),
    };
    if let Some(name) = name {
        game.set_player_name(name);
    }
    game
}

fn run_play_command(words: &[String], seed: Option<u64>, name: Option<&str>) -> Result<()> {
    use word_search::interactive::{App, run_tui};

    let app = App::new(build_game(words, seed, name), name.is_none());
    run_tui(app)
}

fn run_simple_command(words: &[String], seed: Option<u64>, name: Option<&str>) -> Result<()> {
    let mut game = build_game(words, seed, name);
    run_simple(&mut game, name.is_none())
}

fn run_show_command(words: &[String], seed: Option<u64>, reveal: bool) {
    let game = build_game(words, seed, None);

    let highlight = if reveal {
        game.board().placed_cells()
    } else {
        FxHashSet::default()
    };

    print_board(game.board(), &highlight);
    if reveal {
        print_placements(game.board());
    }
}

fn run_benchmark_command(words: &[String], count: usize, seed: Option<u64>) {
    if let Some(seed) = seed {
        println!("Generating {count} boards from seed {seed}...");
    } else {
        println!("Generating {count} boards...");
    }

    let seed = seed.unwrap_or_else(rand::random);
    let result = run_benchmark(words, count, seed);
    print_benchmark_result(&result);
}
