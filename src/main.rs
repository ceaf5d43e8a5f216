//! Mastermind - CLI
//!
//! Code-breaking game with TUI and CLI modes, plus scoring utilities.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_benchmark, run_play, score_codes},
    game::GameConfig,
    output::{print_benchmark_result, print_play_stats, print_score_report},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

/// Digit range for games when `--range` is omitted
const DEFAULT_GAME_RANGE: u32 = 6;

/// Digit range for the score command when `--range` is omitted: plain decimal digits
const DEFAULT_SCORE_RANGE: u32 = 10;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game: guess the hidden digits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in the code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Digits are drawn from 0 to RANGE-1 [default: 6, or 10 for `score`]
    #[arg(short, long, global = true)]
    range: Option<u32>,

    /// Guesses allowed per game (0 = unlimited)
    #[arg(short = 'a', long, global = true, default_value = "10")]
    max_attempts: usize,

    /// Seed for the secret code generator (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line game without TUI)
    Simple {
        /// Print the secret at the start of each game
        #[arg(long)]
        show_secret: bool,
    },

    /// Score guesses against a known secret
    Score {
        /// The secret code, e.g. "3 1 4 1 9" or 31419
        secret: String,

        /// Guesses to score against the secret
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Score random code pairs and audit the results
    Benchmark {
        /// Number of random pairs to score
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let max_attempts = (self.max_attempts > 0).then_some(self.max_attempts);
        GameConfig::new(
            self.length,
            self.range.unwrap_or(DEFAULT_GAME_RANGE),
            max_attempts,
        )
    }

    fn score_range(&self) -> u32 {
        self.range.unwrap_or(DEFAULT_SCORE_RANGE)
    }
}

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.game_config();
    config.validate()?;
    let score_range = cli.score_range();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, rng_from_seed(cli.seed)),
        Commands::Simple { show_secret } => {
            run_simple_command(config, rng_from_seed(cli.seed), show_secret)
        }
        Commands::Score { secret, guesses } => run_score_command(&secret, &guesses, score_range),
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, count, cli.seed.unwrap_or(0))
        }
    }
}

fn run_play_command(config: GameConfig, rng: StdRng) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(config, rng)?;
    run_tui(app)
}

fn run_simple_command(config: GameConfig, mut rng: StdRng, show_secret: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let stats = run_play(config, &mut rng, &mut input, &mut output, show_secret)
        .map_err(|e| anyhow::anyhow!(e))?;
    print_play_stats(&stats);
    Ok(())
}

fn run_score_command(secret: &str, guesses: &[String], range: u32) -> Result<()> {
    let report = score_codes(secret, guesses, range).map_err(|e| anyhow::anyhow!(e))?;
    print_score_report(&report);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, count: usize, seed: u64) -> Result<()> {
    println!(
        "Scoring {count} random pairs of {}-digit codes (digits 0-{})...",
        config.length,
        config.range - 1
    );

    let result = run_benchmark(config, count, seed).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);

    if result.violations > 0 {
        anyhow::bail!("{} scores broke an invariant", result.violations);
    }
    Ok(())
}
