//! Simple interactive CLI mode
//!
//! Line-oriented game loop without the TUI. Reads guesses from any `BufRead`
//! and writes to any `Write`, so the same loop serves stdin/stdout and tests.

use crate::game::{GameConfig, GameStatus, Session};
use crate::output::formatters::score_pegs;
use colored::Colorize;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::io::{BufRead, Write};

/// Totals across every game finished in one run
#[derive(Debug, Default, Clone)]
pub struct PlayStats {
    pub games: usize,
    pub wins: usize,
    /// Attempts needed → number of games won with that many attempts
    pub distribution: FxHashMap<usize, usize>,
}

impl PlayStats {
    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        if let GameStatus::Solved { attempts } = status {
            self.wins += 1;
            *self.distribution.entry(attempts).or_insert(0) += 1;
        }
    }

    /// Count a game given up before it finished: played, never won
    fn forfeit(&mut self) {
        self.games += 1;
    }
}

enum Outcome {
    Quit,
    NewGame,
}

/// Run the simple interactive CLI mode
///
/// When `show_secret` is set the secret is printed at the start of every game.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or on an I/O error while
/// reading input or writing output.
pub fn run_play<R, I, W>(
    config: GameConfig,
    rng: &mut R,
    input: &mut I,
    output: &mut W,
    show_secret: bool,
) -> Result<PlayStats, String>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    config.validate().map_err(|e| e.to_string())?;

    write_banner(output, &config).map_err(|e| e.to_string())?;

    let mut stats = PlayStats::default();
    loop {
        let mut session = Session::new(config, rng).map_err(|e| e.to_string())?;
        if show_secret {
            writeln!(output, "Secret code: {}\n", session.secret()).map_err(|e| e.to_string())?;
        }

        match play_one(&mut session, input, output, &mut stats)? {
            Outcome::Quit => {
                writeln!(output, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())?;
                return Ok(stats);
            }
            Outcome::NewGame => {
                writeln!(output, "\n🔄 New game started!\n").map_err(|e| e.to_string())?;
            }
        }
    }
}

fn write_banner<W: Write>(output: &mut W, config: &GameConfig) -> std::io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Mastermind - Interactive Mode               ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(
        output,
        "Break the secret code: {} digits, each from 0 to {} ({} possible codes).",
        config.length,
        config.range - 1,
        config.code_space()
    )?;
    match config.max_attempts {
        Some(max) => writeln!(output, "You have {max} attempts.")?,
        None => writeln!(output, "You have unlimited attempts.")?,
    }
    writeln!(output, "After each guess you'll see:\n")?;
    writeln!(output, "  ● digit correct and in the right position")?;
    writeln!(output, "  ○ digit in the code but in the wrong position")?;
    writeln!(output, "  · no match\n")?;
    writeln!(
        output,
        "Commands: 'quit' to exit, 'new' for new game, 'reveal' to give up, 'help'\n"
    )
}

/// Play until the current game ends and the player decides what comes next
fn play_one<I: BufRead, W: Write>(
    session: &mut Session,
    input: &mut I,
    output: &mut W,
    stats: &mut PlayStats,
) -> Result<Outcome, String> {
    let config = *session.config();
    let length = config.length;

    loop {
        let prompt = match session.remaining_attempts() {
            Some(left) => format!("Guess {} ({left} left)", session.attempts() + 1),
            None => format!("Guess {}", session.attempts() + 1),
        };

        let Some(line) = get_user_input(input, output, &prompt)? else {
            return Ok(Outcome::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => return Ok(Outcome::Quit),
            "new" | "n" => {
                stats.forfeit();
                return Ok(Outcome::NewGame);
            }
            "help" | "h" => {
                writeln!(
                    output,
                    "Enter {length} digits separated by spaces or commas, e.g. '{}'",
                    example_guess(&config)
                )
                .map_err(|e| e.to_string())?;
                continue;
            }
            "reveal" | "r" => {
                writeln!(
                    output,
                    "🔓 The secret was: {}",
                    session.secret().to_string().bright_yellow().bold()
                )
                .map_err(|e| e.to_string())?;
                stats.forfeit();
                return ask_play_again(input, output);
            }
            _ => {}
        }

        match session.guess_str(&line) {
            Ok(turn) => {
                writeln!(
                    output,
                    "  {}  {}  {}",
                    turn.guess,
                    score_pegs(turn.score, length),
                    turn.score
                )
                .map_err(|e| e.to_string())?;
            }
            Err(err) => {
                writeln!(output, "❌ {err}").map_err(|e| e.to_string())?;
                continue;
            }
        }

        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Solved { attempts } => {
                stats.record(session.status());
                writeln!(output, "\n{}", "═".repeat(60).bright_cyan()).map_err(|e| e.to_string())?;
                writeln!(
                    output,
                    "{}",
                    format!(
                        "🎉 Solved in {attempts} {}!",
                        if attempts == 1 { "attempt" } else { "attempts" }
                    )
                    .bright_green()
                    .bold()
                )
                .map_err(|e| e.to_string())?;
                writeln!(output, "{}\n", "═".repeat(60).bright_cyan()).map_err(|e| e.to_string())?;
                return ask_play_again(input, output);
            }
            GameStatus::Exhausted => {
                stats.record(session.status());
                writeln!(
                    output,
                    "\n{} The secret was: {}\n",
                    "💀 Out of attempts!".red().bold(),
                    session.secret()
                )
                .map_err(|e| e.to_string())?;
                return ask_play_again(input, output);
            }
        }
    }
}

fn ask_play_again<I: BufRead, W: Write>(input: &mut I, output: &mut W) -> Result<Outcome, String> {
    match get_user_input(input, output, "Play again? (yes/no)")? {
        Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => Ok(Outcome::NewGame),
        _ => Ok(Outcome::Quit),
    }
}

fn example_guess(config: &GameConfig) -> String {
    (0..config.length)
        .map(|i| (i as u32 % config.range).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<I: BufRead, W: Write>(
    input: &mut I,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    /// Secret the seeded generator draws first for this config
    fn first_secret(config: GameConfig, seed: u64) -> String {
        let mut rng = StdRng::seed_from_u64(seed);
        Session::new(config, &mut rng).unwrap().secret().to_string()
    }

    fn play(config: GameConfig, seed: u64, script: &str) -> (PlayStats, String) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let stats = run_play(config, &mut rng, &mut input, &mut output, false).unwrap();
        (stats, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solving_records_win() {
        let config = GameConfig::new(4, 6, Some(10));
        let secret = first_secret(config, 5);

        let script = format!("{secret}\nno\n");
        let (stats, output) = play(config, 5, &script);

        assert_eq!(stats.games, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.distribution.get(&1), Some(&1));
        assert!(output.contains("Solved in 1 attempt"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let config = GameConfig::new(4, 6, Some(10));
        let secret = first_secret(config, 9);

        let script = format!("1 2\n9 9 9 9\nabcd\n{secret}\nn\n");
        let (stats, output) = play(config, 9, &script);

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.distribution.get(&1), Some(&1));
        assert!(output.contains("Expected 4 digits, got 2"));
        assert!(output.contains("outside 0..5"));
    }

    #[test]
    fn exhausting_attempts_reveals_secret() {
        let config = GameConfig::new(3, 10, Some(2));
        let secret = first_secret(config, 77);
        let wrong = if secret == "9 9 9" { "8 8 8" } else { "9 9 9" };

        let script = format!("{wrong}\n{wrong}\nno\n");
        let (stats, output) = play(config, 77, &script);

        assert_eq!(stats.games, 1);
        assert_eq!(stats.wins, 0);
        assert!(output.contains("Out of attempts"));
        assert!(output.contains(&format!("The secret was: {secret}")));
    }

    #[test]
    fn play_again_starts_new_game() {
        let config = GameConfig::new(2, 1, None);
        // Range 1: the secret is always 0 0
        let (stats, output) = play(config, 1, "0 0\ny\n00\nno\n");

        assert_eq!(stats.games, 2);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.distribution.get(&1), Some(&2));
        assert!(output.contains("New game started"));
    }

    #[test]
    fn reveal_forfeits_game() {
        let config = GameConfig::new(4, 6, None);
        let (stats, output) = play(config, 3, "reveal\nno\n");

        assert_eq!(stats.games, 1);
        assert_eq!(stats.wins, 0);
        assert!(output.contains("The secret was"));
    }

    #[test]
    fn abandoning_game_counts_like_reveal() {
        let config = GameConfig::new(2, 1, None);
        let (stats, output) = play(config, 1, "new\n0 0\nno\n");

        assert_eq!(stats.games, 2);
        assert_eq!(stats.wins, 1);
        assert!(output.contains("New game started"));

        let (revealed, _) = play(config, 1, "reveal\ny\n0 0\nno\n");
        assert_eq!(revealed.games, stats.games);
        assert_eq!(revealed.wins, stats.wins);
    }

    #[test]
    fn end_of_input_quits() {
        let config = GameConfig::default();
        let (stats, output) = play(config, 3, "");

        assert_eq!(stats.games, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn help_shows_example() {
        let config = GameConfig::new(4, 6, None);
        let (_, output) = play(config, 3, "help\nquit\n");
        assert!(output.contains("e.g. '0 1 2 3'"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();
        let result = run_play(
            GameConfig::new(0, 6, None),
            &mut rng,
            &mut input,
            &mut output,
            false,
        );
        assert!(result.is_err());
    }
}
