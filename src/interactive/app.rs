//! TUI application state and logic

use crate::game::{GameConfig, GameStatus, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<R: Rng> {
    pub config: GameConfig,
    pub session: Session,
    pub rng: R,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub revealed: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of attempts; the last slot collects everything longer
    pub guess_distribution: [usize; 13],
}

impl<R: Rng> App<R> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is not playable.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        let session = Session::new(config, &mut rng)?;

        let mut app = Self {
            config,
            session,
            rng,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            revealed: false,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Welcome! Crack the {}-digit code using digits 0-{}.",
                config.length,
                config.range - 1
            ),
            MessageStyle::Info,
        );
        app.add_message("Type digits and press Enter to guess.", MessageStyle::Info);
        Ok(app)
    }

    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();
        if input.trim().is_empty() {
            return;
        }

        match self.session.guess_str(&input) {
            Ok(turn) => {
                self.input_buffer.clear();
                match self.session.status() {
                    GameStatus::InProgress => {
                        self.add_message(&format!("{}: {}", turn.guess, turn.score), MessageStyle::Info);
                    }
                    GameStatus::Solved { attempts } => {
                        self.record_finished();

                        let celebration = match attempts {
                            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                            2..=4 => "🔥 MAGNIFICENT! Code cracked! 🔥",
                            5..=7 => "✨ SPLENDID! Code cracked! ✨",
                            _ => "🎊 SOLVED! 🎊",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Exhausted => {
                        self.record_finished();
                        self.add_message(
                            &format!("Out of attempts! The code was {}", self.session.secret()),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Give up the current game and show the secret
    pub fn reveal(&mut self) {
        if self.input_mode == InputMode::GameOver {
            return;
        }
        self.revealed = true;
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;
        self.add_message(
            &format!("The code was {}", self.session.secret()),
            MessageStyle::Error,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn record_finished(&mut self) {
        self.stats.total_games += 1;
        if let GameStatus::Solved { attempts } = self.session.status() {
            self.stats.games_won += 1;
            let slot = attempts.min(self.stats.guess_distribution.len() - 1);
            self.stats.guess_distribution[slot] += 1;
        }
        self.input_mode = InputMode::GameOver;
    }

    /// Start a fresh game; one abandoned mid-play counts as played
    pub fn new_game(&mut self) {
        match Session::new(self.config, &mut self.rng) {
            Ok(session) => {
                if self.input_mode == InputMode::Guessing {
                    self.stats.total_games += 1;
                }
                self.session = session;
                self.input_buffer.clear();
                self.messages.clear();
                self.revealed = false;
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started! A fresh code is hidden.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Whether the secret should be drawn on screen
    #[must_use]
    pub fn secret_visible(&self) -> bool {
        self.revealed || self.session.status().is_finished()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') => {
                    app.new_game();
                }
                KeyCode::Char('r') => {
                    app.reveal();
                }
                _ if app.input_mode == InputMode::GameOver => {
                    // Game over: only the keys above do anything
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_guess();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
