//! TUI rendering with ratatui
//!
//! Board, attempt gauge and message log for the Mastermind game.

use super::app::{App, InputMode, MessageStyle};
use crate::game::GameStatus;
use crate::output::formatters::score_pegs;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND - Crack the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let length = app.config.length;

    let secret_line = if app.secret_visible() {
        Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                app.session.secret().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(format!("Secret: {}", vec!["?"; length].join(" ")))
    };

    let mut lines = vec![secret_line, Line::from("")];

    for (i, turn) in app.session.history().iter().enumerate() {
        let peg_style = if turn.score.is_solved(length) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                turn.guess.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(score_pegs(turn.score, length), peg_style),
            Span::styled(
                format!("  {}", turn.score),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    // Keep the latest guesses visible on small terminals
    let visible = usize::from(area.height.saturating_sub(2));
    if lines.len() > visible {
        let overflow = lines.len() - visible;
        lines.drain(2..(2 + overflow).min(lines.len()));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(5), // Legend
            Constraint::Length(3), // Win distribution
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_legend(f, chunks[1]);
    render_distribution(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_attempts<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let used = app.session.attempts();

    let (percent, label) = match app.config.max_attempts {
        Some(max) => (
            (used * 100 / max).min(100) as u16,
            format!("{used}/{max} attempts used"),
        ),
        None => (0, format!("{used} attempts (unlimited)")),
    };

    let color = match app.session.remaining_attempts() {
        Some(0 | 1) => Color::Red,
        Some(2 | 3) => Color::Yellow,
        _ => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, area: Rect) {
    let legend = Paragraph::new(vec![
        Line::from("● right digit, right place"),
        Line::from("○ right digit, wrong place"),
        Line::from("· no match"),
    ])
    .block(Block::default().title(" Legend ").borders(Borders::ALL));

    f.render_widget(legend, area);
}

fn render_distribution<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let buckets = &app.stats.guess_distribution;
    let last = buckets.len() - 1;

    let text = if app.stats.games_won == 0 {
        "No wins yet".to_string()
    } else {
        buckets
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(attempts, count)| {
                if attempts == last {
                    format!("{attempts}+: {count}")
                } else {
                    format!("{attempts}: {count}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let distribution = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().title(" Wins by Attempts ").borders(Borders::ALL));

    f.render_widget(distribution, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let title = match app.session.status() {
                GameStatus::Solved { .. } => " 🎉 CODE CRACKED! 🎉 | Press 'n' for new game or 'q' to quit ",
                _ => " GAME OVER | Press 'n' for new game or 'q' to quit ",
            };
            (title, "", Color::Green)
        }
        InputMode::Guessing => (
            " Enter Guess (digits, spaces or commas) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let shape = Paragraph::new(format!(
        "Code: {} × 0-{}",
        app.config.length,
        app.config.range - 1
    ))
    .alignment(Alignment::Center);
    f.render_widget(shape, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | r: Reveal | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
