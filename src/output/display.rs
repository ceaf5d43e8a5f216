//! Display functions for command results

use super::formatters::{create_progress_bar, score_pegs};
use crate::commands::{BenchmarkResult, PlayStats, ScoreReport};
use colored::Colorize;

/// Print the scores of a fixed secret against each guess
pub fn print_score_report(report: &ScoreReport) {
    let length = report.secret.length();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret code: {}",
        report.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in report.turns.iter().enumerate() {
        println!(
            "\nGuess {}: {}  {}",
            i + 1,
            turn.guess,
            score_pegs(turn.score, length)
        );
        println!("  correct (right spot): {}", turn.score.exact());
        println!("  correct (wrong spot): {}", turn.score.partial());
    }

    println!();
    match report.solved_at() {
        Some(n) => println!("{}", format!("✅ Guess {n} cracks the code!").green().bold()),
        None if report.turns.is_empty() => println!("No guesses given."),
        None => println!("{}", "❌ No guess cracks the code".red().bold()),
    }
}

/// Print the totals of an interactive session
pub fn print_play_stats(stats: &PlayStats) {
    if stats.games == 0 {
        return;
    }

    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Games played: {}", stats.games);
    println!(
        "   Games won:    {} ({:.0}%)",
        stats.wins,
        stats.wins as f64 / stats.games as f64 * 100.0
    );

    let mut attempts: Vec<(&usize, &usize)> = stats.distribution.iter().collect();
    attempts.sort_unstable();
    for (attempt, count) in attempts {
        println!("   {attempt:>3} attempts: {count}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Code shape:       {} digits × {} values",
        result.config.length, result.config.range
    );
    println!("   Pairs scored:     {}", result.total_pairs);
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Pairs/second:     {}",
        format!("{:.0}", result.pairs_per_second)
            .bright_yellow()
            .bold()
    );
    println!("   Exact solves:     {}", result.solved);

    let violations = if result.violations == 0 {
        "0".green()
    } else {
        result.violations.to_string().red().bold()
    };
    println!("   Violations:       {violations}");

    if result.total_pairs == 0 {
        return;
    }

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    let buckets = result.sorted_distribution();
    let max_count = buckets.iter().map(|&(_, n)| n).max().unwrap_or(1);
    for (score, count) in buckets {
        let pct = count as f64 / result.total_pairs as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!(
            "   {} {} {count:8} ({pct:5.1}%)",
            score_pegs(score, result.config.length),
            bar.green()
        );
    }
}
