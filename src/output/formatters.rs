//! Formatting utilities for terminal output

use crate::core::Score;

/// Marker for a digit in the right position
pub const EXACT_PEG: char = '●';
/// Marker for a digit in the wrong position
pub const PARTIAL_PEG: char = '○';
/// Marker for a position with no match
pub const MISS_PEG: char = '·';

/// Format a score as one peg per position: exact, then partial, then misses
#[must_use]
pub fn score_pegs(score: Score, length: usize) -> String {
    let mut result = String::with_capacity(length * 3);
    for _ in 0..score.exact() {
        result.push(EXACT_PEG);
    }
    for _ in 0..score.partial() {
        result.push(PARTIAL_PEG);
    }
    for _ in 0..score.misses(length) {
        result.push(MISS_PEG);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_all_misses() {
        assert_eq!(score_pegs(Score::new(0, 0), 4), "····");
    }

    #[test]
    fn pegs_perfect() {
        assert_eq!(score_pegs(Score::perfect(5), 5), "●●●●●");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(score_pegs(Score::new(1, 2), 5), "●○○··");
        assert_eq!(score_pegs(Score::new(0, 4), 4), "○○○○");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
