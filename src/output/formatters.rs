//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as key pegs: `●` per red, `○` per white, `·` for the rest
#[must_use]
pub fn score_to_pegs(score: Score, num_pegs: usize) -> String {
    let red = usize::from(score.red());
    let white = usize::from(score.white());
    let blank = num_pegs.saturating_sub(red + white);

    let mut result = String::with_capacity(num_pegs * 3);
    result.push_str(&"●".repeat(red));
    result.push_str(&"○".repeat(white));
    result.push_str(&"·".repeat(blank));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a share of a whole as a bar of `width` cells
///
/// Any non-zero share gets at least one filled cell.
#[must_use]
pub fn share_bar(part: usize, whole: usize, width: usize) -> String {
    if whole == 0 || part == 0 || width == 0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    let filled = ((part as f64 / whole as f64) * width as f64) as usize;
    let filled = filled.clamp(1, width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_to_pegs_mixed() {
        assert_eq!(score_to_pegs(Score::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn score_to_pegs_perfect() {
        assert_eq!(score_to_pegs(Score::perfect(4), 4), "●●●●");
    }

    #[test]
    fn score_to_pegs_empty() {
        assert_eq!(score_to_pegs(Score::default(), 3), "···");
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
    fn share_bar_of_nothing_is_empty() {
        assert_eq!(share_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn share_bar_marks_small_nonzero_shares() {
        assert_eq!(share_bar(1, 1000, 10), "█░░░░░░░░░");
        assert_eq!(share_bar(0, 1000, 10), "░░░░░░░░░░");
        assert_eq!(share_bar(500, 1000, 10), "█████░░░░░");
        assert_eq!(share_bar(1000, 1000, 10), "██████████");
    }
}
