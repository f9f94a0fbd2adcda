//! CLI output formatting for rating results.
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! portrait.jpg: 7.3 B
//!     sharpness     4.9
//!     brightness    9.6
//!     contrast      6.4
//!     saturation    3.1
//!     resolution   10.0
//!     aspect ratio  9.8
//! ```

use crate::score::Rating;

/// Fixed display order and labels for the per-metric breakdown.
const METRIC_LABELS: [&str; 6] = [
    "sharpness",
    "brightness",
    "contrast",
    "saturation",
    "resolution",
    "aspect ratio",
];

/// Format one rating: header line, plus an indented per-metric breakdown
/// when `show_scores` is set.
pub fn format_rating(label: &str, rating: &Rating, show_scores: bool) -> Vec<String> {
    let mut lines = vec![format!(
        "{}: {:.1} {}",
        label,
        rating.display_rating(),
        rating.grade
    )];
    if show_scores {
        for (name, score) in METRIC_LABELS.iter().zip(rating.scores.as_array()) {
            lines.push(format!("    {:<12} {:>4.1}", name, score));
        }
    }
    lines
}

/// Format a failed file: the label and the error, aligned with rating lines.
pub fn format_failure(label: &str, error: &str) -> String {
    format!("{label}: error: {error}")
}

/// Batch trailer: how many images were rated and how many failed.
pub fn format_summary(rated: usize, failed: usize) -> String {
    match failed {
        0 => format!("Rated {rated} image{}", plural(rated)),
        _ => format!(
            "Rated {rated} image{}, {failed} failed",
            plural(rated)
        ),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

pub fn print_rating(label: &str, rating: &Rating, show_scores: bool) {
    for line in format_rating(label, rating, show_scores) {
        println!("{line}");
    }
}
