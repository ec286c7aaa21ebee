use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::scoring::{Category, ScoreResult, MAX_SCORE};

/// Format the score line for stdout: the integer alone.
pub fn format_score(result: &ScoreResult) -> String {
    result.score.to_string()
}

/// Format a per-item breakdown, one line per item.
/// Columns: item number, answer, reverse marker, points.
/// Reverse-coded items are marked with "(reversed)".
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let mut lines: Vec<String> = result
        .breakdown
        .items
        .iter()
        .map(|item| {
            let label = format!("Q{:<2}", item.position);
            let marker = if item.reversed { "(reversed)" } else { "" };
            if use_colors {
                format!(
                    "  {}  answer {}  {:<10}  {:>1} pts",
                    label.dimmed(),
                    item.answer,
                    marker.cyan(),
                    item.points.bold()
                )
            } else {
                format!(
                    "  {}  answer {}  {:<10}  {:>1} pts",
                    label, item.answer, marker, item.points
                )
            }
        })
        .collect();

    let total = format!("Total: {}/{}", result.score, MAX_SCORE);
    if use_colors {
        lines.push(total.bold().to_string());
    } else {
        lines.push(total);
    }
    lines.join("\n")
}

/// Format the category and its advice as two lines.
pub fn format_category(category: Category, use_colors: bool) -> String {
    if use_colors {
        let label = match category {
            Category::Good => category.label().green().bold().to_string(),
            Category::MildAttention => category.label().yellow().bold().to_string(),
            Category::ConsultationAdvised => category.label().red().bold().to_string(),
        };
        format!("Category: {}\nAdvice: {}", label, category.advice())
    } else {
        format!("Category: {}\nAdvice: {}", category.label(), category.advice())
    }
}

/// Explanations go to stderr, so colour follows whether stderr is a TTY.
pub fn should_use_colors() -> bool {
    std::io::stderr().is_terminal()
}
