//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackCode};
use colored::Colorize;

/// Format a feedback code as a row of coloured squares
///
/// # Examples
/// ```
/// use nerdle_solver::core::FeedbackCode;
/// use nerdle_solver::output::formatters::code_to_emoji;
///
/// let code = FeedbackCode::parse("GPB", 3).unwrap();
/// assert_eq!(code_to_emoji(code, 3), "🟩🟪⬛");
/// ```
#[must_use]
pub fn code_to_emoji(code: FeedbackCode, length: usize) -> String {
    code.unpack(length)
        .into_iter()
        .map(|grade| match grade {
            Feedback::Green => '🟩',
            Feedback::Purple => '🟪',
            Feedback::Black => '⬛',
        })
        .collect()
}

/// Render an equation with each symbol coloured by its feedback grade
#[must_use]
pub fn colored_equation(text: &str, code: FeedbackCode, length: usize) -> String {
    text.chars()
        .zip(code.unpack(length))
        .map(|(symbol, grade)| {
            let cell = format!(" {symbol} ");
            match grade {
                Feedback::Green => cell.black().on_green().to_string(),
                Feedback::Purple => cell.white().on_magenta().to_string(),
                Feedback::Black => cell.white().on_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar relative to the best possible split
///
/// `max_entropy` is `log₂` of the number of distinguishable outcomes.
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

/// Create the `indicatif` bar used for long-running loops
#[must_use]
pub fn progress_bar(total: u64, message: &'static str) -> indicatif::ProgressBar {
    let bar = indicatif::ProgressBar::new(total);
    if let Ok(style) = indicatif::ProgressStyle::with_template(
        "{msg} [{elapsed_precise}] {bar:40.green/white} {pos}/{len} ({eta})",
    ) {
        bar.set_style(style.progress_chars("█▓░"));
    }
    bar.set_message(message);
    bar
}
