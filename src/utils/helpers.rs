//! Console formatting helpers for the harness

use colored::Colorize;

const WIDTH: usize = 60;

/// Framed, centered title block
pub fn title_block(title: &str) -> String {
    let separator = "=".repeat(WIDTH);
    format!("{}\n{:^width$}\n{}", separator, title.bold().cyan(), separator, width = WIDTH)
}

/// Section heading underlined to its own width
pub fn section_heading(heading: &str) -> String {
    let underline = "━".repeat(heading.chars().count());
    format!("{}\n{}", heading.bold().yellow(), underline)
}

/// Milliseconds with four decimals, matching exported precision
pub fn format_ms(ms: f64) -> String {
    format!("{:.4}", ms)
}
