//! Plain text charts for the terminal.

use cannamap_core::usecases::Distribution;
use itertools::Itertools;

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '#';

fn with_title(title: &str, lines: impl Iterator<Item = String>) -> String {
    std::iter::once(title.to_string())
        .chain(lines)
        .map(|line| line + "\n")
        .join("")
}

/// Horizontal bar chart with bars scaled to the largest count.
pub fn bar_chart(title: &str, dist: &Distribution) -> String {
    let label_width = dist
        .entries()
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let max_count = dist.entries().iter().map(|e| e.count).max().unwrap_or(0);
    let lines = dist.entries().iter().map(|e| {
        let bar_len = if max_count == 0 {
            0
        } else {
            (e.count * BAR_WIDTH).div_ceil(max_count)
        };
        let bar: String = std::iter::repeat(BAR_CHAR).take(bar_len).collect();
        format!(
            "{label:<label_width$} | {bar} {count}",
            label = e.label,
            count = e.count
        )
    });
    with_title(title, lines)
}

/// The shares of all values, formatted like a pie chart legend.
pub fn pie_chart(title: &str, dist: &Distribution) -> String {
    let lines = dist
        .entries()
        .iter()
        .map(|e| format!("{:>5.1}%  {}", dist.share_of(&e.label), e.label));
    with_title(title, lines)
}
