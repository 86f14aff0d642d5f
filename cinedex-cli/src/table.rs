//! Aligned text tables for movie listings.

use cinedex_catalog::Movie;
use cinedex_lib::fit_to_width;

/// Column headers and their widths in terminal cells.
const COLUMNS: [(&str, usize); 5] = [
    ("Title", 32),
    ("Director", 22),
    ("Genre", 12),
    ("Year", 6),
    ("Rating", 6),
];

/// Render movies as a table framed by dash rules. Wide (CJK) characters
/// count as two cells so columns stay aligned.
pub(crate) fn render_movies(movies: &[Movie]) -> String {
    let rule = "-".repeat(rule_width());
    let mut out = String::new();

    out.push_str(&format_row(COLUMNS.map(|(name, _)| name.to_string())));
    out.push_str(&rule);
    out.push('\n');
    for movie in movies {
        out.push_str(&format_row([
            movie.title.clone(),
            movie.director.clone(),
            movie.genre.clone(),
            movie.year.to_string(),
            format!("{:.1}", movie.rating),
        ]));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

fn format_row(cells: [String; 5]) -> String {
    let line = cells
        .iter()
        .zip(COLUMNS)
        .map(|(cell, (_, width))| fit_to_width(cell, width))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}\n", line.trim_end())
}

fn rule_width() -> usize {
    COLUMNS.iter().map(|(_, w)| w).sum::<usize>() + COLUMNS.len() - 1
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
