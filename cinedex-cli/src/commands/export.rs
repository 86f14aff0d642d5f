use std::io::{BufRead, Write};
use std::path::Path;

use cinedex_lib::Settings;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Prompter;

/// Menu 6: write all or matching movies to a JSON file.
pub(crate) fn run_export<R: BufRead, W: Write>(
    conn: &Connection,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let filter = if prompter.confirm("Export all movies? (y/n): ")? {
        None
    } else {
        let title = prompter.line("Title of the movie(s) to export: ")?;
        if title.is_empty() {
            log::warn!("No title entered.");
            return Ok(());
        }
        Some(title)
    };

    let default = settings.transfer.export_file.display().to_string();
    let path = prompter.line_or_default(&format!("Export to [{}]: ", default), &default)?;

    let stats = cinedex_transfer::export_movies(conn, Path::new(&path), filter.as_deref())?;
    log::info!(
        "{} Exported {} movie(s) to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.exported,
        stats.path.display(),
    );
    Ok(())
}
