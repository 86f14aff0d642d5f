use std::io::{BufRead, Write};
use std::path::Path;

use cinedex_lib::Settings;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Prompter;

/// Menu 1: import a JSON file of movies in one transaction.
pub(crate) fn run_import<R: BufRead, W: Write>(
    conn: &Connection,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let default = settings.transfer.import_file.display().to_string();
    let path = prompter.line_or_default(&format!("JSON file to import [{}]: ", default), &default)?;

    let stats = cinedex_transfer::import_movies(conn, Path::new(&path))?;
    log::info!(
        "{} Imported {} movie(s) from {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.inserted,
        path,
    );
    Ok(())
}
