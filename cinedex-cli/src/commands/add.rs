use std::io::{BufRead, Write};

use cinedex_catalog::NewMovie;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Prompter;

/// Menu 3: add a single movie.
pub(crate) fn run_add<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let title = prompter.line("Title: ")?;
    let director = prompter.line("Director: ")?;
    let genre = prompter.line("Genre: ")?;
    let year = prompter.line("Year: ")?;
    let rating = prompter.line("Rating (1.0 - 10.0): ")?;

    let movie = NewMovie::from_input(&title, &director, &genre, &year, &rating)?;
    let stored = cinedex_db::add_movie(conn, &movie)?;

    log::info!(
        "{} Added '{}' (id {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stored.title,
        stored.id,
    );
    Ok(())
}
