use std::io::{BufRead, Write};

use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Prompter;

use super::print_movies;

/// Menu 2: list every movie, or those whose title contains a substring.
pub(crate) fn run_search<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let movies = if prompter.confirm("Search all movies? (y/n): ")? {
        cinedex_db::list_movies(conn)?
    } else {
        let title = prompter.line("Title to search for: ")?;
        if title.is_empty() {
            log::warn!("No title entered.");
            return Ok(());
        }
        cinedex_db::search_movies(conn, &title)?
    };

    if movies.is_empty() {
        log::info!("No movies found.");
        return Ok(());
    }
    print_movies(prompter.out(), &movies)?;
    log::info!("{} movie(s)", movies.len());
    Ok(())
}
