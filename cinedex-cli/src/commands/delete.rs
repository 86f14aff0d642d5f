use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Prompter;

use super::print_movies;

/// Menu 5: delete every movie or those matching a title substring.
///
/// Both paths show what is about to go and ask for confirmation first.
pub(crate) fn run_delete<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    if prompter.confirm("Delete all movies? (y/n): ")? {
        let count = cinedex_db::count_movies(conn)?;
        if count == 0 {
            log::info!("The catalog is already empty.");
            return Ok(());
        }
        let prompt = format!(
            "This permanently deletes all {} movie(s). Proceed? [y/N] ",
            count
        );
        if !prompter.confirm(&prompt)? {
            log::info!("Cancelled.");
            return Ok(());
        }
        let deleted = cinedex_db::delete_movies(conn, None)?;
        report_deleted(deleted);
        return Ok(());
    }

    let title = prompter.line("Title of the movie(s) to delete: ")?;
    if title.is_empty() {
        log::warn!("No title entered.");
        return Ok(());
    }

    let matches = cinedex_db::search_movies(conn, &title)?;
    if matches.is_empty() {
        log::info!("No movies found.");
        return Ok(());
    }
    print_movies(prompter.out(), &matches)?;
    if !prompter.confirm(&format!("Delete these {} movie(s)? [y/N] ", matches.len()))? {
        log::info!("Cancelled.");
        return Ok(());
    }

    let deleted = cinedex_db::delete_movies(conn, Some(&title))?;
    report_deleted(deleted);
    Ok(())
}

fn report_deleted(deleted: usize) {
    log::info!(
        "{} Deleted {} movie(s)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        deleted,
    );
}
