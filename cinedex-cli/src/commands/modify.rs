use std::io::{BufRead, Write};

use cinedex_catalog::MovieUpdate;
use cinedex_db::OperationError;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::CliError;
use crate::prompt::Prompter;

use super::print_movies;

/// Menu 4: change some fields of one movie.
///
/// The movie is located by title substring. When several titles match, the
/// one with the lowest id is changed and the user is told which.
pub(crate) fn run_modify<R: BufRead, W: Write>(
    conn: &Connection,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    let original = prompter.line("Title of the movie to modify: ")?;
    if original.is_empty() {
        log::warn!("No title entered.");
        return Ok(());
    }

    let matches = cinedex_db::search_movies(conn, &original)?;
    let Some(target) = matches.first() else {
        return Err(OperationError::NotFound { query: original }.into());
    };
    print_movies(prompter.out(), &matches)?;
    if matches.len() > 1 {
        log::warn!(
            "{} movies match '{}'; only the first (id {}, '{}') will be modified. \
             Enter a more specific title to pick another.",
            matches.len(),
            original,
            target.id,
            target.title,
        );
    }

    let title = prompter.line("New title (Enter to keep): ")?;
    let director = prompter.line("New director (Enter to keep): ")?;
    let genre = prompter.line("New genre (Enter to keep): ")?;
    let year = prompter.line("New year (Enter to keep): ")?;
    let rating = prompter.line("New rating 1.0 - 10.0 (Enter to keep): ")?;
    let update = MovieUpdate::from_input(&title, &director, &genre, &year, &rating)?;

    let updated = cinedex_db::modify_movie(conn, &original, &update)?;
    if update.is_empty() {
        log::info!("No changes entered; '{}' left as is.", updated.title);
        return Ok(());
    }

    print_movies(prompter.out(), std::slice::from_ref(&updated))?;
    log::info!(
        "{} Updated {} field(s) of '{}'",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        update.len(),
        updated.title,
    );
    Ok(())
}
