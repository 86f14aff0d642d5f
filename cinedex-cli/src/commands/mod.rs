pub(crate) mod add;
pub(crate) mod delete;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod modify;
pub(crate) mod search;

use std::io::Write;

use cinedex_catalog::Movie;

use crate::CliError;
use crate::table::render_movies;

/// Write a table of movies to the console writer.
pub(crate) fn print_movies<W: Write>(out: &mut W, movies: &[Movie]) -> Result<(), CliError> {
    write!(out, "{}", render_movies(movies))?;
    out.flush()?;
    Ok(())
}
