//! cinedex CLI
//!
//! Interactive terminal catalog of movies backed by a local SQLite file.

mod commands;
mod error;
mod logger;
mod menu;
mod prompt;
mod table;

use std::io;

use cinedex_db::MovieStore;
use cinedex_lib::Settings;

pub(crate) use error::CliError;

use crate::menu::Menu;
use crate::prompt::Prompter;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let (settings, settings_error) = match cinedex_lib::load_settings() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logger::init(&settings.logging);
    if let Some(e) = settings_error {
        log::warn!("{}; using default settings", e);
    }

    let store = match MovieStore::open(&settings.storage.database) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Database connection error: {}", e);
            return;
        }
    };

    {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut menu = Menu::new(&store, &settings, Prompter::new(stdin.lock(), stdout.lock()));
        if let Err(e) = menu.run() {
            log::error!("{}", e);
        }
    }

    if let Err(e) = store.close() {
        log::warn!("{}", e);
    }
}
