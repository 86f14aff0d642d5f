//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use cinedex_db::MovieStore;
use cinedex_lib::Settings;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands;
use crate::prompt::Prompter;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    Import,
    Search,
    Add,
    Modify,
    Delete,
    Export,
    Quit,
}

impl MenuChoice {
    pub(crate) const ALL: [MenuChoice; 7] = [
        MenuChoice::Import,
        MenuChoice::Search,
        MenuChoice::Add,
        MenuChoice::Modify,
        MenuChoice::Delete,
        MenuChoice::Export,
        MenuChoice::Quit,
    ];

    /// Parse a menu number ("1" through "7").
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub(crate) fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuChoice::Import => "Import movies from JSON",
            MenuChoice::Search => "Search movies",
            MenuChoice::Add => "Add a movie",
            MenuChoice::Modify => "Modify a movie",
            MenuChoice::Delete => "Delete movies",
            MenuChoice::Export => "Export movies to JSON",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Drives the read-dispatch loop against one open store.
pub(crate) struct Menu<'a, R, W> {
    store: &'a MovieStore,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub(crate) fn new(store: &'a MovieStore, settings: &'a Settings, prompter: Prompter<R, W>) -> Self {
        Self {
            store,
            settings,
            prompter,
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// Command failures and undecodable input are reported and the loop
    /// continues; only other console I/O errors end it early.
    pub(crate) fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.print_menu()?;
            let answer = match self.prompter.ask("Choose an option (1-7): ") {
                Ok(Some(answer)) => answer,
                Ok(None) => {
                    log::debug!("End of input; leaving menu");
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::warn!("Invalid choice: {}. Enter a number from 1 to 7.", e);
                    crate::log_blank();
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                log::warn!("Invalid choice '{}'. Enter a number from 1 to 7.", answer);
                crate::log_blank();
                continue;
            };

            if choice == MenuChoice::Quit {
                log::info!("Goodbye.");
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(CliError::EndOfInput) => {
                    log::debug!("End of input during {:?}; leaving menu", choice);
                    break;
                }
                Err(e) => log::error!("{}", e),
            }
            crate::log_blank();
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), CliError> {
        let conn = self.store.conn();
        let prompter = &mut self.prompter;
        match choice {
            MenuChoice::Import => commands::import::run_import(conn, self.settings, prompter),
            MenuChoice::Search => commands::search::run_search(conn, prompter),
            MenuChoice::Add => commands::add::run_add(conn, prompter),
            MenuChoice::Modify => commands::modify::run_modify(conn, prompter),
            MenuChoice::Delete => commands::delete::run_delete(conn, prompter),
            MenuChoice::Export => commands::export::run_export(conn, self.settings, prompter),
            MenuChoice::Quit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        let out = self.prompter.out();
        writeln!(
            out,
            "{}",
            "----- Movie Catalog -----".if_supports_color(Stdout, |t| t.bold())
        )?;
        for choice in MenuChoice::ALL {
            writeln!(out, "{}. {}", choice.number(), choice.label())?;
        }
        writeln!(out, "-------------------------")?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
