//! Console logger for the `log` facade.
//!
//! `info` goes to stdout as plain text so command output reads naturally;
//! warnings and errors go to stderr with a colored prefix. In verbose mode
//! debug records from cinedex crates are shown and every line carries a
//! timestamp. An optional log file receives the same lines without ANSI codes.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use cinedex_lib::settings::LoggingSettings;
use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

struct CliLogger {
    verbose: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let message = match record.level() {
            Level::Error => format!(
                "{} {}",
                "error:".if_supports_color(Stderr, |t| t.red().bold().to_string()),
                record.args()
            ),
            Level::Warn => format!(
                "{} {}",
                "warning:".if_supports_color(Stderr, |t| t.yellow().bold().to_string()),
                record.args()
            ),
            Level::Info => record.args().to_string(),
            Level::Debug | Level::Trace => format!(
                "{}",
                format!("[{}] {}", record.target(), record.args())
                    .if_supports_color(Stdout, |t| t.dimmed().to_string())
            ),
        };

        if self.verbose {
            let ts = chrono::Local::now().format("%H:%M:%S%.3f");
            format!("{} {}", ts, message)
        } else {
            message
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.level() {
            Level::Error | Level::Warn | Level::Info => true,
            Level::Debug => self.verbose && metadata.target().starts_with("cinedex"),
            Level::Trace => false,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);

        match record.level() {
            Level::Error | Level::Warn => eprintln!("{}", line),
            _ => println!("{}", line),
        }

        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

fn open_logfile(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the console logger. Call once, before anything logs.
pub(crate) fn init(settings: &LoggingSettings) {
    let mut logfile_error = None;
    let file = settings
        .logfile
        .as_deref()
        .and_then(|path| match open_logfile(path) {
            Ok(f) => Some(Mutex::new(f)),
            Err(e) => {
                logfile_error = Some(format!("cannot open log file {}: {}", path.display(), e));
                None
            }
        });

    let max_level = if settings.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = CliLogger {
        verbose: settings.verbose,
        file,
    };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }

    if let Some(msg) = logfile_error {
        log::warn!("{}", msg);
    }
}

#[cfg(test)]
#[path = "tests/logger_tests.rs"]
mod tests;
