//! Shared pieces of the cinedex frontend: application settings and
//! terminal display helpers.

pub mod display;
pub mod settings;

pub use display::{display_width, fit_to_width};
pub use settings::{Settings, SettingsError, load_settings, settings_path};
