//! LabelKit Settings Crate
//!
//! Handles style settings (palette, theme, fonts), print options and the
//! application configuration file.

pub mod config;
pub mod error;
pub mod manager;
pub mod print;
pub mod style;

pub use config::{Config, ServiceSettings, StorageSettings, SERVICE_URL_ENV};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
pub use print::{PrintOptions, DEFAULT_CURRENCY};
pub use style::{
    Color, ColorRef, FontChoice, FontRole, FontSettings, Palette, StyleSettings, Theme,
    ThemePreset,
};
