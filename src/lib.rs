//! # LabelKit
//!
//! Perfume label layout editor. A label is a set of positioned, sized and
//! styled elements (logo, perfume name, shop name, price, extra info); the
//! layout is edited, persisted, and turned into a unit-correct render
//! request for a remote PDF rendering service.
//!
//! ## Architecture
//!
//! LabelKit is organized as a workspace with multiple crates:
//!
//! 1. **labelkit-core** - Unit conversion, validation, shared errors
//! 2. **labelkit-settings** - Style settings, print options, configuration
//! 3. **labelkit-designer** - Template model, layout editor, store, payload builder
//! 4. **labelkit-communication** - Rendering service client and print pipeline
//! 5. **labelkit** - Command-line front end that integrates all crates

pub mod cli;

pub use labelkit_core::{
    mm_to_points, within_page, BoundsError, Error, PageSize, PhysicalSize, Result, TemplateError,
    ValidationError,
};

pub use labelkit_settings::{
    Config, PrintOptions, SettingsManager, StyleSettings, Theme, ThemePreset,
};

pub use labelkit_designer::{
    build_request, FileBlobStore, LabelRow, LabelSession, LayoutEditor, RenderRequest, Template,
    TemplateStore,
};

pub use labelkit_communication::{
    HttpRenderService, LogoFile, PrintJob, RenderService, RenderedDocument, ServiceError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support (INFO by default)
/// - Human-readable output, or one JSON object per line when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
