//! Command-line front end.
//!
//! Every command opens the persisted session, applies one change (or reads
//! it), and exits. Changes are saved by the session itself.

use crate::{BUILD_DATE, VERSION};
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use labelkit_communication::{HttpRenderService, LogoFile, PrintJob};
use labelkit_designer::{
    preview, FileBlobStore, LabelSession, Point, ResizeHandle, TemplateStore,
};
use labelkit_settings::{ColorRef, Config, FontRole, SettingsManager, ThemePreset};
use std::path::PathBuf;
use tracing::info;

/// LabelKit - perfume label layout and printing
#[derive(Parser, Debug)]
#[command(name = "labelkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the saved session
    #[arg(long, global = true, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the layout, style, print options and rows
    Show {
        /// Print the saved session as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move an element by a fixed offset
    #[command(allow_negative_numbers = true)]
    Nudge { id: String, dx: f64, dy: f64 },

    /// Drag an element by a pointer offset
    #[command(allow_negative_numbers = true)]
    Drag { id: String, dx: f64, dy: f64 },

    /// Resize an element from a corner (tl, tr, bl, br)
    #[command(allow_negative_numbers = true)]
    Resize {
        id: String,
        handle: ResizeHandle,
        dx: f64,
        dy: f64,
    },

    /// Set or clear an element's own font size
    ElementSize {
        id: String,
        /// Size in points; omit to use the font role size
        size: Option<f64>,
    },

    /// Apply a preset palette (gold, classic, rose)
    Theme { preset: ThemePreset },

    /// Set one palette color, e.g. `color accentColor #F59E0B`
    Color { key: ColorRef, value: String },

    /// Set the family and/or size of a font role
    Font {
        role: FontRole,
        #[arg(long)]
        family: Option<String>,
        #[arg(long)]
        size: Option<f64>,
    },

    /// Update print options
    Options(OptionsArgs),

    /// Edit label rows
    #[command(subcommand)]
    Row(RowCommand),

    /// Render the labels through the rendering service
    Print {
        /// Where to write the PDF
        #[arg(long, short, default_value = "labels.pdf")]
        output: PathBuf,

        /// Logo image uploaded before rendering
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,
    },

    /// Forget the saved session
    Reset,

    /// Show version and build information
    Info,
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[arg(long)]
    pub copies: Option<u32>,
    /// Corner radius in mm
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<f64>,
    /// Label width in mm
    #[arg(long, requires = "height")]
    pub width: Option<f64>,
    /// Label height in mm
    #[arg(long, requires = "width")]
    pub height: Option<f64>,
    #[arg(long)]
    pub shop_name: Option<String>,
    #[arg(long)]
    pub currency: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum RowCommand {
    /// Append an empty row
    Add,
    /// Set a field of a row (rows are numbered from 1)
    Set {
        row: usize,
        key: String,
        value: String,
    },
    /// Remove a row
    Remove { row: usize },
    /// List rows with their resolved texts
    List,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            config.apply_env();
            config
        }
        None => SettingsManager::load()?,
    };
    Ok(config)
}

fn open_session(cli: &Cli, config: &Config) -> anyhow::Result<LabelSession> {
    let dir = match &cli.store_dir {
        Some(dir) => dir.clone(),
        None => SettingsManager::storage_dir(config)?,
    };
    let store = TemplateStore::new(FileBlobStore::new(dir), config.storage.blob_key.clone());
    Ok(LabelSession::open(store))
}

fn row_index(row: usize) -> anyhow::Result<usize> {
    if row == 0 {
        bail!("Rows are numbered from 1");
    }
    Ok(row - 1)
}

/// Run one command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Info = cli.command {
        println!("labelkit {VERSION} (built {BUILD_DATE})");
        return Ok(());
    }

    let config = load_config(&cli)?;
    let mut session = open_session(&cli, &config)?;

    match cli.command {
        Commands::Show { json } => show(&session, json)?,
        Commands::Nudge { id, dx, dy } => match session.nudge(&id, dx, dy)? {
            Some(g) => println!("{id}: x={} y={}", g.x, g.y),
            None => bail!("{id} is being edited"),
        },
        Commands::Drag { id, dx, dy } => {
            session.begin_drag(&id, Point::new(0.0, 0.0))?;
            session.update_drag(&id, Point::new(dx, dy))?;
            if let Some(g) = session.commit_drag(&id)? {
                println!("{id}: x={} y={}", g.x, g.y);
            }
        }
        Commands::Resize { id, handle, dx, dy } => {
            session.begin_resize(&id, handle, Point::new(0.0, 0.0))?;
            session.update_resize(&id, Point::new(dx, dy))?;
            if let Some(g) = session.commit_resize(&id)? {
                println!("{id}: x={} y={} {}x{}", g.x, g.y, g.width, g.height);
            }
        }
        Commands::ElementSize { id, size } => session.set_element_font_size(&id, size)?,
        Commands::Theme { preset } => session.apply_preset(preset)?,
        Commands::Color { key, value } => session.set_color(key, &value)?,
        Commands::Font { role, family, size } => {
            if family.is_none() && size.is_none() {
                bail!("Nothing to change: pass --family and/or --size");
            }
            if let Some(family) = family {
                session.set_font_family(role, &family)?;
            }
            if let Some(size) = size {
                let stored = session.set_font_size(role, size)?;
                println!("{role}: {stored} pt");
            }
        }
        Commands::Options(args) => update_options(&mut session, args)?,
        Commands::Row(command) => rows(&mut session, command)?,
        Commands::Print { output, logo } => print(&session, &config, output, logo)?,
        Commands::Reset => {
            session.reset()?;
            println!("Session reset");
        }
        Commands::Info => {}
    }

    Ok(())
}

fn show(session: &LabelSession, json: bool) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({
            "template": session.template(),
            "style": session.style(),
            "options": session.options(),
            "rows": session.rows(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let template = session.template();
    let canvas = template.canvas();
    println!("Canvas {}x{}", canvas.width, canvas.height);
    for element in template.elements() {
        let g = element.geometry;
        println!(
            "  {:<12} {:<5} x={:<7} y={:<7} {}x{}{}",
            element.id,
            element.kind,
            g.x,
            g.y,
            g.width,
            g.height,
            if element.required { " (required)" } else { "" }
        );
    }

    let style = session.style();
    match style.theme {
        labelkit_settings::Theme::Preset { name } => println!("Theme: {name}"),
        labelkit_settings::Theme::Custom => println!("Theme: custom"),
    }
    for key in ColorRef::ALL {
        println!("  {:<16} {}", key.key(), style.color(key));
    }
    for role in FontRole::ALL {
        let font = style.font(role);
        println!("  {:<16} {} {} pt", role.key(), font.family, font.size);
    }

    let options = session.options();
    println!(
        "Label {} radius {} mm, {} copies per row, shop '{}', currency '{}'",
        options.physical_size, options.radius_mm, options.copies, options.shop_name, options.currency
    );
    println!("Rows: {}", session.rows().len());
    Ok(())
}

fn update_options(session: &mut LabelSession, args: OptionsArgs) -> anyhow::Result<()> {
    if let Some(copies) = args.copies {
        let stored = session.set_copies(copies)?;
        if stored != copies {
            println!("Copies clamped to {stored}");
        }
    }
    if let Some(radius) = args.radius {
        session.set_radius_mm(radius)?;
    }
    if let (Some(width), Some(height)) = (args.width, args.height) {
        session.set_physical_size(width, height)?;
    }
    if let Some(shop_name) = args.shop_name {
        session.set_shop_name(&shop_name)?;
    }
    if let Some(currency) = args.currency {
        session.set_currency(&currency)?;
    }
    Ok(())
}

fn rows(session: &mut LabelSession, command: RowCommand) -> anyhow::Result<()> {
    match command {
        RowCommand::Add => {
            let index = session.add_row()?;
            println!("Added row {}", index + 1);
        }
        RowCommand::Set { row, key, value } => {
            session.set_row_field(row_index(row)?, &key, &value)?;
        }
        RowCommand::Remove { row } => {
            session.remove_row(row_index(row)?)?;
        }
        RowCommand::List => {
            for (index, row) in session.rows().iter().enumerate() {
                println!("Row {}", index + 1);
                for text in preview(session.template(), row) {
                    let marker = if text.is_placeholder { " (placeholder)" } else { "" };
                    println!("  {:<12} {}{}", text.id, text.text, marker);
                }
            }
        }
    }
    Ok(())
}

fn print(
    session: &LabelSession,
    config: &Config,
    output: PathBuf,
    logo: Option<PathBuf>,
) -> anyhow::Result<()> {
    // Validate before touching the network
    let request = session.build_request()?;
    let logo = logo
        .map(|path| LogoFile::from_path(&path).with_context(|| format!("Logo {}", path.display())))
        .transpose()?;

    let service = HttpRenderService::from_config(config)?;
    info!("Printing through {}", service.base_url());
    let job = PrintJob::new(service);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let document = runtime.block_on(job.run(&request, logo.as_ref()))?;

    document.write_to(&output)?;
    println!(
        "Wrote {} labels to {}",
        request.label_count(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_offsets() {
        let cli = Cli::try_parse_from(["labelkit", "nudge", "price", "-5", "10"]).unwrap();
        match cli.command {
            Commands::Nudge { id, dx, dy } => {
                assert_eq!(id, "price");
                assert_eq!((dx, dy), (-5.0, 10.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parses_symbolic_keys() {
        let cli = Cli::try_parse_from(["labelkit", "color", "borderColor", "#000000"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Color {
                key: ColorRef::BorderColor,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["labelkit", "resize", "logo", "br", "10", "-3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Resize {
                handle: ResizeHandle::BottomRight,
                ..
            }
        ));
    }

    #[test]
    fn test_row_numbers_start_at_one() {
        assert!(row_index(0).is_err());
        assert_eq!(row_index(3).unwrap(), 2);
    }
}
