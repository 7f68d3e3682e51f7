use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashkit::config::AppConfig;
use dashkit::{assemble_layout, try_init_global, DashboardLayout, WidgetRegistry};
use dashkit_core::RecordingSurface;
use log::{error, info, warn};
use std::path::PathBuf;

/// dashkit - inspect the dashboard widget registry and check layouts
#[derive(Parser, Debug)]
#[command(name = "dashkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered widget types in picker order
    List,
    /// Show metadata and config schema for a widget type as JSON
    Info {
        /// Widget type key (e.g. Graph)
        key: String,
    },
    /// Print the default config for a widget type as JSON
    Defaults {
        /// Widget type key (e.g. Graph)
        key: String,
    },
    /// Assemble a layout file and report widgets that fall back to placeholders
    Check {
        /// Layout file (defaults to the configured layout)
        #[arg(value_name = "LAYOUT_FILE")]
        layout_file: Option<PathBuf>,

        /// Exit with an error if any widget falls back to a placeholder
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting dashkit v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let registry = try_init_global().context("Failed to build widget registry")?;

    match command {
        Command::List => list(registry),
        Command::Info { key } => show_info(registry, &key),
        Command::Defaults { key } => show_defaults(registry, &key),
        Command::Check {
            layout_file,
            strict,
        } => check(registry, layout_file, strict),
    }
}

fn list(registry: &WidgetRegistry) -> Result<()> {
    for key in registry.list_registered_types() {
        let meta = registry.resolve_metadata(key.as_str())?;
        println!("{:<16} {:<20} {}", key, meta.icon, meta.description);
    }
    Ok(())
}

fn show_info(registry: &WidgetRegistry, key: &str) -> Result<()> {
    let metadata = registry.resolve_metadata(key)?;
    let widget = registry.create_widget(key)?;

    let info = serde_json::json!({
        "key": key,
        "metadata": metadata,
        "schema": widget.config_schema(),
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn show_defaults(registry: &WidgetRegistry, key: &str) -> Result<()> {
    let defaults = registry.instantiate_default_config(key)?;
    println!("{}", serde_json::to_string_pretty(&defaults)?);
    Ok(())
}

fn check(registry: &WidgetRegistry, layout_file: Option<PathBuf>, strict: bool) -> Result<()> {
    let path = match layout_file {
        Some(path) => path,
        None => AppConfig::load()?.layout_path()?,
    };
    let layout = DashboardLayout::load_from_path(&path)
        .with_context(|| format!("Failed to load layout {:?}", path))?;
    info!("Loaded {} widgets from {:?}", layout.widgets.len(), path);

    let slots = assemble_layout(registry, &layout);
    let mut placeholders = 0;

    for slot in &slots {
        let mut surface = RecordingSurface::new();
        let width = f64::from(slot.geometry.width) * 100.0;
        let height = f64::from(slot.geometry.height) * 100.0;
        if let Err(e) = slot.widget().draw(&mut surface, width, height) {
            warn!("Widget {} failed to draw: {}", slot.placement_id, e);
        }

        match slot.placeholder_reason() {
            Some(reason) => {
                placeholders += 1;
                println!(
                    "{:<38} {:<12} placeholder: {}",
                    slot.placement_id, slot.widget_type, reason
                );
            }
            None => println!("{:<38} {:<12} ok", slot.placement_id, slot.widget_type),
        }
    }

    println!("{} widgets, {} placeholders", slots.len(), placeholders);

    if strict && placeholders > 0 {
        anyhow::bail!("{} widgets could not be instantiated", placeholders);
    }
    Ok(())
}
