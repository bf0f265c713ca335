//! SL Automotive - Main entry point
//!
//! Launches the interactive site or runs one of the scriptable commands over
//! the same catalog and booking logic.

use anyhow::Context;
use chrono::NaiveDate;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use sl_automotive::app::App;
use sl_automotive::booking::{DATE_FORMAT, slots_for};
use sl_automotive::catalog::{
    CatalogSource, StaticCatalog, filter_and_sort, format_mileage, format_price,
};
use sl_automotive::cli::{CatalogArgs, Cli, Commands};
use sl_automotive::config_file::SiteConfig;
use sl_automotive::error::SiteError;
use sl_automotive::routes::Location;
use sl_automotive::types::{Discipline, Level};

/// Initialize tracing.
///
/// The TUI owns the terminal, so logs only reach stderr at `warn` and above
/// unless a log file is given. `RUST_LOG` overrides the level either way.
fn init_logger(log_file: Option<&Path>) -> anyhow::Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .init();
        }
        None => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    init_logger(cli.log_file.as_deref())?;
    info!("SL Automotive starting up");
    debug!("CLI arguments parsed");

    if let Some(Commands::Validate { file }) = &cli.command {
        return validate_config(file);
    }

    let config = load_config(cli.config.as_deref())?;
    let catalog = load_catalog(&config)?;

    match cli.command {
        Some(Commands::Browse { route }) => run_tui(catalog, config, Location::parse(&route)),
        Some(Commands::Catalog(args)) => Ok(print_catalog(catalog.as_ref(), &args)?),
        Some(Commands::Products { discipline, level }) => {
            print_products(catalog.as_ref(), discipline, level);
            Ok(())
        }
        Some(Commands::Slots { date }) => Ok(print_slots(&date)?),
        Some(Commands::Validate { .. }) => Ok(()),
        None => {
            info!("No command specified, launching the site");
            run_tui(catalog, config, Location::parse("/"))
        }
    }
}

/// Site configuration from `--config`, or the defaults
fn load_config(path: Option<&Path>) -> Result<SiteConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        debug!("No configuration file, using defaults");
        return Ok(SiteConfig::default());
    };
    info!("Loading configuration from {:?}", path);
    let config = SiteConfig::load_from_file(path)?;
    config
        .validate()
        .map_err(|e| SiteError::config(e.to_string()))?;
    Ok(config)
}

/// Catalog file named by the configuration, or the demo stock
fn load_catalog(config: &SiteConfig) -> Result<Arc<dyn CatalogSource>, Box<dyn std::error::Error>> {
    let catalog = match &config.catalog_path {
        Some(path) => StaticCatalog::load_from_file(path)?,
        None => StaticCatalog::demo(),
    };
    Ok(Arc::new(catalog))
}

fn validate_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!("Validating configuration file: {:?}", path);
    let result = SiteConfig::load_from_file(path).and_then(|config| {
        config.validate()?;
        if let Some(catalog_path) = &config.catalog_path {
            StaticCatalog::load_from_file(catalog_path)?;
        }
        Ok(config)
    });

    match result {
        Ok(config) => {
            info!("Configuration validation successful");
            println!("✓ Configuration file is valid: {:?}", path);
            println!("  WhatsApp : +{}", config.whatsapp_number);
            match &config.catalog_path {
                Some(catalog) => println!("  Catalog  : {:?}", catalog),
                None => println!("  Catalog  : built-in demo stock"),
            }
            Ok(())
        }
        Err(e) => {
            error!("Configuration validation failed: {:#}", e);
            eprintln!("✗ Configuration validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn print_catalog(catalog: &dyn CatalogSource, args: &CatalogArgs) -> sl_automotive::error::Result<()> {
    let filter = args.filter();
    let vehicles = filter_and_sort(catalog.vehicles(), &filter, args.sort);
    debug!(count = vehicles.len(), sort = %args.sort, "Catalog filtered");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&vehicles)?);
        return Ok(());
    }

    if vehicles.is_empty() {
        println!("Aucun véhicule ne correspond à ces critères.");
        return Ok(());
    }
    for vehicle in &vehicles {
        println!(
            "{:<10} {:<28} {:<5} {:>12} {:>16}  {} · {}",
            vehicle.stock_id,
            vehicle.display_name(),
            vehicle.year,
            format_mileage(vehicle.mileage_km),
            format_price(vehicle.price),
            vehicle.fuel,
            vehicle.gearbox,
        );
    }
    println!("{} véhicule(s)", vehicles.len());
    Ok(())
}

fn print_products(catalog: &dyn CatalogSource, discipline: Option<Discipline>, level: Option<Level>) {
    let products: Vec<_> = catalog
        .products()
        .iter()
        .filter(|p| p.matches(discipline, level))
        .collect();

    if products.is_empty() {
        println!("Aucune formation pour ces critères.");
        return;
    }
    for product in products {
        println!(
            "{:<24} {:<36} {:>8} {:>6} €",
            product.id, product.title, product.duration, product.price
        );
    }
}

fn print_slots(date: &str) -> sl_automotive::error::Result<()> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
        SiteError::validation(format!("invalid date {date:?}, expected YYYY-MM-DD"))
    })?;
    println!("{}", date.format("%A %d/%m/%Y"));
    for slot in slots_for(date) {
        println!("  {slot}");
    }
    Ok(())
}

/// Run the interactive site
fn run_tui(
    catalog: Arc<dyn CatalogSource>,
    config: SiteConfig,
    location: Location,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| SiteError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| SiteError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SiteError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(catalog, config, location);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}
