use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{VehicleFilter, parse_bound};
use crate::types::{Discipline, Level, SortMode};

/// SL Automotive - Stanley Racing Academy and dealership in the terminal
#[derive(Parser)]
#[command(name = "sl-automotive")]
#[command(about = "Browse the SL Automotive stock and book Stanley Racing Academy sessions")]
#[command(version)]
pub struct Cli {
    /// Site configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive site
    Browse {
        /// Route to open, query string included (e.g. "/reserver?product=karting-loisir-20")
        #[arg(short, long, default_value = "/")]
        route: String,
    },
    /// Print the vehicle listing
    Catalog(CatalogArgs),
    /// Print the booking products, optionally narrowed down
    Products {
        /// auto or karting
        #[arg(short, long)]
        discipline: Option<Discipline>,

        /// debutant, intermediaire or confirme
        #[arg(short, long)]
        level: Option<Level>,
    },
    /// Print the reservation slots offered on a date
    Slots {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Validate a site configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(value_name = "CONFIG")]
        file: PathBuf,
    },
}

/// Marketplace filters, mirroring the listing's filter bar
#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Free text matched against make, model, trim and stock id
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub fuel: Option<String>,

    #[arg(long)]
    pub gearbox: Option<String>,

    /// Bounds are whole numbers; anything else is ignored
    #[arg(long)]
    pub min_year: Option<String>,

    #[arg(long)]
    pub max_year: Option<String>,

    #[arg(long)]
    pub min_price: Option<String>,

    #[arg(long)]
    pub max_price: Option<String>,

    /// none, newest, asc or desc
    #[arg(long, default_value = "none")]
    pub sort: SortMode,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    pub fn filter(&self) -> VehicleFilter {
        let bound = |text: &Option<String>| text.as_deref().and_then(parse_bound);
        VehicleFilter {
            query: self.search.clone(),
            brand: self.brand.clone(),
            fuel: self.fuel.clone(),
            gearbox: self.gearbox.clone(),
            min_year: bound(&self.min_year),
            max_year: bound(&self.max_year),
            min_price: bound(&self.min_price),
            max_price: bound(&self.max_price),
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // No command opens the interactive site
        let cli = Cli::try_parse_from(["sl-automotive"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_browse_route_with_query() {
        let cli = Cli::try_parse_from([
            "sl-automotive",
            "browse",
            "--route",
            "/reserver?product=karting-loisir-20",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Browse { route }) => {
                assert_eq!(route, "/reserver?product=karting-loisir-20");
            }
            _ => panic!("Expected Browse command"),
        }
    }

    #[test]
    fn test_cli_browse_defaults_to_home() {
        let cli = Cli::try_parse_from(["sl-automotive", "browse"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Browse { route }) if route == "/"));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sl-automotive",
            "slots",
            "2026-03-14",
            "--config",
            "/etc/sl/site.json",
            "--log-file",
            "/tmp/sl.log",
        ])
        .unwrap();
        assert_eq!(cli.config.unwrap().to_str().unwrap(), "/etc/sl/site.json");
        assert_eq!(cli.log_file.unwrap().to_str().unwrap(), "/tmp/sl.log");
        assert!(matches!(cli.command, Some(Commands::Slots { date }) if date == "2026-03-14"));
    }

    #[test]
    fn test_cli_catalog_filters() {
        let cli = Cli::try_parse_from([
            "sl-automotive",
            "catalog",
            "--brand",
            "BMW",
            "--min-price",
            "30000",
            "--max-year",
            "abc",
            "--sort",
            "desc",
            "--json",
        ])
        .unwrap();
        let Some(Commands::Catalog(args)) = cli.command else {
            panic!("Expected Catalog command");
        };
        assert_eq!(args.sort, SortMode::PriceDescending);
        assert!(args.json);

        let filter = args.filter();
        assert_eq!(filter.brand.as_deref(), Some("BMW"));
        assert_eq!(filter.min_price, Some(30000.0));
        // Malformed bound means no bound
        assert_eq!(filter.max_year, None);
    }

    #[test]
    fn test_cli_catalog_rejects_unknown_sort() {
        let result = Cli::try_parse_from(["sl-automotive", "catalog", "--sort", "cheapest"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_products_typed_filters() {
        let cli = Cli::try_parse_from([
            "sl-automotive",
            "products",
            "--discipline",
            "karting",
            "--level",
            "debutant",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Products { discipline, level }) => {
                assert_eq!(discipline, Some(Discipline::Karting));
                assert_eq!(level, Some(Level::Beginner));
            }
            _ => panic!("Expected Products command"),
        }
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["sl-automotive", "validate", "/path/to/site.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate { file }) => {
                assert_eq!(file.to_str().unwrap(), "/path/to/site.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }
}
