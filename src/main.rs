//! cafe-menu CLI
//!
//! Browse the café menu interactively, or print it for a category.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use cafe_menu::catalog::Catalog;
use cafe_menu::config::{load_catalog, resolve_catalog_source};
use cafe_menu::logging::{self, LogTarget};
use cafe_menu::menu::MenuState;
use cafe_menu::report::{format_filters, format_menu};
use cafe_menu::types::{CategoryFilter, OutputFormat};

#[derive(Parser)]
#[command(name = "cafe-menu")]
#[command(about = "Browse the café menu: filter by category, mark favorites, view details")]
#[command(version)]
struct Cli {
    /// Catalog JSON file (default: $CAFE_MENU_CATALOG, then the config dir, then the house menu)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Write logs to this file (the interactive browser logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Browse,

    /// Print the menu, optionally for a single category
    List {
        /// "All", "Coffee", "Pastries" or "Cold Drinks"
        #[arg(long, short, default_value = "All")]
        category: CategoryFilter,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the category tabs with item counts
    Categories,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Browse) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    if let Err(e) = logging::init(log_target, cli.verbose) {
        eprintln!("Error: could not open log file: {}", e);
        return ExitCode::FAILURE;
    }

    let result = open_catalog(cli.catalog).and_then(|catalog| match command {
        Commands::Browse => cmd_browse(catalog),
        Commands::List { category, format } => cmd_list(catalog, category, format.into()),
        Commands::Categories => cmd_categories(catalog),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// CATALOG RESOLUTION
// ============================================================================

fn open_catalog(flag: Option<PathBuf>) -> Result<Catalog, String> {
    let source = resolve_catalog_source(flag.as_deref());
    load_catalog(&source).map_err(|e| e.to_string())
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_browse(catalog: Catalog) -> Result<(), String> {
    cafe_menu::tui::run(catalog).map_err(|e| format!("Terminal error: {}", e))
}

fn cmd_list(catalog: Catalog, category: CategoryFilter, format: OutputFormat) -> Result<(), String> {
    let mut menu = MenuState::new(catalog);
    menu.set_category_filter(category);

    if let CategoryFilter::Only(c) = category {
        if !menu.catalog().categories().contains(&c) {
            tracing::warn!("No items in category {}", c);
        }
    }

    print!("{}", format_menu(&menu, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_categories(catalog: Catalog) -> Result<(), String> {
    let menu = MenuState::new(catalog);
    print!("{}", format_filters(&menu));
    Ok(())
}
