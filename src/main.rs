//! TERMDRILLS - Console Practice Drills
//!
//! A suite of small interactive console drills, one subcommand each:
//! a menu-driven geometry calculator, a kiosk ordering flow with gated
//! validation, a geometric series summer, a fixed number printer, and a
//! bounded double-echo prompt.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use termdrills::application::{run_double, run_kiosk, run_numbers, run_series, Menu};
use termdrills::domain::PriceList;
use termdrills::infrastructure::PriceRepository;
use termdrills::presentation::Console;

#[derive(Parser)]
#[command(name = "termdrills")]
#[command(about = "Interactive console drills: calculator menu, kiosk ordering, and number games")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Menu-driven geometry calculator
    Calculator,

    /// Shake kiosk ordering flow with gated validation
    Kiosk {
        /// Load prices from a JSON file instead of the built-in defaults
        #[arg(long)]
        prices: Option<PathBuf>,
    },

    /// Write the default price list to a JSON file
    InitPrices {
        /// Destination path for the price file
        path: PathBuf,
    },

    /// Sum the first elements of a geometric series
    Series,

    /// Print a fixed demonstration sequence of numbers
    Numbers,

    /// Read a bounded number and print it twice in a row
    Double,
}

/// Entry point for the drill suite.
///
/// Diagnostics go to stderr via `tracing` (filtered by `RUST_LOG`, quiet
/// by default); stdout is reserved for the drills themselves.
///
/// # Errors
///
/// Returns an error if a price file cannot be read or console I/O fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    let mut console = Console::new(&mut reader, &mut writer);

    match cli.command {
        Commands::Calculator => Menu::calculator().run(&mut console)?,
        Commands::Kiosk { prices } => {
            let prices = match prices {
                Some(path) => PriceRepository::load_prices(&path)?,
                None => PriceList::default(),
            };
            run_kiosk(&mut console, &prices)?;
        }
        Commands::InitPrices { path } => {
            PriceRepository::save_prices(&PriceList::default(), &path)?;
            console.println(&format!("Wrote default prices to {}", path.display()))?;
        }
        Commands::Series => run_series(&mut console)?,
        Commands::Numbers => run_numbers(&mut console)?,
        Commands::Double => run_double(&mut console)?,
    }

    Ok(())
}
