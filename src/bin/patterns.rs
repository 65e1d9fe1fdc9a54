//! Runs the pattern demos.
//!
//! ```bash
//! cargo run --bin patterns -- all
//! cargo run --bin patterns -- decorator --menu demos/sourdough.toml --json
//! RUST_LOG=design_patterns=debug cargo run --bin patterns -- observer
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use design_patterns::decorator::{self, Receipt};
use design_patterns::factory::ShapeFactory;
use design_patterns::{adapter, facade, factory, observer, singleton, strategy, MenuConfig};

#[derive(Debug, Parser)]
#[command(name = "patterns")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Runnable illustrations of classic design patterns")]
struct Cli {
    /// Log library activity to stderr (same as RUST_LOG=design_patterns=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price a pizza built from toppings
    Decorator {
        /// TOML menu to build instead of the reference pizza
        #[arg(long)]
        menu: Option<PathBuf>,
        /// Print receipts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read a book's title through a name-based interface
    Adapter,
    /// Play three audio formats through one front
    Facade,
    /// Create shapes from string keys
    Factory {
        /// Create only this shape; unknown keys are an error
        #[arg(long)]
        kind: Option<String>,
    },
    /// Notify weather displays of new measurements
    Observer,
    /// Show that every accessor gets the same database
    Singleton,
    /// Swap shipping cost algorithms at runtime
    Strategy,
    /// Run every demo in turn
    All,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("design_patterns=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("design_patterns=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("=== {} ===", title).bold().cyan())
}

fn run_decorator(out: &mut impl Write, menu: Option<PathBuf>, json: bool) -> Result<()> {
    let receipts: Vec<Receipt> = match menu {
        Some(path) => MenuConfig::load(&path)
            .with_context(|| format!("loading menu {}", path.display()))?
            .receipts()
            .context("building pizza from menu")?,
        None => decorator::reference_receipts(),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &receipts)?;
        writeln!(out)?;
    } else {
        decorator::write_receipts(&receipts, out)?;
    }
    Ok(())
}

fn run_factory(out: &mut impl Write, kind: Option<String>) -> Result<()> {
    match kind {
        Some(kind) => {
            let shape = ShapeFactory::new()
                .get_shape(&kind)
                .with_context(|| format!("creating shape '{}'", kind))?;
            writeln!(out, "{}: {}", shape.name(), shape.draw())?;
        }
        None => factory::demo(out)?,
    }
    Ok(())
}

fn run_all(out: &mut impl Write) -> Result<()> {
    header(out, "Decorator Pattern")?;
    decorator::demo(out)?;
    writeln!(out)?;

    header(out, "Adapter Pattern")?;
    adapter::demo(out)?;
    writeln!(out)?;

    header(out, "Facade Pattern")?;
    facade::demo(out)?;
    writeln!(out)?;

    header(out, "Factory Pattern")?;
    factory::demo(out)?;
    writeln!(out)?;

    header(out, "Observer Pattern")?;
    observer::demo(out)?;
    writeln!(out)?;

    header(out, "Singleton Pattern")?;
    singleton::demo(out)?;
    writeln!(out)?;

    header(out, "Strategy Pattern")?;
    strategy::demo(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Decorator { menu, json } => run_decorator(&mut out, menu, json)?,
        Command::Adapter => adapter::demo(&mut out)?,
        Command::Facade => facade::demo(&mut out)?,
        Command::Factory { kind } => run_factory(&mut out, kind)?,
        Command::Observer => observer::demo(&mut out)?,
        Command::Singleton => singleton::demo(&mut out)?,
        Command::Strategy => strategy::demo(&mut out)?,
        Command::All => run_all(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
