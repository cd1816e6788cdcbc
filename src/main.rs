//! jetconf CLI - inspect and check `/etc/<program>.conf` files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use jetconf::Loader;

#[derive(Parser)]
#[command(name = "jetconf")]
#[command(about = "Locate and check JSON config files named after a program", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose output (otherwise RUST_LOG, defaulting to info)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the config path for a program
    Path {
        /// Program invocation name (defaults to this binary's argv[0])
        #[arg(short, long)]
        name: Option<String>,

        /// Prefix placed before /etc
        #[arg(short, long, default_value = "")]
        prefix: String,
    },

    /// Read and decode a program's config file, then print it
    Check {
        /// Program invocation name
        #[arg(short, long)]
        name: String,

        /// Prefix placed before /etc
        #[arg(short, long, default_value = "")]
        prefix: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; --verbose wins over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Path { name, prefix } => print_path(name, prefix),
        Commands::Check { name, prefix } => check_config(name, prefix),
    }
}

fn loader_for(name: Option<String>, prefix: String) -> Result<Loader> {
    let loader = match name {
        Some(name) => Loader::new(name),
        None => Loader::from_env().context("Failed to determine invocation name")?,
    };
    Ok(loader.with_prefix(prefix))
}

fn print_path(name: Option<String>, prefix: String) -> Result<()> {
    let loader = loader_for(name, prefix)?;
    println!("{}", loader.config_path().display());
    Ok(())
}

fn check_config(name: String, prefix: String) -> Result<()> {
    let loader = loader_for(Some(name), prefix)?;
    let path = loader.config_path();

    let value: serde_json::Value = loader
        .load()
        .with_context(|| format!("Config check failed for {}", path.display()))?;

    info!("Config file is valid: {}", path.display());
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
