//! statusbridge CLI - Sync a status-page component with tunnel health
//!
//! This module contains the shared CLI implementation used by all binaries.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use statusbridge_core::{Config, get_version};

/// Sync a status-page component with a tunnel's reported health
#[derive(Parser)]
#[command(name = "statusbridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sync a status-page component with a tunnel's reported health", long_about = None)]
#[command(after_help = get_banner())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Synchronize the component with the current tunnel status (default)
    Sync(commands::SyncArgs),
    /// Show both statuses and the pending action without writing
    Check(commands::CheckArgs),
}

/// Get the ASCII banner for help display
fn get_banner() -> &'static str {
    r#"
     _        _             _          _     _
 ___| |_ __ _| |_ _   _ ___| |__  _ __(_) __| | __ _  ___
/ __| __/ _` | __| | | / __| '_ \| '__| |/ _` |/ _` |/ _ \
\__ \ || (_| | |_| |_| \__ \ |_) | |  | | (_| | (_| |  __/
|___/\__\__,_|\__|\__,_|___/_.__/|_|  |_|\__,_|\__, |\___|
                                               |___/
"#
}

fn default_log_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(default_log_directive(verbose, quiet))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    // Missing environment is fatal before any network call is attempted.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", style("Error:").red().bold());
            eprintln!();
            eprintln!(
                "  {} Export the missing variables and re-run.",
                style("Tip:").cyan()
            );
            std::process::exit(1);
        }
    };

    tracing::debug!(
        "configuration loaded; tunnel {} -> component {}",
        config.tunnel_id,
        config.component_id
    );

    if cli.verbose > 0 {
        eprintln!(
            "{} {} {}",
            style("[info]").cyan(),
            style("statusbridge").cyan().bold(),
            style(get_version()).dim()
        );
    }

    let rt = tokio::runtime::Runtime::new()?;
    match cli.command {
        Some(Commands::Sync(ref args)) => rt.block_on(commands::cmd_sync(args, &config, cli.quiet)),
        Some(Commands::Check(ref args)) => {
            rt.block_on(commands::cmd_check(args, &config, cli.quiet))
        }
        // No subcommand means a plain scheduled invocation: just sync.
        None => rt.block_on(commands::cmd_sync(
            &commands::SyncArgs::default(),
            &config,
            cli.quiet,
        )),
    }
}
