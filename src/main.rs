//! Contact Agenda - Main entry point
//!
//! Runs the interactive menu (default), the HTTP API, or the seed command
//! against the configured backing file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_agenda::{cli, server, Agenda, Config};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-agenda")]
#[command(about = "Personal contact agenda with CSV import/export and a small HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive text menu (default)
    Menu,
    /// Serve GET/POST /contacts over HTTP
    Serve {
        /// Bind address, overrides AGENDA_HTTP_ADDR
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Insert a few sample contacts
    Seed,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr; stdout belongs to the menu
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut agenda = match Agenda::open(&config) {
        Ok(agenda) => agenda,
        Err(e) => {
            error!("Failed to open agenda: {}", e);
            return Err(e.into());
        }
    };

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = std::io::stdin();
            cli::run_menu(&mut agenda, &config.export_dir, stdin.lock(), std::io::stdout())?;
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or(config.http_addr);
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::run_server(Arc::new(Mutex::new(agenda)), addr))?;
            info!("HTTP server stopped");
        }
        Command::Seed => {
            let added = cli::seed_samples(&mut agenda);
            println!("Seeded contacts: {}", added);
        }
    }

    Ok(())
}
