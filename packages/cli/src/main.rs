use std::net::{IpAddr, Ipv4Addr};
use std::process;

use clap::{Parser, Subcommand};
use colored::*;

use atelier_cli::commands::{handle_bookings_command, print_backend, BookingsCommands};
use atelier_cli::config::Config;
use atelier_cli::{init_tracing, server};

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Atelier - consultation bookings and portfolio admin for an interior studio")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server (default)
    Serve {
        /// Address to bind
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,
    },
    /// Print which storage backend the current environment selects
    Backend,
    /// Inspect and update bookings
    #[command(subcommand)]
    Bookings(BookingsCommands),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Option<Commands>) -> Result<(), Box<dyn std::error::Error>> {
    match command.unwrap_or(Commands::Serve {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
    }) {
        Commands::Serve { host } => server::run_server(Config::from_env()?, host).await,
        Commands::Backend => {
            print_backend();
            Ok(())
        }
        Commands::Bookings(command) => handle_bookings_command(command).await,
    }
}
