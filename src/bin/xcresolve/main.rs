//! xcresolve CLI - Xcode project graph resolution

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use xcresolve::util::diagnostic::emit;
use xcresolve::DiscoveryError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli, color) {
        match e.downcast_ref::<DiscoveryError>() {
            Some(discovery) => emit(&discovery.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, color: bool) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("xcresolve=debug")
    } else {
        EnvFilter::new("xcresolve=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, color),
        Commands::Targets(args) => commands::targets::execute(args, color),
        Commands::Workspace(args) => commands::workspace::execute(args),
    }
}
