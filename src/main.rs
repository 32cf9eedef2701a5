//! lpc32x0 - Register dump/decode tool for NXP LPC32x0 SoCs
//!
//! Reads, decodes and writes the SoC's memory-mapped registers through
//! `/dev/mem`, decodes register dumps taken elsewhere, and reads SPI-NOR
//! flash attached to the SPI1/SPI2 block.
//!
//! # Architecture
//!
//! - `lpc32x0-core`: register catalog, permission-checked access, the
//!   single-page physical window and the field report helpers
//! - `lpc32x0-physmap`: `/dev/mem` page mapping
//! - `lpc32x0-tables`: the built-in register sets and field decoders
//! - `lpc32x0-spi`: the SPI-NOR driver
//!
//! Every command shares one `RegisterAccess`; its window is closed before
//! the process exits, whether the command succeeded or not.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands, SpiCommands};
use lpc32x0_core::{RegisterAccess, RegisterCatalog, RegisterWindow};
use lpc32x0_physmap::DevMem;

use std::fs::File;
use std::io::{BufReader, IsTerminal};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let catalog = load_catalog(cli.catalog.as_deref())?;
    log::debug!("Catalog has {} register sets", catalog.len());

    let window = lpc32x0_core::PhysicalWindow::new(DevMem::with_path(cli.mem.clone()));
    let mut access = RegisterAccess::new(catalog, window);

    let result = run_command(cli.command, &mut access);

    access.close();
    result
}

/// Dispatch one subcommand
fn run_command<W: RegisterWindow>(
    command: Commands,
    access: &mut RegisterAccess<W>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Dump { long, reg, set } => commands::dump::run_dump(access, long, &reg, &set),
        Commands::Offline { long, input } => match input {
            Some(path) => {
                let file = File::open(&path)?;
                commands::offline::run_offline(access, BufReader::new(file), long)
            }
            None => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    eprintln!("Reading \"<addr>: <value> [<value> ...]\" lines from stdin");
                }
                commands::offline::run_offline(access, stdin.lock(), long)
            }
        },
        Commands::Write { addr, value } => commands::write::run_write(access, addr, value),
        Commands::Spi(subcmd) => match subcmd {
            SpiCommands::Id { options } => commands::spi::run_id(access, &options),
            SpiCommands::Read {
                options,
                addr,
                len,
                output,
            } => commands::spi::run_read(
                access,
                &options,
                addr,
                len as usize,
                output.as_deref(),
            ),
        },
        Commands::ListSets => {
            commands::list_sets(access.catalog());
            Ok(())
        }
    }
}

/// Build the catalog: the built-in sets plus an optional RON overlay
fn load_catalog(path: Option<&Path>) -> Result<RegisterCatalog, Box<dyn std::error::Error>> {
    let mut catalog = lpc32x0_tables::builtin_catalog();

    if let Some(path) = path {
        if !path.is_file() {
            return Err(format!("Catalog file not found: {}", path.display()).into());
        }
        let count = catalog.load_file(path)?;
        log::info!("Loaded {} registers from {}", count, path.display());
    }

    Ok(catalog)
}
