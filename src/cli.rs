//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal u32
fn parse_hex_u32(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<u32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

#[derive(Parser)]
#[command(name = "lpc32x0")]
#[command(author, version, about = "NXP LPC32x0 register dump/decode and SPI-NOR tool", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Extra register sets (RON) to add to the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Physical memory device
    #[arg(long, global = true, default_value = "/dev/mem")]
    pub mem: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read and print registers (all sets when nothing is selected)
    Dump {
        /// Print descriptions and field breakdowns
        #[arg(short, long)]
        long: bool,

        /// Register addresses (comma-separated, hex or decimal)
        #[arg(short, long = "reg", value_delimiter = ',', value_parser = parse_hex_u32)]
        reg: Vec<u32>,

        /// Register set names (comma-separated)
        #[arg(short, long = "set", value_delimiter = ',')]
        set: Vec<String>,
    },

    /// Decode register values from a dump ("<addr>: <v1> [<v2> [<v3> [<v4>]]]" per line)
    Offline {
        /// Print descriptions and field breakdowns
        #[arg(short, long)]
        long: bool,

        /// Read lines from this file instead of stdin
        input: Option<PathBuf>,
    },

    /// Write a register and show it before and after
    Write {
        /// Register address (hex or decimal)
        #[arg(value_parser = parse_hex_u32)]
        addr: u32,

        /// Value to write (hex or decimal)
        #[arg(value_parser = parse_hex_u32)]
        value: u32,
    },

    /// SPI-NOR flash operations
    #[command(subcommand)]
    Spi(SpiCommands),

    /// List the register sets in the catalog
    ListSets,
}

/// SPI-NOR subcommands
#[derive(Subcommand)]
pub enum SpiCommands {
    /// Read the JEDEC ID
    Id {
        /// Driver options (e.g. "spi=1,aux=yes,detect=0x8,polls=100000")
        #[arg(short = 'p', long, default_value = "")]
        options: String,
    },

    /// Read flash contents
    Read {
        /// Driver options (e.g. "spi=1,aux=yes,detect=0x8,polls=100000")
        #[arg(short = 'p', long, default_value = "")]
        options: String,

        /// Start address (hex or decimal, 24-bit)
        #[arg(long, default_value = "0", value_parser = parse_hex_u32)]
        addr: u32,

        /// Number of bytes to read (hex or decimal)
        #[arg(long, value_parser = parse_hex_u32)]
        len: u32,

        /// Output file (hex dump to stdout if not given)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
