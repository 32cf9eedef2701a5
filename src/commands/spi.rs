//! SPI-NOR commands

use indicatif::{ProgressBar, ProgressStyle};
use lpc32x0_core::{RegisterAccess, RegisterWindow};
use lpc32x0_spi::{parse_options, SpiNorDriver};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Chunk size for reading (4 KiB)
const READ_CHUNK_SIZE: usize = 4096;

/// Bytes per hex dump line
const DUMP_WIDTH: usize = 16;

/// Split "key=value,key=value" into pairs
fn split_options(s: &str) -> Vec<(&str, &str)> {
    s.split(',')
        .filter_map(|opt| opt.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect()
}

fn init_driver<'a, W: RegisterWindow>(
    access: &'a mut RegisterAccess<W>,
    options: &str,
) -> Result<SpiNorDriver<'a, W>, Box<dyn std::error::Error>> {
    let config = parse_options(&split_options(options))?;
    log::debug!("SPI-NOR config: {:?}", config);
    let mut drv = SpiNorDriver::new(access, config);
    drv.init()?;
    Ok(drv)
}

/// Print the flash JEDEC ID
pub fn run_id<W: RegisterWindow>(
    access: &mut RegisterAccess<W>,
    options: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut drv = init_driver(access, options)?;
    let id = drv.read_id()?;
    let cs = drv
        .chip_select()
        .map(|cs| cs.to_string())
        .unwrap_or_default();
    println!("JEDEC ID: {:02x} {:02x} {:02x} ({})", id[0], id[1], id[2], cs);
    Ok(())
}

/// Read `len` bytes at `addr` into a file or as a hex dump
pub fn run_read<W: RegisterWindow>(
    access: &mut RegisterAccess<W>,
    options: &str,
    addr: u32,
    len: usize,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut drv = init_driver(access, options)?;
    let mut data = vec![0u8; len];

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-"),
    );

    let mut offset = 0usize;
    while offset < len {
        let chunk_size = std::cmp::min(READ_CHUNK_SIZE, len - offset);
        drv.read_into(
            chunk_address(addr, offset),
            &mut data[offset..offset + chunk_size],
        )?;
        offset += chunk_size;
        pb.set_position(offset as u64);
    }

    match output {
        Some(path) => {
            pb.finish_with_message("Read complete");
            let mut file = File::create(path)?;
            file.write_all(&data)?;
            println!("Wrote {} bytes to {:?}", data.len(), path);
        }
        None => {
            pb.finish_and_clear();
            print!("{}", hex_dump(addr, &data));
        }
    }
    Ok(())
}

/// Flash address of the chunk `offset` bytes past `start`
fn chunk_address(start: u32, offset: usize) -> u32 {
    start.wrapping_add(offset as u32)
}

/// Format `data` as lines of 16 hex bytes prefixed with their address
pub fn hex_dump(start: u32, data: &[u8]) -> String {
    let mut out = String::new();
    for (i, line) in data.chunks(DUMP_WIDTH).enumerate() {
        let bytes: Vec<String> = line.iter().map(|b| format!("{:02x}", b)).collect();
        out.push_str(&format!(
            "{:06x}: {}\n",
            start.wrapping_add((i * DUMP_WIDTH) as u32),
            bytes.join(" ")
        ));
    }
    out
}
