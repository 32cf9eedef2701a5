//! Man page generator for lpc32x0
//!
//! Writes `lpc32x0.1` plus one `lpc32x0-<command>.1` page per subcommand.
//!
//! Usage: cargo run --bin gen-manpage -- [output-dir]

use clap::{Command, CommandFactory};
use std::fs;
use std::path::{Path, PathBuf};

#[path = "../cli.rs"]
mod cli;

const PROGRAM: &str = "lpc32x0";

/// Render `cmd` as `<dir>/<name>.1`
fn render_page(cmd: Command, dir: &Path, name: &str) -> std::io::Result<PathBuf> {
    let man = clap_mangen::Man::new(cmd.display_name(name.to_string()))
        .source(format!("{} {}", PROGRAM, env!("CARGO_PKG_VERSION")));
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer)?;
    Ok(path)
}

/// Render the main page and every subcommand page into `dir`
fn render_all(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let cmd = cli::Cli::command();
    let mut pages = vec![render_page(cmd.clone(), dir, PROGRAM)?];
    for sub in cmd.get_subcommands() {
        let name = format!("{}-{}", PROGRAM, sub.get_name());
        pages.push(render_page(sub.clone(), dir, &name)?);
    }
    Ok(pages)
}

fn main() -> std::io::Result<()> {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));

    let pages = render_all(&output_dir)?;
    for page in &pages {
        println!("Generated {}", page.display());
    }

    println!("\nView with:    man -l {}", pages[0].display());
    println!(
        "Install with: sudo cp {}/*.1 /usr/local/share/man/man1/ && sudo mandb",
        output_dir.display()
    );

    Ok(())
}
