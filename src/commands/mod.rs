//! CLI command implementations
//!
//! Every command works on a [`RegisterAccess`](lpc32x0_core::RegisterAccess)
//! built by `main`, which closes the window once the command returns.

pub mod dump;
pub mod offline;
pub mod spi;
pub mod write;

use lpc32x0_core::RegisterCatalog;

/// Print a report, adding a newline only if it doesn't end with one
pub(crate) fn emit(report: &str) {
    if report.ends_with('\n') {
        print!("{}", report);
    } else {
        println!("{}", report);
    }
}

/// Print the set names of the catalog with their sizes
pub fn list_sets(catalog: &RegisterCatalog) {
    println!("Register sets:");
    for set in catalog.sets() {
        println!("  {:<12} {:>3} registers", set.name, set.len());
    }
}
