//! lpc32x0-tables - Built-in LPC32x0 register catalog
//!
//! Register descriptions and field decoders for the blocks the lpc32x0
//! tools know about. [`builtin_catalog`] assembles them in a fixed order;
//! when an address is listed in more than one set (e.g. `SPI_CTRL` in both
//! `clkpwr` and `spi`) lookups resolve to the earlier set.

#![warn(rust_2018_idioms)]

pub mod clkpwr;
pub mod gpio;
pub mod interrupt;
pub mod pinmux;
pub mod spi;
pub mod ssp;

pub use interrupt::{IntBlockSnapshot, InterruptBlock, InterruptSnapshots};

use lpc32x0_core::RegisterCatalog;

/// Build the catalog of every built-in register set
pub fn builtin_catalog() -> RegisterCatalog {
    RegisterCatalog::from_sets(vec![
        clkpwr::registers(),
        interrupt::registers(),
        spi::registers(),
        ssp::registers(),
        gpio::registers(),
        pinmux::registers(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_order() {
        let catalog = builtin_catalog();
        let names: Vec<&str> = catalog.sets().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["clkpwr", "interrupt", "spi", "ssp", "gpio", "pinmux"]);
    }

    #[test]
    fn test_duplicate_addresses_resolve_to_clkpwr() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.find_by_address(0x4000_40C4), Some(("clkpwr", 26)));
        assert_eq!(catalog.find_by_address(0x4000_4078).map(|(s, _)| s), Some("clkpwr"));
        // The clkpwr entry carries the decoder
        assert!(catalog.descriptor(0x4000_40C4).unwrap().decoder().is_some());
    }

    #[test]
    fn test_pwr_ctrl_lookup() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.find_by_address(0x4000_4044), Some(("clkpwr", 0)));
        let reg = catalog.descriptor(0x4000_4044).unwrap();
        assert_eq!(reg.name, "PWR_CTRL");
        assert_eq!(reg.reset, 0x12);
    }

    #[test]
    fn test_spi_block_lookup() {
        let catalog = builtin_catalog();
        let (set, _) = catalog.find_by_address(0x2008_8010).unwrap();
        assert_eq!(set, "spi");
        assert!(catalog.descriptor(0x2008_8010).unwrap().decode(1).is_some());
    }

    #[test]
    fn test_unknown_address() {
        assert_eq!(builtin_catalog().find_by_address(0x1234_5678), None);
    }
}
