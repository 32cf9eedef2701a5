//! Register catalog: every known register set, in declaration order
//!
//! The catalog is built once at startup (normally from the built-in tables)
//! and optionally extended with register sets from RON files:
//!
//! ```ron
//! (
//!     sets: [
//!         (
//!             name: "uart",
//!             registers: [
//!                 (addr: 0x40014000, reset: 0, name: "U3RBR", desc: "UART3 receive buffer", access: R),
//!             ],
//!         ),
//!     ],
//! )
//! ```
//!
//! Lookup by address is a linear scan in declaration order; the first match
//! wins. The same address may legitimately appear in more than one set (a
//! clock-control register listed again next to its peripheral, say) and no
//! duplicate check is done.

use std::fs;
use std::io;
use std::path::Path;

use crate::register::{Access, RegisterDescriptor, RegisterSet};

/// Error type for catalog overlay loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error reading files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// RON parsing error
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

// ============================================================================
// RON deserialization types (intermediate format)
// ============================================================================

#[derive(Debug, Clone, Copy, serde::Deserialize)]
enum AccessDef {
    R,
    W,
    RW,
}

impl From<AccessDef> for Access {
    fn from(def: AccessDef) -> Self {
        match def {
            AccessDef::R => Access::READ,
            AccessDef::W => Access::WRITE,
            AccessDef::RW => Access::RW,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct RegisterDef {
    addr: u32,
    #[serde(default)]
    reset: u32,
    name: String,
    #[serde(default)]
    desc: String,
    access: AccessDef,
}

#[derive(Debug, serde::Deserialize)]
struct SetDef {
    name: String,
    registers: Vec<RegisterDef>,
}

#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    sets: Vec<SetDef>,
}

/// All register sets known to the tool
#[derive(Debug, Clone, Default)]
pub struct RegisterCatalog {
    sets: Vec<RegisterSet>,
}

impl RegisterCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from register sets, keeping their order
    pub fn from_sets(sets: Vec<RegisterSet>) -> Self {
        Self { sets }
    }

    /// Append a register set, or extend the set of the same name
    pub fn add_set(&mut self, set: RegisterSet) {
        match self.sets.iter_mut().find(|s| s.name == set.name) {
            Some(existing) => existing.registers.extend(set.registers),
            None => self.sets.push(set),
        }
    }

    /// Number of register sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether the catalog has no sets
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate over register sets in declaration order
    pub fn sets(&self) -> impl Iterator<Item = &RegisterSet> {
        self.sets.iter()
    }

    /// Find the first register with this address.
    ///
    /// Returns the owning set's name and the register's index in that set.
    pub fn find_by_address(&self, addr: u32) -> Option<(&str, usize)> {
        self.sets.iter().find_map(|set| {
            set.registers
                .iter()
                .position(|reg| reg.addr == addr)
                .map(|idx| (set.name.as_str(), idx))
        })
    }

    /// Find a register set by exact name
    pub fn find_set_by_name(&self, name: &str) -> Option<&RegisterSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    /// The authoritative descriptor for an address (first match in catalog order)
    pub fn descriptor(&self, addr: u32) -> Option<&RegisterDescriptor> {
        self.sets
            .iter()
            .flat_map(|set| set.registers.iter())
            .find(|reg| reg.addr == addr)
    }

    /// Load register sets from a RON string, returning how many registers were added
    pub fn load_ron(&mut self, content: &str) -> Result<usize, CatalogError> {
        let file: CatalogFile = ron::from_str(content)?;
        let mut count = 0;

        for set_def in file.sets {
            if set_def.name.is_empty() {
                return Err(CatalogError::Validation(
                    "register set with empty name".to_string(),
                ));
            }

            let mut registers = Vec::with_capacity(set_def.registers.len());
            for reg in set_def.registers {
                if reg.name.is_empty() {
                    return Err(CatalogError::Validation(format!(
                        "register {:#010x} in set '{}' has no name",
                        reg.addr, set_def.name
                    )));
                }
                if reg.addr & 0x3 != 0 {
                    return Err(CatalogError::Validation(format!(
                        "register {} at {:#010x} is not word aligned",
                        reg.name, reg.addr
                    )));
                }
                registers.push(RegisterDescriptor::new(
                    reg.addr,
                    reg.reset,
                    reg.name,
                    reg.desc,
                    reg.access.into(),
                ));
            }

            count += registers.len();
            self.add_set(RegisterSet::new(set_def.name, registers));
        }

        Ok(count)
    }

    /// Load register sets from a RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let count = self.load_ron(&content)?;
        log::debug!("Loaded {} registers from {}", count, path.display());
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RegisterCatalog {
        RegisterCatalog::from_sets(vec![
            RegisterSet::new(
                "clkpwr",
                vec![
                    RegisterDescriptor::new(0x4000_4044, 0x12, "PWR_CTRL", "power", Access::RW),
                    RegisterDescriptor::new(0x4000_40C4, 0, "SPI_CTRL", "spi clocks", Access::RW),
                ],
            ),
            RegisterSet::new(
                "spi",
                vec![
                    RegisterDescriptor::new(0x4000_40C4, 0, "SPI_CTRL", "see clkpwr", Access::RW),
                    RegisterDescriptor::new(0x2008_8000, 0, "SPI1_GLOBAL", "global", Access::RW),
                ],
            ),
        ])
    }

    #[test]
    fn test_find_by_address() {
        let catalog = sample();
        assert_eq!(catalog.find_by_address(0x4000_4044), Some(("clkpwr", 0)));
        assert_eq!(catalog.find_by_address(0x2008_8000), Some(("spi", 1)));
        assert_eq!(catalog.find_by_address(0x2008_8004), None);
        assert_eq!(catalog.find_by_address(0), None);
    }

    #[test]
    fn test_every_present_address_is_found() {
        let catalog = sample();
        for set in catalog.sets() {
            for reg in &set.registers {
                assert!(catalog.find_by_address(reg.addr).is_some());
            }
        }
    }

    #[test]
    fn test_duplicate_address_resolves_to_first_set() {
        let catalog = sample();
        assert_eq!(catalog.find_by_address(0x4000_40C4), Some(("clkpwr", 1)));
        assert_eq!(catalog.descriptor(0x4000_40C4).unwrap().desc, "spi clocks");
    }

    #[test]
    fn test_find_set_by_name() {
        let catalog = sample();
        assert_eq!(catalog.find_set_by_name("spi").unwrap().len(), 2);
        assert!(catalog.find_set_by_name("SPI").is_none());
        assert!(catalog.find_set_by_name("sp").is_none());
    }

    #[test]
    fn test_load_ron() {
        let ron = r#"
        (
            sets: [
                (
                    name: "uart",
                    registers: [
                        (addr: 0x40014000, name: "U3RBR", desc: "UART3 receive buffer", access: R),
                        (addr: 0x40014004, reset: 0x1, name: "U3IER", access: RW),
                    ],
                ),
                (
                    name: "spi",
                    registers: [
                        (addr: 0x20088004, reset: 0xe08, name: "SPI1_CON", desc: "SPI1 control", access: RW),
                    ],
                ),
            ],
        )
        "#;

        let mut catalog = sample();
        let count = catalog.load_ron(ron).unwrap();
        assert_eq!(count, 3);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.find_set_by_name("spi").unwrap().len(), 3);

        let reg = catalog.descriptor(0x4001_4000).unwrap();
        assert_eq!(reg.name, "U3RBR");
        assert_eq!(reg.access, Access::READ);
        assert!(reg.decoder().is_none());
        assert_eq!(catalog.descriptor(0x4001_4004).unwrap().reset, 1);
    }

    #[test]
    fn test_load_ron_rejects_unaligned() {
        let ron = r#"(sets: [(name: "x", registers: [(addr: 0x40014002, name: "BAD", access: R)])])"#;
        let mut catalog = RegisterCatalog::new();
        assert!(matches!(
            catalog.load_ron(ron),
            Err(CatalogError::Validation(_))
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_ron_parse_error() {
        let mut catalog = RegisterCatalog::new();
        assert!(matches!(
            catalog.load_ron("(sets: [(name: \"x\"])"),
            Err(CatalogError::Parse(_))
        ));
    }
}
