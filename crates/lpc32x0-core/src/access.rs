//! Permission-checked register access and register reports
//!
//! `RegisterAccess` joins the catalog with a register window. Every access
//! is resolved against the catalog first; a register without the needed
//! permission is reported and the window is never touched.

use crate::catalog::RegisterCatalog;
use crate::error::{AccessError, Result};
use crate::register::RegisterDescriptor;
use crate::window::RegisterWindow;

/// Width the terse report pads register names to
const TERSE_NAME_WIDTH: usize = 25;

/// Catalog-driven register reader/writer
pub struct RegisterAccess<W: RegisterWindow> {
    catalog: RegisterCatalog,
    window: W,
}

impl<W: RegisterWindow> RegisterAccess<W> {
    /// Create a register accessor over `window`
    pub fn new(catalog: RegisterCatalog, window: W) -> Self {
        Self { catalog, window }
    }

    /// The register catalog
    pub fn catalog(&self) -> &RegisterCatalog {
        &self.catalog
    }

    /// The underlying window
    pub fn window(&self) -> &W {
        &self.window
    }

    fn lookup(&self, addr: u32) -> Result<&RegisterDescriptor> {
        self.catalog
            .descriptor(addr)
            .ok_or(AccessError::UnknownRegister(addr))
    }

    /// Read a register
    pub fn read_register(&mut self, addr: u32) -> Result<u32> {
        let reg = self.lookup(addr)?;
        if !reg.access.readable() {
            return Err(AccessError::NotReadable {
                addr,
                name: reg.name.clone(),
            });
        }

        let value = self.window.read_word(addr)?;
        log::trace!("read {:#010x} -> {:#010x}", addr, value);
        Ok(value)
    }

    /// Write a register
    pub fn write_register(&mut self, addr: u32, value: u32) -> Result<()> {
        let reg = self.lookup(addr)?;
        if !reg.access.writable() {
            return Err(AccessError::NotWritable {
                addr,
                name: reg.name.clone(),
            });
        }

        log::trace!("write {:#010x} <- {:#010x}", addr, value);
        self.window.write_word(addr, value)?;
        Ok(())
    }

    /// Render a report of `value` as the contents of the register at `addr`.
    ///
    /// Terse mode is one line: name, address, padding, value. Verbose mode
    /// adds description, permission, reset value and, when the register has
    /// a decoder, the field breakdown.
    pub fn describe(&self, addr: u32, value: u32, verbose: bool) -> Result<String> {
        let reg = self.lookup(addr)?;
        Ok(format_report(reg, value, verbose))
    }

    /// Read and describe every register of the named set.
    ///
    /// Registers that can't be read are skipped with a diagnostic line; only
    /// an unknown set name fails the call.
    pub fn read_and_describe_set_by_name(
        &mut self,
        set_name: &str,
        verbose: bool,
    ) -> Result<Vec<String>> {
        let addrs: Vec<u32> = self
            .catalog
            .find_set_by_name(set_name)
            .ok_or_else(|| AccessError::UnknownSet(set_name.to_string()))?
            .registers
            .iter()
            .map(|reg| reg.addr)
            .collect();

        let mut lines = Vec::with_capacity(addrs.len() + 1);
        lines.push(format!("{}:", set_name));

        for addr in addrs {
            match self
                .read_register(addr)
                .and_then(|value| self.describe(addr, value, verbose))
            {
                Ok(report) => lines.push(report),
                Err(e) => {
                    log::warn!("{}: {}", set_name, e);
                    lines.push(skip_line(addr, &e));
                }
            }
        }

        Ok(lines)
    }

    /// Read and describe every set in catalog order
    pub fn read_and_describe_all_sets(&mut self, verbose: bool) -> Result<Vec<String>> {
        if self.catalog.is_empty() {
            return Err(AccessError::EmptyCatalog);
        }

        let names: Vec<String> = self.catalog.sets().map(|set| set.name.clone()).collect();
        let mut lines = Vec::new();
        for name in names {
            lines.extend(self.read_and_describe_set_by_name(&name, verbose)?);
        }
        Ok(lines)
    }

    /// Release the window's OS resources. Idempotent.
    pub fn close(&mut self) {
        self.window.close();
    }
}

fn format_report(reg: &RegisterDescriptor, value: u32, verbose: bool) -> String {
    if !verbose {
        let pad = TERSE_NAME_WIDTH.saturating_sub(reg.name.len()).max(1);
        return format!(
            "  {} ({:08x}) {:pad$} 0x{:08x}",
            reg.name,
            reg.addr,
            "",
            value,
            pad = pad
        );
    }

    let mut out = format!("0x{:08x} {:<15} {}\n", reg.addr, reg.name, reg.desc);
    out.push_str(&format!("\ttype:  {}\n", reg.access));
    out.push_str(&format!("\treset: 0x{:08x}\n", reg.reset));
    out.push_str(&format!("\tvalue: 0x{:08x}\n", value));
    if let Some(fields) = reg.decode(value) {
        out.push_str(&fields);
    }
    out
}

fn skip_line(addr: u32, err: &AccessError) -> String {
    match err {
        AccessError::NotReadable { name, .. } => {
            format!("  {} ({:08x}) - skip non-readable", name, addr)
        }
        other => format!("  ({:08x}) - skipped: {}", addr, other),
    }
}
