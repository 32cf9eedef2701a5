//! Write command implementation

use lpc32x0_core::{RegisterAccess, RegisterWindow};

use super::emit;

/// Run the write command
///
/// Nothing is written when the register already holds `value`; otherwise
/// the register is written, read back, and both states are printed.
pub fn run_write<W: RegisterWindow>(
    access: &mut RegisterAccess<W>,
    addr: u32,
    value: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let before = access.read_register(addr)?;
    if before == value {
        println!("0x{:08x} already set to 0x{:08x}", addr, value);
        return Ok(());
    }

    access.write_register(addr, value)?;
    let after = access.read_register(addr)?;
    log::debug!("{:#010x}: {:#010x} -> {:#010x}", addr, before, after);

    emit(&access.describe(addr, before, true)?);
    emit(&access.describe(addr, after, true)?);

    if after != value {
        log::warn!(
            "0x{:08x} reads back 0x{:08x} after writing 0x{:08x}",
            addr,
            after,
            value
        );
    }
    Ok(())
}
