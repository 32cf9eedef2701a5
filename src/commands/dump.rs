//! Dump command implementation

use lpc32x0_core::{AccessError, RegisterAccess, RegisterWindow};

use super::emit;

/// Run the dump command
///
/// With neither `regs` nor `sets`, every set in the catalog is dumped.
/// Unknown set names and unreadable registers are reported and skipped;
/// I/O failures abort.
pub fn run_dump<W: RegisterWindow>(
    access: &mut RegisterAccess<W>,
    long: bool,
    regs: &[u32],
    sets: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    if regs.is_empty() && sets.is_empty() {
        for line in access.read_and_describe_all_sets(long)? {
            emit(&line);
        }
        return Ok(());
    }

    for name in sets {
        match access.read_and_describe_set_by_name(name, long) {
            Ok(lines) => lines.iter().for_each(|line| emit(line)),
            Err(e @ AccessError::UnknownSet(_)) => eprintln!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }

    for &addr in regs {
        match access
            .read_register(addr)
            .and_then(|value| access.describe(addr, value, true))
        {
            Ok(report) => emit(&report),
            Err(e @ AccessError::Io(_)) => return Err(e.into()),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
