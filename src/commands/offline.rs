//! Offline decode of register dumps
//!
//! Input lines look like `40004044: 00000012 00000100 00000b48 00000000`:
//! a start address and up to four values for consecutive words.

use std::io::BufRead;

use lpc32x0_core::{AccessError, RegisterAccess, RegisterWindow};
use lpc32x0_tables::InterruptSnapshots;

use super::emit;

/// Values per line beyond which the rest is ignored
const MAX_VALUES: usize = 4;

/// Start addresses from here on would wrap within one line
const LAST_START: u32 = 0xFFFF_FFF4;

fn parse_hex(s: &str) -> Option<u32> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u32::from_str_radix(digits, 16).ok()
}

/// Parse one dump line into its start address and values.
///
/// Parsing stops at the first token that isn't hex. Lines without an
/// address, without any value or starting at or above 0xFFFFFFF4 yield
/// `None`.
pub fn parse_dump_line(line: &str) -> Option<(u32, Vec<u32>)> {
    let (addr, rest) = line.split_once(':')?;
    let addr = parse_hex(addr.trim())?;
    if addr >= LAST_START {
        return None;
    }

    let values: Vec<u32> = rest
        .split_whitespace()
        .map_while(parse_hex)
        .take(MAX_VALUES)
        .collect();

    if values.is_empty() {
        None
    } else {
        Some((addr, values))
    }
}

/// Decode one line, returning the reports to print
pub fn decode_line<W: RegisterWindow>(
    access: &RegisterAccess<W>,
    snapshots: &mut InterruptSnapshots,
    line: &str,
    long: bool,
) -> Vec<String> {
    let Some((start, values)) = parse_dump_line(line) else {
        return Vec::new();
    };

    let mut reports = Vec::new();
    for (i, value) in values.into_iter().enumerate() {
        let addr = start + 4 * i as u32;
        match access.describe(addr, value, long) {
            Ok(report) => reports.push(report),
            Err(AccessError::UnknownRegister(_)) => {
                log::trace!("no register at {:#010x}", addr);
            }
            Err(e) => log::warn!("{}", e),
        }
        if let Some(table) = snapshots.observe(addr, value) {
            reports.push(table);
        }
    }
    reports
}

/// Run the offline command over every line of `input`
pub fn run_offline<W: RegisterWindow, R: BufRead>(
    access: &RegisterAccess<W>,
    input: R,
    long: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut snapshots = InterruptSnapshots::new();
    for line in input.lines() {
        for report in decode_line(access, &mut snapshots, &line?, long) {
            emit(&report);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_access() -> RegisterAccess<lpc32x0_physmap::DevMemWindow> {
        RegisterAccess::new(
            lpc32x0_tables::builtin_catalog(),
            lpc32x0_physmap::dev_mem_window(),
        )
    }

    #[test]
    fn test_parse_dump_line() {
        assert_eq!(
            parse_dump_line("40004044: 00000012 00000100"),
            Some((0x4000_4044, vec![0x12, 0x100]))
        );
        assert_eq!(
            parse_dump_line("0x40004044: 0x12"),
            Some((0x4000_4044, vec![0x12]))
        );
    }

    #[test]
    fn test_parse_dump_line_limits() {
        let (_, values) = parse_dump_line("40004044: 1 2 3 4 5 6").unwrap();
        assert_eq!(values, vec![1, 2, 3, 4]);

        let (_, values) = parse_dump_line("40004044: 1 2 zz 4").unwrap();
        assert_eq!(values, vec![1, 2]);

        assert_eq!(parse_dump_line("fffffff4: 1"), None);
        assert!(parse_dump_line("fffffff0: 1 2 3 4").is_some());
        assert_eq!(parse_dump_line("40004044:"), None);
        assert_eq!(parse_dump_line("no address here"), None);
    }

    #[test]
    fn test_decode_line_skips_unknown_addresses() {
        let access = offline_access();
        let mut snaps = InterruptSnapshots::new();
        // 0x40004040 HCLKDIV_CTRL, 0x40004044 PWR_CTRL, 0x40004048 PLL397_CTRL,
        // 0x4000404c OSC_CTRL
        let reports = decode_line(&access, &mut snaps, "40004040: 0 12 0 100", false);
        assert_eq!(reports.len(), 4);
        assert!(reports[1].starts_with("  PWR_CTRL (40004044)"));
        assert!(reports[1].ends_with("0x00000012"));

        // 0x40003ff4..0x40003ffc are unknown, 0x40004000 is unknown too
        let reports = decode_line(&access, &mut snaps, "40003ff4: 1 2 3 4", false);
        assert!(reports.is_empty());
    }

    #[test]
    fn test_decode_line_emits_interrupt_table() {
        let access = offline_access();
        let mut snaps = InterruptSnapshots::new();
        let first = decode_line(&access, &mut snaps, "4000c000: 1 2 3 4", false);
        assert_eq!(first.len(), 4);

        let second = decode_line(&access, &mut snaps, "4000c010: 5 6", false);
        assert_eq!(second.len(), 3);
        assert!(second[2].starts_with("SIC1 block\n"));
    }

    #[test]
    fn test_run_offline_reads_all_lines() {
        let access = offline_access();
        let input = "40004044: 12\n\ngarbage\n2008800c: 3\n";
        run_offline(&access, input.as_bytes(), true).unwrap();
    }
}
