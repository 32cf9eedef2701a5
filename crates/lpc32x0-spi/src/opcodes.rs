//! JEDEC SPI flash opcodes used by the driver

/// Read JEDEC ID (manufacturer + device ID)
pub const RDID: u8 = 0x9F;
/// Fast Read (with dummy byte, up to max frequency)
pub const FAST_READ: u8 = 0x0B;

/// Bytes returned by RDID
pub const JEDEC_ID_LEN: usize = 3;

/// Mask for 3-byte addressing
pub const ADDR_MASK_3B: u32 = 0x00FF_FFFF;

/// Build the 5-byte FAST_READ command: opcode, 24-bit big-endian address,
/// one dummy byte
pub fn fast_read_command(addr: u32) -> [u8; 5] {
    let addr = addr & ADDR_MASK_3B;
    [
        FAST_READ,
        (addr >> 16) as u8,
        (addr >> 8) as u8,
        addr as u8,
        0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_read_command() {
        assert_eq!(fast_read_command(0x0012_3456), [0x0B, 0x12, 0x34, 0x56, 0x00]);
    }

    #[test]
    fn test_fast_read_command_drops_high_bits() {
        assert_eq!(fast_read_command(0xAB12_3456), fast_read_command(0x0012_3456));
    }
}
