//! Interrupt controllers (MIC, SIC1, SIC2)
//!
//! Besides the register set, this module keeps per-block snapshots of the
//! six controller registers. Once all six of a block have been seen, the
//! block is rendered as one table with a row per interrupt source.

use std::fmt::Write;

use lpc32x0_core::{Access, RegisterDescriptor, RegisterSet};

/// Registers per interrupt block, in address order
const BLOCK_REGS: usize = 6;

/// Register suffixes and what they hold, in address order
const REG_KINDS: [(&str, &str, Access); BLOCK_REGS] = [
    ("ER", "enable register", Access::RW),
    ("RSR", "raw status register", Access::READ),
    ("SR", "status register", Access::READ),
    ("APR", "activation polarity register (0:active-low 1:active-high)", Access::RW),
    ("ATR", "activation type register (0:level 1:edge)", Access::RW),
    ("ITR", "interrupt type register (0:IRQ 1:FIQ)", Access::RW),
];

const RESERVED: &str = "(reserved)";

#[rustfmt::skip]
const MIC_NAMES: [&str; 32] = [
    "sub1IRQn", "sub2IRQn", RESERVED, "Timer4/MCPWM", "Timer5", "HSTIMER_INT",
    "WATCH_INT", "UART3", "UART4", "UART5", "UART6", "FLASH_INT", RESERVED,
    "SD1_INT", "LCD_INT", "SD0_INT", "Timer0", "Timer1", "Timer2", "Timer3",
    "SSP0", "SSP1", "I2S0", "I2S1", "UART7", "UART2", "UART1", "MSTIMER_INT",
    "DMA_INT", "ethernet", "sub1FIQn", "sub2FIQn",
];

#[rustfmt::skip]
const SIC1_NAMES: [&str; 32] = [
    RESERVED, "JTAG_COMM_TX", "JTAG_COMM_RX", RESERVED, "GPI_28", RESERVED,
    "TS_P", "TS_IRQ(ADC_INT)", "TS_AUX", RESERVED, RESERVED, RESERVED,
    "SPI2_INT", "PLLUSB_INT", "PLLHCLK_INT", RESERVED, RESERVED, "PLL397_INT",
    "I2C2_INT", "I2C1_INT", "RTC_INT", RESERVED, "KEY_IRQ", "SPI1_INT",
    "SW_INT", "USB_otg_timer_int", "USB_otg_atx_int_n", "USB_host_int",
    "USB_dev_dma_int", "USB_dev_lp_int", "USB_dev_hp_int", "USB_i2c_int",
];

#[rustfmt::skip]
const SIC2_NAMES: [&str; 32] = [
    "GPIO_0", "GPIO_1", "GPIO_2", "GPIO_3", "GPIO_4", "GPIO_5", "SPI2_DATIN",
    "UART2_HCTS", "Pn_GPIO", "GPI_8", "GPI_9", "GPI_19", "UART7_HCTS",
    RESERVED, RESERVED, "GPI_7", RESERVED, RESERVED, "SDIO_INT_N", "UART5_RX",
    "SPI1_DATIN", RESERVED, "GPI_0", "GPI_1", "GPI_2", "GPI_3", "GPI_4",
    "GPI_5", "GPI_6", RESERVED, RESERVED, "SYSCLK mux",
];

/// One of the three interrupt controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptBlock {
    /// Main interrupt controller
    Mic,
    /// Sub interrupt controller 1
    Sic1,
    /// Sub interrupt controller 2
    Sic2,
}

impl InterruptBlock {
    /// All blocks in address order
    pub const ALL: [InterruptBlock; 3] = [Self::Mic, Self::Sic1, Self::Sic2];

    /// Physical base address
    pub fn base(self) -> u32 {
        match self {
            Self::Mic => 0x4000_8000,
            Self::Sic1 => 0x4000_C000,
            Self::Sic2 => 0x4001_0000,
        }
    }

    /// Short name used in register names and report headers
    pub fn name(self) -> &'static str {
        match self {
            Self::Mic => "MIC",
            Self::Sic1 => "SIC1",
            Self::Sic2 => "SIC2",
        }
    }

    /// Interrupt source names, indexed by bit
    pub fn source_names(self) -> &'static [&'static str; 32] {
        match self {
            Self::Mic => &MIC_NAMES,
            Self::Sic1 => &SIC1_NAMES,
            Self::Sic2 => &SIC2_NAMES,
        }
    }

    /// Block and register index for an address, if it is one of the six
    /// snapshot registers
    pub fn locate(addr: u32) -> Option<(Self, usize)> {
        Self::ALL.into_iter().find_map(|block| {
            let offset = addr.checked_sub(block.base())?;
            let index = (offset / 4) as usize;
            (offset % 4 == 0 && index < BLOCK_REGS).then_some((block, index))
        })
    }

    fn address(self, index: usize) -> u32 {
        self.base() + 4 * index as u32
    }
}

/// The six registers of one interrupt block as seen since the last flush
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IntBlockSnapshot {
    values: [Option<u32>; BLOCK_REGS],
}

impl IntBlockSnapshot {
    /// Record the value of register `index` (0 = ER .. 5 = ITR)
    pub fn record(&mut self, index: usize, value: u32) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = Some(value);
        }
    }

    /// True once every register has been recorded
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.values = [None; BLOCK_REGS];
    }

    /// Render the block table, or `None` while registers are missing
    pub fn render(&self, block: InterruptBlock) -> Option<String> {
        let mut values = [0u32; BLOCK_REGS];
        for (dst, src) in values.iter_mut().zip(self.values.iter()) {
            *dst = (*src)?;
        }

        let mut out = String::new();
        let _ = writeln!(out, "{} block", block.name());
        for (i, (_, meaning, _)) in REG_KINDS.iter().enumerate() {
            let rails = "|        ".repeat(i);
            let dashes = "-".repeat(47 - 9 * i);
            let _ = writeln!(
                out,
                "    0x{:08x}: 0x{:08x}       {}+{} {}",
                block.address(i),
                values[i],
                rails,
                dashes,
                meaning
            );
        }

        for bit in (0..32).rev() {
            let name = block.source_names()[bit];
            if name == RESERVED {
                let _ = writeln!(out, "        {:>17}", name);
                continue;
            }
            let _ = write!(out, "        {:>17}", name);
            for value in values {
                let _ = write!(out, "........{}", (value >> bit) & 1);
            }
            out.push('\n');
        }
        out.push('\n');
        Some(out)
    }
}

/// Snapshots of all three interrupt blocks
#[derive(Debug, Default, Clone)]
pub struct InterruptSnapshots {
    blocks: [IntBlockSnapshot; 3],
}

impl InterruptSnapshots {
    /// Create empty snapshots
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a register value.
    ///
    /// Returns the rendered table when this value completes its block; the
    /// block is then reset. Addresses outside the interrupt blocks are
    /// ignored.
    pub fn observe(&mut self, addr: u32, value: u32) -> Option<String> {
        let (block, index) = InterruptBlock::locate(addr)?;
        let slot = InterruptBlock::ALL.iter().position(|b| *b == block)?;
        let snapshot = &mut self.blocks[slot];
        snapshot.record(index, value);

        if !snapshot.is_complete() {
            return None;
        }
        let table = snapshot.render(block);
        snapshot.clear();
        log::debug!("{} block snapshot complete", block.name());
        table
    }
}

/// Interrupt controller register set
pub fn registers() -> RegisterSet {
    let mut regs = Vec::with_capacity(3 * BLOCK_REGS);
    for block in InterruptBlock::ALL {
        for (i, (suffix, meaning, access)) in REG_KINDS.iter().enumerate() {
            regs.push(RegisterDescriptor::new(
                block.address(i),
                0,
                format!("{}_{}", block.name(), suffix),
                format!("{} {}", block.name(), meaning),
                *access,
            ));
        }
    }
    RegisterSet::new("interrupt", regs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate() {
        assert_eq!(InterruptBlock::locate(0x4000_8000), Some((InterruptBlock::Mic, 0)));
        assert_eq!(InterruptBlock::locate(0x4000_C014), Some((InterruptBlock::Sic1, 5)));
        assert_eq!(InterruptBlock::locate(0x4001_0008), Some((InterruptBlock::Sic2, 2)));
        assert_eq!(InterruptBlock::locate(0x4000_8018), None);
        assert_eq!(InterruptBlock::locate(0x4000_8002), None);
        assert_eq!(InterruptBlock::locate(0x4000_4044), None);
    }

    #[test]
    fn test_table_emitted_after_sixth_register() {
        let mut snaps = InterruptSnapshots::new();
        for i in 0..5 {
            assert!(snaps.observe(0x4000_8000 + 4 * i, 0).is_none());
        }
        // Other blocks don't interfere
        assert!(snaps.observe(0x4000_C000, 0xFFFF_FFFF).is_none());

        let table = snaps.observe(0x4000_8014, 0x8000_0000).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "MIC block");
        assert!(lines[1].starts_with("    0x40008000: 0x00000000       +---"));
        assert!(lines[1].ends_with(" enable register"));
        assert!(lines[6].starts_with("    0x40008014: 0x80000000"));
        // bit 31 row: only ITR set
        assert_eq!(
            lines[7],
            "                 sub2FIQn........0........0........0........0........0........1"
        );
        // 1 title + 6 legend + 32 rows + trailing blank line
        assert_eq!(lines.len(), 40);
    }

    #[test]
    fn test_block_resets_after_flush() {
        let mut snaps = InterruptSnapshots::new();
        for i in 0..6 {
            snaps.observe(0x4001_0000 + 4 * i, 1);
        }
        assert!(snaps.observe(0x4001_0000, 1).is_none());
    }

    #[test]
    fn test_reserved_rows_have_no_values() {
        let mut snap = IntBlockSnapshot::default();
        for i in 0..6 {
            snap.record(i, 0xFFFF_FFFF);
        }
        let table = snap.render(InterruptBlock::Mic).unwrap();
        assert!(table.lines().any(|l| l == "               (reserved)"));
    }

    #[test]
    fn test_incomplete_render_is_none() {
        let mut snap = IntBlockSnapshot::default();
        snap.record(0, 1);
        assert!(snap.render(InterruptBlock::Sic1).is_none());
    }

    #[test]
    fn test_register_set() {
        let set = registers();
        assert_eq!(set.len(), 18);
        assert_eq!(set.registers[0].name, "MIC_ER");
        assert_eq!(set.registers[17].addr, 0x4001_0014);
        assert_eq!(set.registers[17].name, "SIC2_ITR");
    }
}
