//! SPI-NOR transport over the SPI1/SPI2 block
//!
//! All hardware access goes through [`RegisterAccess`], so every register
//! the driver touches must be present (with the right permission) in the
//! catalog it was built with.

use std::fmt;

use lpc32x0_core::{AccessError, RegisterAccess, RegisterWindow, Result};

use crate::config::SpiNorConfig;
use crate::opcodes;
use crate::regs::*;

/// Chip-select line the driver talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipSelect {
    /// Onboard flash on GPIO_05
    Primary,
    /// Auxiliary flash on GPIO_04
    Auxiliary,
}

impl ChipSelect {
    /// Port 3 output bit of this line
    pub fn mask(self) -> u32 {
        match self {
            Self::Primary => CS_PRIMARY,
            Self::Auxiliary => CS_AUX,
        }
    }

    /// Pick the line given whether the auxiliary flash is fitted
    pub fn route(aux_present: bool, aux_requested: bool) -> Self {
        if aux_present && aux_requested {
            Self::Auxiliary
        } else {
            Self::Primary
        }
    }
}

impl fmt::Display for ChipSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary (GPIO_05)"),
            Self::Auxiliary => write!(f, "auxiliary (GPIO_04)"),
        }
    }
}

/// SPI-NOR flash driver
pub struct SpiNorDriver<'a, W: RegisterWindow> {
    regs: &'a mut RegisterAccess<W>,
    config: SpiNorConfig,
    cs: Option<ChipSelect>,
}

impl<'a, W: RegisterWindow> SpiNorDriver<'a, W> {
    /// Create a driver. Nothing is touched until [`init`](Self::init) or
    /// the first transfer.
    pub fn new(regs: &'a mut RegisterAccess<W>, config: SpiNorConfig) -> Self {
        Self {
            regs,
            config,
            cs: None,
        }
    }

    /// Driver configuration
    pub fn config(&self) -> &SpiNorConfig {
        &self.config
    }

    /// Chip-select line in use, once resolved by `init` or a transfer
    pub fn chip_select(&self) -> Option<ChipSelect> {
        self.cs
    }

    fn spi_reg(&self, offset: u32) -> u32 {
        self.config.instance.base() + offset
    }

    /// Set up the pins and controller and pick the chip-select line.
    ///
    /// Both chip-select candidates become GPIO outputs driven high before
    /// the SPI block is clocked, enabled and reset.
    pub fn init(&mut self) -> Result<()> {
        let both = CS_PRIMARY | CS_AUX;

        self.regs.write_register(P2_MUX_CLR, P2_MUX_CS_GPIO)?;
        self.regs.write_register(P2_DIR_SET, both)?;
        self.regs.write_register(P3_OUTP_SET, both)?;

        let ctrl = self.config.instance.ctrl_enable();
        let global = self.spi_reg(REG_GLOBAL);
        self.regs.write_register(SPI_CTRL, ctrl)?;
        self.regs.write_register(global, GLOBAL_ENABLE)?;
        self.reset()?;

        self.cs = Some(self.resolve_chip_select()?);
        log::debug!("{} initialized", self.config.instance);
        Ok(())
    }

    /// Pulse the block's software reset
    pub fn reset(&mut self) -> Result<()> {
        let global = self.spi_reg(REG_GLOBAL);
        self.regs.write_register(global, GLOBAL_ENABLE | GLOBAL_RST)?;
        self.regs.write_register(global, GLOBAL_ENABLE)
    }

    /// Sample the auxiliary-present input
    pub fn aux_present(&mut self) -> Result<bool> {
        let inputs = self.regs.read_register(P3_INP_STATE)?;
        Ok(inputs & self.config.detect_mask != 0)
    }

    /// Decide which chip-select line to use
    pub fn resolve_chip_select(&mut self) -> Result<ChipSelect> {
        let present = self.aux_present()?;
        if present {
            log::info!("Auxiliary flash detected");
        } else if self.config.aux_requested {
            log::warn!("Auxiliary flash requested but not present, using primary");
        }

        let cs = ChipSelect::route(present, self.config.aux_requested);
        log::info!("Using {} chip select", cs);
        Ok(cs)
    }

    /// Chip-select line, resolved on first use if `init` was skipped
    fn line(&mut self) -> Result<ChipSelect> {
        match self.cs {
            Some(cs) => Ok(cs),
            None => {
                let cs = self.resolve_chip_select()?;
                self.cs = Some(cs);
                Ok(cs)
            }
        }
    }

    fn cs_assert(&mut self) -> Result<()> {
        let mask = self.line()?.mask();
        self.regs.write_register(P3_OUTP_CLR, mask)
    }

    fn cs_deassert(&mut self) -> Result<()> {
        let mask = self.line()?.mask();
        self.regs.write_register(P3_OUTP_SET, mask)
    }

    /// Run `f` with chip select asserted.
    ///
    /// Chip select is deasserted afterwards whether `f` succeeded or not; an
    /// error from `f` takes precedence over one from the deassert.
    pub fn with_chip_select<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.cs_assert()?;
        let result = f(self);
        let released = self.cs_deassert();

        match (result, released) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(release_err)) => {
                log::warn!("Failed to deassert chip select: {}", release_err);
                Err(e)
            }
        }
    }

    /// Poll STAT until `done` holds, giving up after the configured limit
    fn poll_status(&mut self, done: impl Fn(u32) -> bool) -> Result<u32> {
        let stat = self.spi_reg(REG_STAT);
        for _ in 0..self.config.poll_limit {
            let value = self.regs.read_register(stat)?;
            if done(value) {
                return Ok(value);
            }
        }
        Err(AccessError::Timeout {
            addr: stat,
            polls: self.config.poll_limit,
        })
    }

    /// Wait for the FIFO to drain and acknowledge the frame
    fn finish_frame(&mut self) -> Result<()> {
        let stat = self.spi_reg(REG_STAT);
        self.poll_status(|s| s & STAT_BE != 0)?;
        self.regs.write_register(stat, STAT_INTCLR)
    }

    /// Shift `data` out, in frames of at most 65535 bytes
    pub fn transmit(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }

        let dat = self.spi_reg(REG_DAT);
        let frm = self.spi_reg(REG_FRM);
        let con = self.spi_reg(REG_CON);
        self.regs.write_register(con, CON_TRANSMIT)?;

        for frame in data.chunks(MAX_FRAME_LEN) {
            log::debug!("tx frame of {} bytes", frame.len());
            self.regs.write_register(frm, frame.len() as u32)?;

            for &byte in frame {
                self.poll_status(|s| s & STAT_BF == 0)?;
                self.regs.write_register(dat, byte as u32)?;
            }

            self.finish_frame()?;
        }
        Ok(())
    }

    /// Fill `buf` from the bus, in frames of at most 65535 bytes
    pub fn receive(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        let con = self.spi_reg(REG_CON);
        let dat = self.spi_reg(REG_DAT);
        let frm = self.spi_reg(REG_FRM);
        let stat = self.spi_reg(REG_STAT);
        self.regs.write_register(con, CON_RECEIVE)?;
        let mut shift_off = false;

        for frame in buf.chunks_mut(MAX_FRAME_LEN) {
            log::debug!("rx frame of {} bytes", frame.len());
            // A previous frame stopped the clock
            if shift_off {
                self.regs.write_register(con, CON_RECEIVE)?;
                shift_off = false;
            }
            self.regs.write_register(frm, frame.len() as u32)?;

            // Priming read starts the shifter
            self.regs.read_register(dat)?;

            for byte in frame.iter_mut() {
                self.poll_status(|s| s & STAT_BE == 0)?;
                if self.regs.read_register(stat)? & STAT_SHIFTACT != 0 && !shift_off {
                    self.regs.write_register(con, CON_RECEIVE | CON_SHIFT_OFF)?;
                    shift_off = true;
                }
                *byte = self.regs.read_register(dat)? as u8;
            }

            self.finish_frame()?;
        }
        Ok(())
    }

    /// Read the 3-byte JEDEC ID
    pub fn read_id(&mut self) -> Result<[u8; opcodes::JEDEC_ID_LEN]> {
        let mut id = [0u8; opcodes::JEDEC_ID_LEN];
        self.with_chip_select(|drv| {
            drv.transmit(&[opcodes::RDID])?;
            drv.receive(&mut id)
        })?;
        log::debug!("JEDEC ID {:02x} {:02x} {:02x}", id[0], id[1], id[2]);
        Ok(id)
    }

    /// Fast-read `buf.len()` bytes starting at `addr` (24-bit)
    pub fn read_into(&mut self, addr: u32, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }
        if addr & !opcodes::ADDR_MASK_3B != 0 {
            log::warn!("Address {:#x} truncated to 24 bits", addr);
        }

        let command = opcodes::fast_read_command(addr);
        self.with_chip_select(|drv| {
            drv.transmit(&command)?;
            drv.receive(buf)
        })
    }

    /// Fast-read `len` bytes starting at `addr` (24-bit)
    pub fn read_at(&mut self, addr: u32, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.read_into(addr, &mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpiInstance;
    use lpc32x0_core::IoError;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Op {
        Read(u32, u32),
        Write(u32, u32),
    }

    /// SPI block with a NOR flash on the other end
    struct SimFlash {
        base: u32,
        ops: Vec<Op>,
        other: HashMap<u32, u32>,
        con: u32,
        frame_left: u32,
        primed: bool,
        selected: u32,
        command: Vec<u8>,
        rx_pos: usize,
        jedec_id: [u8; 3],
        contents: Vec<u8>,
        /// STAT reads return this forever
        stuck_status: Option<u32>,
        /// Report shiftact while the last byte of a frame is pending
        shiftact_on_last: bool,
    }

    impl SimFlash {
        fn new(base: u32) -> Self {
            Self {
                base,
                ops: Vec::new(),
                other: HashMap::new(),
                con: 0,
                frame_left: 0,
                primed: false,
                selected: 0,
                command: Vec::new(),
                rx_pos: 0,
                jedec_id: [0xEF, 0x40, 0x18],
                contents: (0..=255u8).cycle().take(0x2_0000).collect(),
                stuck_status: None,
                shiftact_on_last: false,
            }
        }

        fn with_inputs(mut self, value: u32) -> Self {
            self.other.insert(P3_INP_STATE, value);
            self
        }

        fn receiving(&self) -> bool {
            self.con & 0x8000 == 0
        }

        fn status(&self) -> u32 {
            if let Some(stuck) = self.stuck_status {
                return stuck;
            }
            if self.receiving() && self.primed && self.frame_left > 0 {
                if self.shiftact_on_last && self.frame_left == 1 {
                    STAT_SHIFTACT
                } else {
                    0
                }
            } else {
                STAT_BE
            }
        }

        fn next_rx_byte(&mut self) -> u8 {
            let pos = self.rx_pos;
            self.rx_pos += 1;
            match self.command.first() {
                Some(&opcodes::RDID) => self.jedec_id.get(pos).copied().unwrap_or(0xFF),
                Some(&opcodes::FAST_READ) if self.command.len() >= 5 => {
                    let addr = u32::from_be_bytes([0, self.command[1], self.command[2], self.command[3]])
                        as usize;
                    self.contents[(addr + pos) % self.contents.len()]
                }
                _ => 0xFF,
            }
        }

        fn writes_to(&self, addr: u32) -> Vec<u32> {
            self.ops
                .iter()
                .filter_map(|op| match *op {
                    Op::Write(a, v) if a == addr => Some(v),
                    _ => None,
                })
                .collect()
        }

        fn writes(&self) -> Vec<(u32, u32)> {
            self.ops
                .iter()
                .filter_map(|op| match *op {
                    Op::Write(a, v) => Some((a, v)),
                    _ => None,
                })
                .collect()
        }
    }

    impl RegisterWindow for SimFlash {
        fn read_word(&mut self, addr: u32) -> std::result::Result<u32, IoError> {
            let value = if addr == self.base + REG_STAT {
                self.status()
            } else if addr == self.base + REG_DAT {
                if !self.receiving() {
                    0
                } else if !self.primed {
                    self.primed = true;
                    0
                } else if self.frame_left > 0 {
                    self.frame_left -= 1;
                    self.next_rx_byte() as u32
                } else {
                    0
                }
            } else {
                self.other.get(&addr).copied().unwrap_or(0)
            };
            self.ops.push(Op::Read(addr, value));
            Ok(value)
        }

        fn write_word(&mut self, addr: u32, value: u32) -> std::result::Result<(), IoError> {
            self.ops.push(Op::Write(addr, value));
            if addr == self.base + REG_CON {
                self.con = value;
            } else if addr == self.base + REG_FRM {
                self.frame_left = value & 0xFFFF;
                self.primed = false;
            } else if addr == self.base + REG_DAT {
                if !self.receiving() && self.selected != 0 {
                    self.command.push(value as u8);
                }
            } else if addr == P3_OUTP_CLR {
                self.selected |= value;
                self.command.clear();
                self.rx_pos = 0;
            } else if addr == P3_OUTP_SET {
                self.selected &= !value;
            } else {
                self.other.insert(addr, value);
            }
            Ok(())
        }

        fn close(&mut self) {}
    }

    fn access(sim: SimFlash) -> RegisterAccess<SimFlash> {
        RegisterAccess::new(lpc32x0_tables::builtin_catalog(), sim)
    }

    fn spi1() -> SimFlash {
        SimFlash::new(SPI1_BASE)
    }

    #[test]
    fn test_init_sequence() {
        let mut regs = access(spi1());
        SpiNorDriver::new(&mut regs, SpiNorConfig::default())
            .init()
            .unwrap();

        assert_eq!(
            regs.window().writes(),
            vec![
                (P2_MUX_CLR, 0x30),
                (P2_DIR_SET, 0x6000_0000),
                (P3_OUTP_SET, 0x6000_0000),
                (SPI_CTRL, 0x03),
                (0x2008_8000, 0x01),
                (0x2008_8000, 0x03),
                (0x2008_8000, 0x01),
            ]
        );
    }

    #[test]
    fn test_init_spi2() {
        let config = SpiNorConfig {
            instance: SpiInstance::Spi2,
            ..Default::default()
        };
        let mut regs = access(SimFlash::new(SPI2_BASE));
        SpiNorDriver::new(&mut regs, config).init().unwrap();

        assert_eq!(regs.window().writes_to(SPI_CTRL), vec![0x30]);
        assert_eq!(regs.window().writes_to(0x2009_0000), vec![0x01, 0x03, 0x01]);
    }

    #[test]
    fn test_read_id() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.init().unwrap();
        assert_eq!(drv.read_id().unwrap(), [0xEF, 0x40, 0x18]);

        let sim = regs.window();
        assert_eq!(sim.command, vec![0x9F]);
        assert_eq!(sim.selected, 0);
        assert_eq!(sim.writes_to(P3_OUTP_CLR), vec![CS_PRIMARY]);
        // init drives both lines high, the transfer releases the primary one
        assert_eq!(sim.writes_to(P3_OUTP_SET), vec![CS_PRIMARY | CS_AUX, CS_PRIMARY]);
        assert_eq!(sim.writes_to(SPI1_BASE + REG_CON), vec![CON_TRANSMIT, CON_RECEIVE]);
        assert_eq!(sim.writes_to(SPI1_BASE + REG_FRM), vec![1, 3]);
        assert_eq!(sim.writes_to(SPI1_BASE + REG_STAT), vec![STAT_INTCLR, STAT_INTCLR]);
    }

    #[test]
    fn test_transmit_waits_for_fifo_space_before_each_byte() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.transmit(&[0xAA, 0x55]).unwrap();

        let stat = SPI1_BASE + REG_STAT;
        let dat = SPI1_BASE + REG_DAT;
        let ops: Vec<Op> = regs
            .window()
            .ops
            .iter()
            .copied()
            .filter(|op| matches!(op, Op::Read(a, _) | Op::Write(a, _) if *a == stat || *a == dat))
            .collect();
        assert_eq!(
            ops,
            vec![
                Op::Read(stat, STAT_BE),
                Op::Write(dat, 0xAA),
                Op::Read(stat, STAT_BE),
                Op::Write(dat, 0x55),
                Op::Read(stat, STAT_BE),
                Op::Write(stat, STAT_INTCLR),
            ]
        );
    }

    #[test]
    fn test_read_at_command_and_data() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.init().unwrap();
        let data = drv.read_at(0x0000_1234, 16).unwrap();

        let expected: Vec<u8> = (0x34..0x44).collect();
        assert_eq!(data, expected);
        assert_eq!(regs.window().command, vec![0x0B, 0x00, 0x12, 0x34, 0x00]);
    }

    #[test]
    fn test_read_at_masks_address_to_24_bits() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.read_at(0xAB12_3456, 1).unwrap();
        assert_eq!(regs.window().command, vec![0x0B, 0x12, 0x34, 0x56, 0x00]);
    }

    #[test]
    fn test_read_zero_bytes_touches_nothing() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        assert!(drv.read_at(0, 0).unwrap().is_empty());
        assert!(regs.window().ops.is_empty());
    }

    #[test]
    fn test_large_read_is_split_into_frames() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        let data = drv.read_at(0, 70_000).unwrap();

        assert_eq!(data.len(), 70_000);
        assert!(data.iter().enumerate().all(|(i, &b)| b == (i % 256) as u8));

        let sim = regs.window();
        // 5-byte command frame, then 65535 + 4465
        assert_eq!(sim.writes_to(SPI1_BASE + REG_FRM), vec![5, 65_535, 4_465]);
        // one acknowledge per frame
        assert_eq!(sim.writes_to(SPI1_BASE + REG_STAT).len(), 3);
        // one priming read per receive frame
        let primes = sim
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Read(a, 0) if *a == SPI1_BASE + REG_DAT))
            .count();
        assert!(primes >= 2);
    }

    #[test]
    fn test_large_transmit_is_split_into_frames() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.transmit(&[0x5A; 70_000]).unwrap();

        let frm = SPI1_BASE + REG_FRM;
        let stat = SPI1_BASE + REG_STAT;
        let frames: Vec<(u32, u32)> = regs
            .window()
            .writes()
            .into_iter()
            .filter(|&(a, _)| a == frm || a == stat)
            .collect();
        assert_eq!(
            frames,
            vec![
                (frm, 65_535),
                (stat, STAT_INTCLR),
                (frm, 4_465),
                (stat, STAT_INTCLR),
            ]
        );
        assert_eq!(regs.window().writes_to(SPI1_BASE + REG_DAT).len(), 70_000);
    }

    #[test]
    fn test_transfer_without_init_resolves_chip_select() {
        let config = SpiNorConfig {
            aux_requested: true,
            ..Default::default()
        };
        let mut regs = access(spi1().with_inputs(1 << 3));
        let mut drv = SpiNorDriver::new(&mut regs, config);
        assert_eq!(drv.chip_select(), None);

        assert_eq!(drv.read_id().unwrap(), [0xEF, 0x40, 0x18]);
        assert_eq!(drv.chip_select(), Some(ChipSelect::Auxiliary));

        let sim = regs.window();
        assert_eq!(sim.writes_to(P3_OUTP_CLR), vec![CS_AUX]);
        assert_eq!(sim.writes_to(P3_OUTP_SET), vec![CS_AUX]);
        assert_eq!(sim.selected, 0);
    }

    #[test]
    fn test_shiftact_stops_the_clock() {
        let mut sim = spi1();
        sim.shiftact_on_last = true;
        let mut regs = access(sim);
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.read_id().unwrap();

        assert_eq!(
            regs.window().writes_to(SPI1_BASE + REG_CON),
            vec![CON_TRANSMIT, CON_RECEIVE, 0x0080_2E83]
        );
    }

    #[test]
    fn test_chip_select_aux_present_not_requested() {
        let mut regs = access(spi1().with_inputs(1 << 3));
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.init().unwrap();
        assert_eq!(drv.chip_select(), Some(ChipSelect::Primary));
        drv.read_id().unwrap();
        assert_eq!(regs.window().writes_to(P3_OUTP_CLR), vec![CS_PRIMARY]);
    }

    #[test]
    fn test_chip_select_aux_present_and_requested() {
        let config = SpiNorConfig {
            aux_requested: true,
            ..Default::default()
        };
        let mut regs = access(spi1().with_inputs(1 << 3));
        let mut drv = SpiNorDriver::new(&mut regs, config);
        drv.init().unwrap();
        assert_eq!(drv.chip_select(), Some(ChipSelect::Auxiliary));
        drv.read_id().unwrap();
        assert_eq!(regs.window().writes_to(P3_OUTP_CLR), vec![CS_AUX]);
    }

    #[test]
    fn test_chip_select_aux_absent_falls_back_to_primary() {
        let config = SpiNorConfig {
            aux_requested: true,
            ..Default::default()
        };
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, config);
        drv.init().unwrap();
        assert_eq!(drv.chip_select(), Some(ChipSelect::Primary));
    }

    #[test]
    fn test_custom_detect_mask() {
        let config = SpiNorConfig {
            aux_requested: true,
            detect_mask: 1 << 28,
            ..Default::default()
        };
        let mut regs = access(spi1().with_inputs(1 << 3));
        let mut drv = SpiNorDriver::new(&mut regs, config);
        assert!(!drv.aux_present().unwrap());
    }

    #[test]
    fn test_stuck_status_times_out_and_releases_chip_select() {
        let mut sim = spi1();
        sim.stuck_status = Some(STAT_BF);
        let config = SpiNorConfig {
            poll_limit: 10,
            ..Default::default()
        };
        let mut regs = access(sim);
        let mut drv = SpiNorDriver::new(&mut regs, config);

        match drv.read_id() {
            Err(AccessError::Timeout { addr, polls }) => {
                assert_eq!(addr, 0x2008_8010);
                assert_eq!(polls, 10);
            }
            other => panic!("expected Timeout, got {:?}", other),
        }

        let sim = regs.window();
        assert_eq!(sim.selected, 0);
        assert_eq!(sim.writes().last(), Some(&(P3_OUTP_SET, CS_PRIMARY)));
        let stat_reads = sim
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Read(a, _) if *a == 0x2008_8010))
            .count();
        assert_eq!(stat_reads, 10);
    }

    #[test]
    fn test_missing_register_propagates() {
        let mut regs = RegisterAccess::new(lpc32x0_core::RegisterCatalog::new(), spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        assert!(matches!(
            drv.init(),
            Err(AccessError::UnknownRegister(P2_MUX_CLR))
        ));
        assert!(regs.window().ops.is_empty());
    }

    #[test]
    fn test_reset_pulse() {
        let mut regs = access(spi1());
        let mut drv = SpiNorDriver::new(&mut regs, SpiNorConfig::default());
        drv.reset().unwrap();
        assert_eq!(regs.window().writes(), vec![(SPI1_BASE, 0x03), (SPI1_BASE, 0x01)]);
    }
}
