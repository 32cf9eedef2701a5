//! SPI block and chip-select register definitions
//!
//! Offsets are relative to the SPI instance base (see
//! [`SpiInstance::base`](crate::SpiInstance::base)); everything else is an
//! absolute physical address.

// ============================================================================
// SPI block layout
// ============================================================================

/// SPI1 base address
pub const SPI1_BASE: u32 = 0x2008_8000;
/// SPI2 base address
pub const SPI2_BASE: u32 = 0x2009_0000;

/// Global control
pub const REG_GLOBAL: u32 = 0x00;
/// Control
pub const REG_CON: u32 = 0x04;
/// Frame count (16 bits)
pub const REG_FRM: u32 = 0x08;
/// Interrupt enable
pub const REG_IER: u32 = 0x0C;
/// Status
pub const REG_STAT: u32 = 0x10;
/// Data FIFO
pub const REG_DAT: u32 = 0x14;

// GLOBAL bits
/// Interface enable
pub const GLOBAL_ENABLE: u32 = 0x01;
/// Software reset (held while set)
pub const GLOBAL_RST: u32 = 0x02;

// CON words
/// Master, mode 0, 8 bits, rate 3, unidirectional DATIO, transmit
pub const CON_TRANSMIT: u32 = 0x0080_8E83;
/// Same as [`CON_TRANSMIT`] but receiving
pub const CON_RECEIVE: u32 = 0x0080_0E83;
/// Stop generating clock pulses on SPIn_CLK
pub const CON_SHIFT_OFF: u32 = 0x0000_2000;

// STAT bits
/// FIFO empty
pub const STAT_BE: u32 = 0x001;
/// FIFO full
pub const STAT_BF: u32 = 0x004;
/// Shifter active
pub const STAT_SHIFTACT: u32 = 0x008;
/// Written to STAT to clear the interrupt flag
pub const STAT_INTCLR: u32 = 0x100;

/// Largest frame the FRM register can describe
pub const MAX_FRAME_LEN: usize = 0xFFFF;

// ============================================================================
// Clock/pin control
// ============================================================================

/// SPI_CTRL (clock and power block)
pub const SPI_CTRL: u32 = 0x4000_40C4;
/// SPI1 clock enable and pin drive by the SPI1 block
pub const SPI_CTRL_SPI1: u32 = 0x03;
/// SPI2 clock enable and pin drive by the SPI2 block
pub const SPI_CTRL_SPI2: u32 = 0x30;

// ============================================================================
// Chip-select GPIOs
// ============================================================================

/// Port 2 mux clear
pub const P2_MUX_CLR: u32 = 0x4002_802C;
/// GPIO_05/SSEL0 and GPIO_04/SSEL1 as plain GPIOs
pub const P2_MUX_CS_GPIO: u32 = 0x30;
/// Port 2/3 direction set
pub const P2_DIR_SET: u32 = 0x4002_8010;
/// Port 3 input state
pub const P3_INP_STATE: u32 = 0x4002_8000;
/// Port 3 output set
pub const P3_OUTP_SET: u32 = 0x4002_8004;
/// Port 3 output clear
pub const P3_OUTP_CLR: u32 = 0x4002_8008;

/// GPIO_05: chip select of the onboard flash
pub const CS_PRIMARY: u32 = 1 << 30;
/// GPIO_04: chip select of the auxiliary flash
pub const CS_AUX: u32 = 1 << 29;
/// GPI_3: auxiliary flash present
pub const DETECT_AUX_DEFAULT: u32 = 1 << 3;
