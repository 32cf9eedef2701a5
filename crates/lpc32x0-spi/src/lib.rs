//! lpc32x0-spi - SPI-NOR flash over the LPC32x0 SPI block
//!
//! Drives SPI1 or SPI2 as a byte-oriented master to read the JEDEC ID and
//! fast-read data from a NOR flash. The board may carry a second flash on
//! another chip-select line; an input pin tells whether it is fitted and
//! [`SpiNorConfig::aux_requested`] selects it.
//!
//! Register access goes exclusively through
//! [`RegisterAccess`](lpc32x0_core::RegisterAccess), so catalog permissions
//! apply to the driver as well.
//!
//! # Example
//!
//! ```ignore
//! use lpc32x0_spi::{parse_options, SpiNorDriver};
//!
//! let config = parse_options(&[("spi", "1"), ("aux", "no")])?;
//! let mut drv = SpiNorDriver::new(&mut regs, config);
//! drv.init()?;
//! let id = drv.read_id()?;
//! let data = drv.read_at(0, 256)?;
//! ```

#![warn(rust_2018_idioms)]

pub mod config;
pub mod driver;
pub mod opcodes;
pub mod regs;

pub use config::{parse_options, SpiInstance, SpiNorConfig, DEFAULT_POLL_LIMIT};
pub use driver::{ChipSelect, SpiNorDriver};
