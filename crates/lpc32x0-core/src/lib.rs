//! lpc32x0-core - Register access and bitfield decoding
//!
//! This crate provides the pieces shared by every lpc32x0 tool:
//!
//! - a catalog of named register sets with per-register permissions and
//!   optional field decoders ([`catalog`], [`register`])
//! - a single-page window onto physical memory that re-maps only when an
//!   access leaves the current page ([`window`])
//! - permission-checked register reads/writes and register reports
//!   ([`access`])
//! - bit range extraction and report formatting helpers used by the field
//!   decoders ([`bits`], [`report`])
//!
//! The operating-system side of the window (opening `/dev/mem`, `mmap`)
//! lives in `lpc32x0-physmap`; anything implementing [`window::PageMapper`]
//! can back a [`window::PhysicalWindow`].
//!
//! # Example
//!
//! ```ignore
//! use lpc32x0_core::{RegisterAccess, PhysicalWindow};
//!
//! let window = PhysicalWindow::new(lpc32x0_physmap::DevMem::new());
//! let mut regs = RegisterAccess::new(lpc32x0_tables::builtin_catalog(), window);
//! let value = regs.read_register(0x4000_4044)?;
//! println!("{}", regs.describe(0x4000_4044, value, true)?);
//! regs.close();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod access;
pub mod bits;
pub mod catalog;
pub mod error;
pub mod register;
pub mod report;
pub mod window;

pub use access::RegisterAccess;
pub use bits::{extract_field, render_field_binary};
pub use catalog::{CatalogError, RegisterCatalog};
pub use error::{AccessError, IoError, Result};
pub use register::{Access, FieldDecoder, RegisterDescriptor, RegisterSet};
pub use report::FieldReport;
pub use window::{MappedPage, PageMapper, PhysicalWindow, RegisterWindow};
