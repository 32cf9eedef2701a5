//! lpc32x0-physmap - /dev/mem backend for the register window
//!
//! This crate maps single 4 KiB pages of physical memory through `/dev/mem`
//! so that `lpc32x0-core` can reach the SoC's control and status registers
//! from user space.
//!
//! # Safety
//!
//! Accessing physical memory is inherently unsafe and requires root
//! privileges. Pages are always mapped page-aligned and whole, and every
//! access is bounds-checked against the mapped page.

mod devmem;

pub use devmem::{DevMem, DevMemPage, DEV_MEM_PATH};

/// Physical window backed by `/dev/mem`
pub type DevMemWindow = lpc32x0_core::PhysicalWindow<DevMem>;

/// Create an unopened `/dev/mem` window
pub fn dev_mem_window() -> DevMemWindow {
    lpc32x0_core::PhysicalWindow::new(DevMem::new())
}
