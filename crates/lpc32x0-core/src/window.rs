//! Paged window onto physical address space
//!
//! Register I/O goes through a single mapped 4 KiB page. The window only
//! re-maps when an access falls outside the current page, and it always
//! releases the old page before mapping the new one.
//!
//! # Concurrency
//!
//! A window is single-owner and not reentrant. The registers behind it are
//! shared hardware state and nothing here serializes access between
//! processes; callers using the same address range concurrently must
//! coordinate among themselves.

use crate::error::IoError;

/// Size of the mapped window
pub const PAGE_SIZE: u32 = 0x1000;
/// Mask selecting the in-page offset of an address
pub const PAGE_MASK: u32 = PAGE_SIZE - 1;

/// Page base containing `addr`
pub fn page_base(addr: u32) -> u32 {
    addr & !PAGE_MASK
}

/// One mapped page of physical memory. Dropping it unmaps it.
pub trait MappedPage {
    /// Volatile 32-bit read at `offset` within the page
    fn read32(&self, offset: usize) -> u32;
    /// Volatile 32-bit write at `offset` within the page
    fn write32(&self, offset: usize, value: u32);
}

/// Backend that opens the physical memory device and maps pages of it
pub trait PageMapper {
    /// Page type produced by [`PageMapper::map`]
    type Page: MappedPage;

    /// Open the backing device
    fn open(&mut self) -> Result<(), IoError>;

    /// Map the page at `base` (page aligned) read-write
    fn map(&mut self, base: u32) -> Result<Self::Page, IoError>;

    /// Close the backing device. Any page has already been dropped.
    fn close(&mut self);
}

/// Typed 32-bit access at absolute physical addresses
///
/// [`PhysicalWindow`] is the real implementation; tests substitute
/// recording fakes.
pub trait RegisterWindow {
    /// Read the word at `addr`
    fn read_word(&mut self, addr: u32) -> Result<u32, IoError>;
    /// Write the word at `addr`
    fn write_word(&mut self, addr: u32, value: u32) -> Result<(), IoError>;
    /// Release all OS resources. Idempotent.
    fn close(&mut self);
}

/// The single mapped page and device handle used for register I/O
pub struct PhysicalWindow<M: PageMapper> {
    mapper: M,
    opened: bool,
    current: Option<(u32, M::Page)>,
}

impl<M: PageMapper> PhysicalWindow<M> {
    /// Create an unopened, unmapped window over `mapper`
    pub fn new(mapper: M) -> Self {
        Self {
            mapper,
            opened: false,
            current: None,
        }
    }

    /// Open the backing device. Returns immediately if already open.
    pub fn open(&mut self) -> Result<(), IoError> {
        if !self.opened {
            self.mapper.open()?;
            self.opened = true;
        }
        Ok(())
    }

    /// Base of the currently mapped page, if any
    pub fn mapped_page(&self) -> Option<u32> {
        self.current.as_ref().map(|(base, _)| *base)
    }

    /// Make sure the page containing `addr` is the mapped one.
    ///
    /// On a mapping failure the window is left unmapped.
    pub fn ensure_mapped(&mut self, addr: u32) -> Result<(), IoError> {
        let base = page_base(addr);
        if self.mapped_page() == Some(base) {
            return Ok(());
        }

        // Old page must be gone before the new one exists
        self.current = None;
        let page = self.mapper.map(base)?;
        log::debug!("mapped page {:#010x}", base);
        self.current = Some((base, page));
        Ok(())
    }

    fn page_for(&mut self, addr: u32) -> Result<&M::Page, IoError> {
        if addr & 0x3 != 0 {
            return Err(IoError::Unaligned { addr });
        }
        self.open()?;
        self.ensure_mapped(addr)?;
        match &self.current {
            Some((_, page)) => Ok(page),
            None => unreachable!("ensure_mapped succeeded without a mapping"),
        }
    }

    /// Read the word at physical address `addr`
    pub fn read_word(&mut self, addr: u32) -> Result<u32, IoError> {
        let page = self.page_for(addr)?;
        Ok(page.read32((addr & PAGE_MASK) as usize))
    }

    /// Write the word at physical address `addr`
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), IoError> {
        let page = self.page_for(addr)?;
        page.write32((addr & PAGE_MASK) as usize, value);
        Ok(())
    }

    /// Unmap the current page and close the device. Idempotent.
    pub fn close(&mut self) {
        self.current = None;
        if self.opened {
            self.mapper.close();
            self.opened = false;
        }
    }

    /// The page mapper backing this window
    pub fn mapper(&self) -> &M {
        &self.mapper
    }
}

impl<M: PageMapper> RegisterWindow for PhysicalWindow<M> {
    fn read_word(&mut self, addr: u32) -> Result<u32, IoError> {
        PhysicalWindow::read_word(self, addr)
    }

    fn write_word(&mut self, addr: u32, value: u32) -> Result<(), IoError> {
        PhysicalWindow::write_word(self, addr, value)
    }

    fn close(&mut self) {
        PhysicalWindow::close(self)
    }
}

impl<M: PageMapper> Drop for PhysicalWindow<M> {
    fn drop(&mut self) {
        self.close();
    }
}
