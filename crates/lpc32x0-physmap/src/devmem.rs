//! Page mapping through /dev/mem

use lpc32x0_core::window::{MappedPage, PageMapper, PAGE_SIZE};
use lpc32x0_core::IoError;

/// Default physical memory device
pub const DEV_MEM_PATH: &str = "/dev/mem";

/// Handle to the physical memory device
#[cfg(target_os = "linux")]
pub struct DevMem {
    path: String,
    file: Option<std::fs::File>,
}

#[cfg(target_os = "linux")]
impl DevMem {
    /// Use `/dev/mem`
    pub fn new() -> Self {
        Self::with_path(DEV_MEM_PATH)
    }

    /// Use another device node (e.g. a UIO or test file)
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// Device path
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(target_os = "linux")]
impl Default for DevMem {
    fn default() -> Self {
        Self::new()
    }
}

/// One mapped page of physical memory
#[cfg(target_os = "linux")]
pub struct DevMemPage {
    /// Pointer to the mapped memory
    ptr: *mut u8,
    /// Physical address of the page (for diagnostics)
    base: u32,
}

#[cfg(target_os = "linux")]
impl DevMemPage {
    /// Physical base address of this page
    pub fn base(&self) -> u32 {
        self.base
    }
}

#[cfg(target_os = "linux")]
impl PageMapper for DevMem {
    type Page = DevMemPage;

    fn open(&mut self) -> Result<(), IoError> {
        use std::fs::OpenOptions;
        use std::os::unix::fs::OpenOptionsExt;

        if self.file.is_some() {
            return Ok(());
        }

        // O_SYNC for uncached access (required for MMIO)
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(&self.path)
            .map_err(|source| IoError::OpenFailed {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("opened {}", self.path);
        self.file = Some(file);
        Ok(())
    }

    fn map(&mut self, base: u32) -> Result<DevMemPage, IoError> {
        use std::os::unix::io::AsRawFd;

        debug_assert_eq!(base % PAGE_SIZE, 0, "unaligned page base");

        let fd = match &self.file {
            Some(file) => file.as_raw_fd(),
            None => {
                return Err(IoError::MapFailed {
                    page: base,
                    source: std::io::Error::from_raw_os_error(libc::EBADF),
                })
            }
        };

        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                PAGE_SIZE as usize,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd,
                base as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(IoError::MapFailed {
                page: base,
                source: std::io::Error::last_os_error(),
            });
        }

        Ok(DevMemPage {
            ptr: ptr as *mut u8,
            base,
        })
    }

    fn close(&mut self) {
        if self.file.take().is_some() {
            log::debug!("closed {}", self.path);
        }
    }
}

#[cfg(target_os = "linux")]
impl MappedPage for DevMemPage {
    #[inline]
    fn read32(&self, offset: usize) -> u32 {
        assert!(offset + 4 <= PAGE_SIZE as usize, "read outside mapped page");
        debug_assert!(offset & 3 == 0, "unaligned 32-bit read");
        unsafe { core::ptr::read_volatile(self.ptr.add(offset) as *const u32) }
    }

    #[inline]
    fn write32(&self, offset: usize, value: u32) {
        assert!(offset + 4 <= PAGE_SIZE as usize, "write outside mapped page");
        debug_assert!(offset & 3 == 0, "unaligned 32-bit write");
        unsafe {
            core::ptr::write_volatile(self.ptr.add(offset) as *mut u32, value);
        }
    }
}

#[cfg(target_os = "linux")]
impl Drop for DevMemPage {
    fn drop(&mut self) {
        unsafe {
            libc::munmap(self.ptr as *mut libc::c_void, PAGE_SIZE as usize);
        }
        log::trace!("unmapped page {:#010x}", self.base);
    }
}

// Stub for non-Linux platforms
#[cfg(not(target_os = "linux"))]
pub struct DevMem {
    path: String,
}

#[cfg(not(target_os = "linux"))]
impl DevMem {
    pub fn new() -> Self {
        Self::with_path(DEV_MEM_PATH)
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(not(target_os = "linux"))]
impl Default for DevMem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "linux"))]
pub struct DevMemPage {
    _private: (),
}

#[cfg(not(target_os = "linux"))]
impl PageMapper for DevMem {
    type Page = DevMemPage;

    fn open(&mut self) -> Result<(), IoError> {
        Err(IoError::OpenFailed {
            path: self.path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "physical memory mapping only supported on Linux",
            ),
        })
    }

    fn map(&mut self, base: u32) -> Result<DevMemPage, IoError> {
        Err(IoError::MapFailed {
            page: base,
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "physical memory mapping only supported on Linux",
            ),
        })
    }

    fn close(&mut self) {}
}

#[cfg(not(target_os = "linux"))]
impl MappedPage for DevMemPage {
    fn read32(&self, _offset: usize) -> u32 {
        0
    }
    fn write32(&self, _offset: usize, _value: u32) {}
}
