//! Error types for lpc32x0-core
//!
//! `IoError` covers the physical window (device open, page mapping),
//! `AccessError` is what the register layer hands back to its callers.

use thiserror::Error;

/// Failure of the physical memory window
#[derive(Debug, Error)]
pub enum IoError {
    /// The physical memory device could not be opened
    #[error("Failed to open {path}: {source}")]
    OpenFailed {
        /// Device path
        path: String,
        /// Error from `open`
        #[source]
        source: std::io::Error,
    },

    /// A page could not be mapped
    #[error("Failed to map page {page:#010x}: {source}")]
    MapFailed {
        /// Physical address of the page
        page: u32,
        /// Error from `mmap`, or why the device was unusable
        #[source]
        source: std::io::Error,
    },

    /// 32-bit access to an address that is not word aligned
    #[error("Unaligned 32-bit access at {addr:#010x}")]
    Unaligned {
        /// Offending address
        addr: u32,
    },
}

/// Failure of a register access
#[derive(Debug, Error)]
pub enum AccessError {
    /// Address is not described by any register set
    #[error("no register at address {0:#010x}")]
    UnknownRegister(u32),

    /// No register set with this name
    #[error("no register set named '{0}'")]
    UnknownSet(String),

    /// Register is write-only
    #[error("{name} ({addr:08x}) is not readable")]
    NotReadable {
        /// Register address
        addr: u32,
        /// Register name
        name: String,
    },

    /// Register is read-only
    #[error("{name} ({addr:08x}) is not writable")]
    NotWritable {
        /// Register address
        addr: u32,
        /// Register name
        name: String,
    },

    /// Physical access failed
    #[error(transparent)]
    Io(#[from] IoError),

    /// A status poll did not reach the expected state
    #[error("timed out after {polls} polls of register {addr:#010x}")]
    Timeout {
        /// Register that was polled
        addr: u32,
        /// Number of reads made
        polls: u32,
    },

    /// The catalog holds no register sets
    #[error("register catalog is empty")]
    EmptyCatalog,
}

/// Result type alias for register access
pub type Result<T> = core::result::Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_register() {
        let e = AccessError::NotWritable {
            addr: 0x4000_800c,
            name: "MIC_SR".into(),
        };
        assert_eq!(e.to_string(), "MIC_SR (4000800c) is not writable");

        let e = AccessError::Timeout {
            addr: 0x2008_8010,
            polls: 10,
        };
        assert_eq!(e.to_string(), "timed out after 10 polls of register 0x20088010");
    }

    #[test]
    fn test_io_error_converts() {
        let e: AccessError = IoError::Unaligned { addr: 0x4000_4046 }.into();
        assert!(matches!(e, AccessError::Io(IoError::Unaligned { addr: 0x4000_4046 })));
        assert_eq!(e.to_string(), "Unaligned 32-bit access at 0x40004046");
    }
}
