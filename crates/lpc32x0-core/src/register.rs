//! Register descriptors and register sets

use core::fmt;
use std::sync::Arc;

use bitflags::bitflags;

bitflags! {
    /// Access permissions of a register
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Access: u8 {
        /// Register may be read
        const READ  = 1 << 0;
        /// Register may be written
        const WRITE = 1 << 1;
        /// Read-write
        const RW    = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl Access {
    /// Whether reads are permitted
    pub fn readable(self) -> bool {
        self.contains(Access::READ)
    }

    /// Whether writes are permitted
    pub fn writable(self) -> bool {
        self.contains(Access::WRITE)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.readable() {
            f.write_str("R")?;
        }
        if self.writable() {
            f.write_str("W")?;
        }
        Ok(())
    }
}

/// Turns a raw register value into a per-field textual breakdown
pub trait FieldDecoder: Send + Sync {
    /// Render the field report for `value`
    fn decode(&self, value: u32) -> String;
}

impl<F> FieldDecoder for F
where
    F: Fn(u32) -> String + Send + Sync,
{
    fn decode(&self, value: u32) -> String {
        self(value)
    }
}

/// Static description of one hardware register
#[derive(Clone)]
pub struct RegisterDescriptor {
    /// Physical address
    pub addr: u32,
    /// Value after reset (informational only)
    pub reset: u32,
    /// Short register name, e.g. "SPI1_CON"
    pub name: String,
    /// Human-readable description
    pub desc: String,
    /// Read/write permission, never empty
    pub access: Access,
    decoder: Option<Arc<dyn FieldDecoder>>,
}

impl RegisterDescriptor {
    /// Create a descriptor without a field decoder
    pub fn new(
        addr: u32,
        reset: u32,
        name: impl Into<String>,
        desc: impl Into<String>,
        access: Access,
    ) -> Self {
        debug_assert!(!access.is_empty(), "register access must not be empty");
        Self {
            addr,
            reset,
            name: name.into(),
            desc: desc.into(),
            access,
            decoder: None,
        }
    }

    /// Attach a field decoder
    pub fn with_decoder<D: FieldDecoder + 'static>(mut self, decoder: D) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Field decoder, if the register has one
    pub fn decoder(&self) -> Option<&dyn FieldDecoder> {
        self.decoder.as_deref()
    }

    /// Run the field decoder on `value`
    pub fn decode(&self, value: u32) -> Option<String> {
        self.decoder.as_ref().map(|d| d.decode(value))
    }
}

impl fmt::Debug for RegisterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterDescriptor")
            .field("addr", &format_args!("{:#010x}", self.addr))
            .field("reset", &format_args!("{:#010x}", self.reset))
            .field("name", &self.name)
            .field("access", &self.access)
            .field("decoder", &self.decoder.is_some())
            .finish()
    }
}

/// A named, ordered group of registers belonging to one hardware block
#[derive(Debug, Clone)]
pub struct RegisterSet {
    /// Set name, e.g. "clkpwr"
    pub name: String,
    /// Registers in display order
    pub registers: Vec<RegisterDescriptor>,
}

impl RegisterSet {
    /// Create a register set
    pub fn new(name: impl Into<String>, registers: Vec<RegisterDescriptor>) -> Self {
        Self {
            name: name.into(),
            registers,
        }
    }

    /// Number of registers in the set
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}
