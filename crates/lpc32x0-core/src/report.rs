//! Field-by-field report builder used by register decoders
//!
//! Each field renders as two lines:
//!
//! ```text
//! 		  [17:16] SPI mode selection
//! 			0b00...............................SPI mode 0: ...
//! ```

use core::fmt::Write;

use crate::bits::{range_label, render_field_binary};

/// Column the binary rendering is padded to (with '.') before the meaning
const BINARY_COLUMN: usize = 35;

/// Accumulates the lines of one register's field breakdown
#[derive(Debug, Default, Clone)]
pub struct FieldReport {
    out: String,
}

impl FieldReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a labelled field and return its extracted value.
    ///
    /// `meaning` receives the field value and returns the decoded text
    /// printed after the binary rendering (may be empty).
    pub fn field<F>(&mut self, value: u32, high: u32, low: u32, label: &str, meaning: F) -> u32
    where
        F: FnOnce(u32) -> String,
    {
        let _ = writeln!(self.out, "\t\t{:>7} {}", range_label(high, low), label);
        self.bits(value, high, low, meaning)
    }

    /// Add a field with no header line, only the binary rendering and meaning
    pub fn bits<F>(&mut self, value: u32, high: u32, low: u32, meaning: F) -> u32
    where
        F: FnOnce(u32) -> String,
    {
        let (field, binary) = render_field_binary(value, high, low);
        let _ = writeln!(
            self.out,
            "\t\t\t{:.<width$}{}",
            binary,
            meaning(field),
            width = BINARY_COLUMN
        );
        field
    }

    /// Add a free-form line
    pub fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Finish the report
    pub fn finish(self) -> String {
        self.out
    }
}

/// Meaning helper for single-bit enable flags
pub fn enabled(field: u32) -> String {
    if field == 0 {
        "disabled".to_string()
    } else {
        "enabled".to_string()
    }
}

/// Meaning helper for fields with nothing to say
pub fn blank(_field: u32) -> String {
    String::new()
}
