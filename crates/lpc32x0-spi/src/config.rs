//! Driver configuration and option parsing

use std::fmt;

use crate::regs::{
    DETECT_AUX_DEFAULT, SPI1_BASE, SPI2_BASE, SPI_CTRL_SPI1, SPI_CTRL_SPI2,
};

/// Default number of status reads before a poll gives up
pub const DEFAULT_POLL_LIMIT: u32 = 1_000_000;

/// Which SPI block drives the flash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiInstance {
    /// SPI1 at 0x20088000
    #[default]
    Spi1,
    /// SPI2 at 0x20090000
    Spi2,
}

impl SpiInstance {
    /// Register block base address
    pub fn base(self) -> u32 {
        match self {
            Self::Spi1 => SPI1_BASE,
            Self::Spi2 => SPI2_BASE,
        }
    }

    /// SPI_CTRL bits that clock the block and hand it the pins
    pub fn ctrl_enable(self) -> u32 {
        match self {
            Self::Spi1 => SPI_CTRL_SPI1,
            Self::Spi2 => SPI_CTRL_SPI2,
        }
    }

    /// Parse "1"/"2" (or "spi1"/"spi2")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "1" | "spi1" => Some(Self::Spi1),
            "2" | "spi2" => Some(Self::Spi2),
            _ => None,
        }
    }
}

impl fmt::Display for SpiInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi1 => write!(f, "SPI1"),
            Self::Spi2 => write!(f, "SPI2"),
        }
    }
}

/// SPI-NOR driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiNorConfig {
    /// SPI block to use
    pub instance: SpiInstance,
    /// Talk to the auxiliary flash when it is present
    pub aux_requested: bool,
    /// P3_INP_STATE bits that signal an auxiliary flash
    pub detect_mask: u32,
    /// Status reads per poll before [`AccessError::Timeout`](lpc32x0_core::AccessError::Timeout)
    pub poll_limit: u32,
}

impl Default for SpiNorConfig {
    fn default() -> Self {
        Self {
            instance: SpiInstance::default(),
            aux_requested: false,
            detect_mask: DETECT_AUX_DEFAULT,
            poll_limit: DEFAULT_POLL_LIMIT,
        }
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "y" | "true" | "1" | "on" => Some(true),
        "no" | "n" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Parse driver options from a list of key-value pairs
///
/// Supported options:
/// - `spi=1|2`
/// - `aux=yes|no`
/// - `detect=<mask>` (hex with `0x` or decimal)
/// - `polls=<n>`
pub fn parse_options(options: &[(&str, &str)]) -> Result<SpiNorConfig, String> {
    let mut config = SpiNorConfig::default();

    for (key, value) in options {
        match *key {
            "spi" => {
                config.instance = SpiInstance::parse(value)
                    .ok_or_else(|| format!("Invalid spi value: {} (use 1 or 2)", value))?;
            }
            "aux" => {
                config.aux_requested =
                    parse_bool(value).ok_or_else(|| format!("Invalid aux value: {}", value))?;
            }
            "detect" => {
                config.detect_mask =
                    parse_u32(value).ok_or_else(|| format!("Invalid detect mask: {}", value))?;
            }
            "polls" => {
                let polls =
                    parse_u32(value).ok_or_else(|| format!("Invalid polls value: {}", value))?;
                if polls == 0 {
                    return Err("polls must be at least 1".to_string());
                }
                config.poll_limit = polls;
            }
            _ => {
                log::warn!("lpc32x0_spi: Unknown option: {}={}", key, value);
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_options(&[]).unwrap();
        assert_eq!(config, SpiNorConfig::default());
        assert_eq!(config.instance, SpiInstance::Spi1);
        assert!(!config.aux_requested);
        assert_eq!(config.detect_mask, 1 << 3);
        assert_eq!(config.poll_limit, DEFAULT_POLL_LIMIT);
    }

    #[test]
    fn test_all_options() {
        let config = parse_options(&[
            ("spi", "2"),
            ("aux", "yes"),
            ("detect", "0x10"),
            ("polls", "500"),
        ])
        .unwrap();
        assert_eq!(config.instance, SpiInstance::Spi2);
        assert!(config.aux_requested);
        assert_eq!(config.detect_mask, 0x10);
        assert_eq!(config.poll_limit, 500);
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse_options(&[("spi", "3")]).is_err());
        assert!(parse_options(&[("aux", "maybe")]).is_err());
        assert!(parse_options(&[("detect", "0xZZ")]).is_err());
        assert!(parse_options(&[("polls", "0")]).is_err());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_options(&[("speed", "fast")]).unwrap();
        assert_eq!(config, SpiNorConfig::default());
    }

    #[test]
    fn test_instance() {
        assert_eq!(SpiInstance::Spi2.base(), 0x2009_0000);
        assert_eq!(SpiInstance::Spi2.ctrl_enable(), 0x30);
        assert_eq!(SpiInstance::parse("SPI1"), Some(SpiInstance::Spi1));
        assert_eq!(SpiInstance::Spi1.to_string(), "SPI1");
    }
}
