//! Bit range extraction and binary rendering
//!
//! Bit ranges are inclusive and 0-based, written `[high:low]` as in the
//! LPC32x0 user manual.

/// Extract bits `[high:low]` of `value`, shifted down to bit 0.
///
/// An invalid range (`high < low` or `high > 31`) yields 0 instead of an
/// error. Reserved-field entries in the decoder tables rely on this, so
/// don't build new call sites on it.
pub fn extract_field(value: u32, high: u32, low: u32) -> u32 {
    if high < low || high > 31 {
        return 0;
    }

    let bits = high - low + 1;
    let mask = if bits >= 32 { u32::MAX } else { (1u32 << bits) - 1 };
    (value >> low) & mask
}

/// Extract bits `[high:low]` and render them as a `0b`-prefixed binary string
/// with exactly `high - low + 1` digits.
///
/// Returns `(0, "")` for an invalid range.
pub fn render_field_binary(value: u32, high: u32, low: u32) -> (u32, String) {
    if high < low || high > 31 {
        return (0, String::new());
    }

    let width = (high - low + 1) as usize;
    let field = extract_field(value, high, low);
    (field, format!("0b{:0width$b}", field, width = width))
}

/// Format a bit range label, `[7]` or `[17:16]`
pub fn range_label(high: u32, low: u32) -> String {
    if high == low {
        format!("[{}]", high)
    } else {
        format!("[{}:{}]", high, low)
    }
}
