use anyhow::{Context, Result};
use itertools::Itertools;

/// Decode a byte literal of the form `0xNN`. Hex digits may be either case,
/// but the prefix must be a lowercase `0x`.
pub fn decode_byte(s: &str) -> Result<u8> {
    let digits = s
        .strip_prefix("0x")
        .with_context(|| format!("missing 0x prefix: {s:?}"))?;
    hex_to_byte(digits)
}

/// Render a byte as `0xNN`, always two uppercase digits.
pub fn encode_byte(byte: u8) -> String {
    format!("0x{byte:02X}")
}

fn hex_to_byte(s: &str) -> Result<u8> {
    let (hi, lo) = s
        .chars()
        .collect_tuple()
        .with_context(|| format!("expected exactly 2 hex digits: {s:?}"))?;
    let hi = hex_to_nibble(hi)?;
    let lo = hex_to_nibble(lo)?;
    Ok(hi << 4 | lo)
}

fn hex_to_nibble(c: char) -> Result<u8> {
    let n: u32 = c
        .to_digit(16)
        .with_context(|| format!("not a hex digit: {c:?}"))?;
    Ok(n as u8)
}
