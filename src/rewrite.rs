//! Find sprite literals like `{ 0x3c, 0x42, ..., 0x00 }` in arbitrary text and
//! replace them with their rotated form.
//!
//! This is a purely textual pass. Any brace group of exactly 8 hex byte
//! literals gets rotated, whether or not it's actually sprite data.

use anyhow::{bail, Context, Result};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{hex, sprite::Sprite};

/// Whitespace between tokens. `\x1C`-`\x1F` (the ASCII file/group/record/unit
/// separators) aren't Unicode `White_Space`, but older tooling treats them as
/// whitespace, so we do too.
const WS: &str = r"[\s\x1C-\x1F]*";

static SPRITE_LITERAL: Lazy<Regex> = Lazy::new(|| {
    let byte = "0x[0-9A-Fa-f]{2}";
    let pattern = format!(r"\{{{WS}((?:{byte}{WS},{WS}){{7}}{byte}){WS}\}}");
    Regex::new(&pattern).expect("sprite literal regex is valid")
});

pub struct Rewrite {
    pub text: String,
    /// How many sprite literals were rotated.
    pub sprites: usize,
}

/// Rotate every sprite literal in `text`.
///
/// Fails only if a regex match doesn't parse as 8 bytes, which would be a bug
/// in the pattern. Nothing is returned in that case, so callers never write
/// out a half-converted file.
pub fn rewrite(text: &str) -> Result<Rewrite> {
    let mut out = String::with_capacity(text.len());
    let mut sprites = 0;
    let mut last = 0;
    for caps in SPRITE_LITERAL.captures_iter(text) {
        let whole = caps.get(0).context("capture group 0 always participates")?;
        let sprite = parse_group(&caps[1])?;

        out.push_str(&text[last..whole.start()]);
        out.push_str(&format_group(sprite.rotate()));
        last = whole.end();
        sprites += 1;
    }
    out.push_str(&text[last..]);

    Ok(Rewrite { text: out, sprites })
}

/// Parse the comma-separated byte list from inside the braces.
pub fn parse_group(s: &str) -> Result<Sprite> {
    let bytes: Vec<u8> = s
        .split(',')
        .map(|b| hex::decode_byte(b.trim_matches(is_separator_space)))
        .try_collect()
        .with_context(|| format!("bad sprite literal: {s:?}"))?;
    let n = bytes.len();
    let Ok(rows) = <[u8; 8]>::try_from(bytes) else {
        bail!("expected 8 bytes, got {n}: {s:?}");
    };
    Ok(Sprite(rows))
}

fn is_separator_space(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// Always `{ 0xAA, 0xBB, ... }`, regardless of how the input was formatted.
pub fn format_group(sprite: Sprite) -> String {
    let bytes = sprite.bytes().into_iter().map(hex::encode_byte).join(", ");
    format!("{{ {bytes} }}")
}
