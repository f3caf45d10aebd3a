use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// UTF-8 unless a byte order mark says otherwise; the mark itself is dropped
pub fn decode_mepla_bytes(bytes: &[u8]) -> Result<String> {
    let (txt, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
    ensure!(!had_errors, "Malformed {} input", encoding.name());

    Ok(txt.into_owned())
}

pub fn read_mepla_file(path: &Path) -> Result<String> {
    ensure!(path.is_file(), "File not found: {}", path.display());

    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_mepla_bytes(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

// line endings are not consistent across exports
pub fn split_lines(txt: &str) -> impl Iterator<Item = &str> {
    static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

    REGEX_NEW_LINE.split(txt)
}
