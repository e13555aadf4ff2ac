//! Serialization of the NVDA `cldr.dic` dictionary format.
//!
//! The format is line oriented: a `symbols:` header, then one
//! `<pattern>\t<description>\t<level>` line per entry, every line CRLF
//! terminated. NVDA expects the file as UTF-8 with a leading byte order
//! mark.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;

/// UTF-8 encoded byte order mark, required at the start of every dictionary.
const BOM: char = '\u{feff}';

/// Writes `entries` to `dest` in dictionary format, tagging every line with
/// `level`. Creates or overwrites `dest`.
pub fn write_dict(dest: &Path, entries: &IndexMap<String, String>, level: &str) -> Result<()> {
    let mut content = String::new();
    content.push(BOM);
    content.push_str("symbols:\r\n");
    for (pattern, description) in entries {
        content.push_str(pattern);
        content.push('\t');
        content.push_str(description);
        content.push('\t');
        content.push_str(level);
        content.push_str("\r\n");
    }

    fs::write(dest, content)
        .with_context(|| format!("Failed to write dictionary: {}", dest.display()))?;

    Ok(())
}
