//! Parsing and merging of CLDR annotation XML files.
//!
//! A CLDR annotation file contains `annotation` elements keyed by a `cp`
//! (code point / grapheme cluster) attribute. Only elements with
//! `type="tts"` carry the text-to-speech name consumed here; every other
//! element is ignored. Colons are stripped from the text because NVDA's
//! dictionary format reserves them.

use std::path::Path;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::Event;

/// A single `(pattern, description)` pair extracted from an annotation file.
pub type Entry = (String, String);

/// Reads every `type="tts"` annotation from one CLDR annotation file, in
/// document order.
pub fn read_tts_annotations(path: &Path) -> Result<Vec<Entry>> {
    let mut reader = Reader::from_file(path)
        .with_context(|| format!("Failed to open annotation file: {}", path.display()))?;
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();
    // Set to the cp attribute while inside an open tts annotation element.
    let mut open_pattern: Option<String> = None;
    let mut text = String::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .with_context(|| format!("Failed to parse XML: {}", path.display()))?;
        match event {
            Event::Start(element) if element.name().as_ref() == b"annotation" => {
                let mut pattern = None;
                let mut is_tts = false;
                for attr in element.attributes() {
                    let attr = attr
                        .with_context(|| format!("Malformed attribute in {}", path.display()))?;
                    match attr.key.as_ref() {
                        b"cp" => pattern = Some(attr.unescape_value()?.into_owned()),
                        b"type" => is_tts = attr.unescape_value()? == "tts",
                        _ => {}
                    }
                }
                if is_tts {
                    let Some(pattern) = pattern else {
                        bail!(
                            "tts annotation without a cp attribute in {}",
                            path.display()
                        );
                    };
                    open_pattern = Some(pattern);
                    text.clear();
                }
            }
            Event::Text(body) if open_pattern.is_some() => {
                text.push_str(&body.unescape()?);
            }
            Event::End(element) if element.name().as_ref() == b"annotation" => {
                if let Some(pattern) = open_pattern.take() {
                    entries.push((pattern, text.replace(':', "")));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

/// Merges the annotation entries of `sources`, in order, into one mapping.
///
/// Later sources overwrite earlier ones for the same pattern while the
/// pattern keeps its first-insertion position, so the caller's source order
/// is the precedence order. The caller supplies base annotation files before
/// derived ones, making derived data win.
///
/// An empty merged result means the source data is missing or malformed and
/// is reported as an error rather than returned.
pub fn reduce(sources: &[impl AsRef<Path>]) -> Result<IndexMap<String, String>> {
    let mut merged = IndexMap::new();
    for source in sources {
        for (pattern, description) in read_tts_annotations(source.as_ref())? {
            merged.insert(pattern, description);
        }
    }

    if merged.is_empty() {
        let checked: Vec<_> = sources
            .iter()
            .map(|s| s.as_ref().display().to_string())
            .collect();
        bail!(
            "No tts annotations found in any source (checked {})",
            checked.join(", ")
        );
    }

    Ok(merged)
}
