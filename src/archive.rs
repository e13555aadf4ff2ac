//! Zip packaging of the generated dictionary tree.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Archives every file under `src_root` into `zip_path`, stored under its
/// forward-slash relative path. The walk is sorted so identical input trees
/// produce identical archives.
pub fn zip_dir(src_root: &Path, zip_path: &Path) -> Result<()> {
    let file = fs::File::create(zip_path)
        .with_context(|| format!("Failed to create archive: {}", zip_path.display()))?;
    let mut zip = ZipWriter::new(file);
    // Fixed timestamp keeps repeated runs byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for entry in WalkDir::new(src_root).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk output tree: {}", src_root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src_root)
            .expect("walked path is always under the walk root");
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        zip.start_file(name, options)
            .with_context(|| format!("Failed to add {} to archive", relative.display()))?;
        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        zip.write_all(&bytes)
            .with_context(|| format!("Failed to compress {}", relative.display()))?;
    }

    zip.finish()
        .with_context(|| format!("Failed to finalize archive: {}", zip_path.display()))?;

    Ok(())
}
