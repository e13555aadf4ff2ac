//! The full generation pipeline.
//!
//! Runs strictly sequentially: directory preconditions, then one reduction
//! per NVDA locale, then the archive step. Any failure aborts the whole run;
//! the tool is meant to be re-run in a clean environment rather than resume.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::annotations;
use crate::archive;
use crate::args::Arguments;
use crate::dict;
use crate::locales::{DEFAULT_LOCALE, locale_map};
use crate::reporter::Reporter;

/// Punctuation level for the default locale: CLDR characters are spoken even
/// with the user's punctuation level set to none.
const LEVEL_DEFAULT: &str = "none";
/// Punctuation level for every other locale: inherit from the default
/// locale's symbol data.
const LEVEL_INHERIT: &str = "-";

const DICT_FILE_NAME: &str = "cldr.dic";
const ARCHIVE_FILE_NAME: &str = "cldrLocaleDicts.zip";

pub fn run(args: &Arguments) -> Result<()> {
    let reporter = Reporter::new(args.verbose);
    generate(&args.cldr_root, &args.out_dir, &reporter)
}

/// Generates one dictionary per NVDA locale under `<out_dir>/locale`, then
/// archives that tree to `<out_dir>/cldrLocaleDicts.zip`.
pub fn generate(cldr_common: &Path, out_dir: &Path, reporter: &Reporter) -> Result<()> {
    let annotations_dir = cldr_common.join("annotations");
    let derived_dir = cldr_common.join("annotationsDerived");
    let locale_root = out_dir.join("locale");

    check_dirs(&annotations_dir, &derived_dir, &locale_root)?;

    let map = locale_map();
    for (target, source_locales) in &map {
        let sources = resolve_sources(&annotations_dir, &derived_dir, source_locales)?;

        let locale_dir = locale_root.join(target);
        fs::create_dir_all(&locale_dir)
            .with_context(|| format!("Failed to create {}", locale_dir.display()))?;
        let dest = locale_dir.join(DICT_FILE_NAME);
        reporter.generating(&dest, &sources);

        let merged = annotations::reduce(&sources)
            .with_context(|| format!("Failed to build dictionary for locale {}", target))?;

        let level = if *target == DEFAULT_LOCALE {
            LEVEL_DEFAULT
        } else {
            LEVEL_INHERIT
        };
        dict::write_dict(&dest, &merged, level)?;
    }

    let zip_path = out_dir.join(ARCHIVE_FILE_NAME);
    reporter.archiving(&zip_path);
    archive::zip_dir(&locale_root, &zip_path)?;
    reporter.done(map.len());

    Ok(())
}

/// Fails fast when the CLDR input trees are missing or the output tree is
/// not clean. Stale output mixed with fresh files would be silently wrong,
/// so the operator has to remove it first.
fn check_dirs(annotations_dir: &Path, derived_dir: &Path, locale_root: &Path) -> Result<()> {
    if !annotations_dir.is_dir() || !derived_dir.is_dir() {
        bail!(
            "CLDR directories not found, has the CLDR submodule been cloned? Expected: {} and {}",
            annotations_dir.display(),
            derived_dir.display()
        );
    }
    if locale_root.exists() {
        bail!(
            "Output directory not clean (remove all files before running again): {}",
            locale_root.display()
        );
    }
    Ok(())
}

/// Resolves the ordered source file list for one NVDA locale: every base
/// annotation file first, then every derived annotation file, both in the
/// given locale order. Derived files come last so their entries win the
/// merge; the grouping itself is preserved from the original data flow.
fn resolve_sources(
    annotations_dir: &Path,
    derived_dir: &Path,
    source_locales: &[&str],
) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::with_capacity(source_locales.len() * 2);
    for dir in [annotations_dir, derived_dir] {
        for locale in source_locales {
            let source = dir.join(format!("{}.xml", locale));
            if !source.is_file() {
                bail!("Missing CLDR annotation file: {}", source.display());
            }
            sources.push(source);
        }
    }
    Ok(sources)
}
