//! Progress output formatting.
//!
//! This module is separate from the pipeline logic to allow cldrdict to be
//! used as a library without printing side effects.

use std::path::Path;

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Writes informational progress lines to stdout. Not a stable interface.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Announce one dictionary being generated, with its source files when
    /// verbose.
    pub fn generating(&self, dest: &Path, sources: &[impl AsRef<Path>]) {
        println!("{} {}", "Generating".green(), dest.display());
        if self.verbose {
            for source in sources {
                println!("    {} {}", "from".dimmed(), source.as_ref().display());
            }
        }
    }

    pub fn archiving(&self, zip_path: &Path) {
        println!("{} {}", "Archiving".green(), zip_path.display());
    }

    pub fn done(&self, locale_count: usize) {
        println!(
            "{} Generated dictionaries for {} locales",
            SUCCESS_MARK.green(),
            locale_count
        );
    }
}
