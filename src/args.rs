//! CLI argument definitions using clap.
//!
//! The tool is single-purpose, so there are no subcommands: running the
//! binary runs the whole generation pipeline. The defaults match the layout
//! of an NVDA source checkout with the CLDR submodule cloned next to the
//! tool, and can be overridden per invocation or via environment variables.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// CLDR "common" directory containing the `annotations` and
    /// `annotationsDerived` trees
    #[arg(long, env = "CLDRDICT_CLDR_ROOT", default_value = "cldr/production/common")]
    pub cldr_root: PathBuf,

    /// Output root; dictionaries go to `<out-dir>/locale`, the archive to
    /// `<out-dir>/cldrLocaleDicts.zip`
    #[arg(long, env = "CLDRDICT_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// Also print each locale's resolved source file list
    #[arg(short, long)]
    pub verbose: bool,
}
