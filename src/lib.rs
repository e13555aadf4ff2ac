//! cldrdict - CLDR annotation dictionary generator for NVDA
//!
//! cldrdict converts CLDR (Unicode Common Locale Data Repository) annotation
//! XML files into the flat tab-delimited `cldr.dic` dictionaries consumed by
//! NVDA's symbol pronunciation subsystem, one per supported NVDA locale, and
//! archives the generated tree.
//!
//! ## Module Structure
//!
//! - `args`: Command-line interface definitions
//! - `locales`: Static NVDA-to-CLDR locale mapping table
//! - `annotations`: XML parsing and ordered merge of annotation entries
//! - `dict`: Dictionary file serialization
//! - `archive`: Zip packaging of the output tree
//! - `pipeline`: The full generation pipeline (directory checks, per-locale
//!   loop, archiving)
//! - `reporter`: Progress output formatting

pub mod annotations;
pub mod archive;
pub mod args;
pub mod dict;
pub mod locales;
pub mod pipeline;
pub mod reporter;
