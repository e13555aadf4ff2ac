//! Static mapping from NVDA locale identifiers to CLDR source locales.
//!
//! Each NVDA locale maps to one or more CLDR locales whose annotation data
//! feed it. Order is precedence: sources are merged first to last and later
//! sources overwrite earlier ones per pattern, so the broader locale is
//! always listed before the override that should win (e.g. `zh_tw` pulls
//! `zh` then `zh_Hant`).
//!
//! Adding support for a new NVDA locale means adding one entry here.

use indexmap::IndexMap;

/// The fallback locale. Its dictionary uses punctuation level `none` so CLDR
/// characters are spoken even with the user's punctuation level set to none;
/// every other locale inherits from it via level `-`.
pub const DEFAULT_LOCALE: &str = "en";

const NVDA_TO_CLDR: &[(&str, &[&str])] = &[
    ("af_ZA", &["af"]),
    ("am", &["am"]),
    // "an" (Aragonese): no CLDR annotation data yet
    ("ar", &["ar"]),
    ("as", &["as"]),
    ("bg", &["bg"]),
    ("bn", &["bn"]),
    ("ca", &["ca"]),
    ("ckb", &["ckb"]),
    ("cs", &["cs"]),
    ("da", &["da"]),
    ("de", &["de"]),
    ("de_CH", &["de_CH"]),
    ("el", &["el"]),
    ("en", &["en_001", "en"]),
    ("es", &["es"]),
    ("es_CO", &["es_419"]),
    ("fa", &["fa"]),
    ("fi", &["fi"]),
    ("fr", &["fr"]),
    ("ga", &["ga"]),
    ("gl", &["gl"]),
    ("gu", &["gu"]),
    ("he", &["he"]),
    ("hi", &["hi"]),
    ("hr", &["hr"]),
    ("hu", &["hu"]),
    ("id", &["id"]),
    ("is", &["is"]),
    ("it", &["it"]),
    ("ja", &["ja"]),
    ("ka", &["ka"]),
    // "kmr" (Northern Kurdish): no CLDR annotation data yet
    ("kn", &["kn"]),
    ("ko", &["ko"]),
    ("kok", &["kok"]),
    ("ky", &["ky"]),
    ("lt", &["lt"]),
    ("mk", &["mk"]),
    ("ml", &["ml"]),
    ("mn", &["mn"]),
    ("mni", &["mni"]),
    ("my", &["my"]),
    ("nb_NO", &["no"]),
    ("ne", &["ne"]),
    ("nl", &["nl"]),
    ("nn_NO", &["nn"]),
    ("pa", &["pa"]),
    ("pl", &["pl"]),
    ("pt_BR", &["pt"]),
    ("pt_pt", &["pt", "pt_PT"]),
    ("ro", &["ro"]),
    ("ru", &["ru"]),
    ("sk", &["sk"]),
    ("sl", &["sl"]),
    ("so", &["so"]),
    ("sq", &["sq"]),
    ("sr", &["sr"]),
    ("sv", &["sv"]),
    ("ta", &["ta"]),
    ("te", &["te"]),
    ("th", &["th"]),
    ("tr", &["tr"]),
    ("uk", &["uk"]),
    ("ur", &["ur"]),
    ("vi", &["vi"]),
    ("zh_cn", &["zh"]),
    ("zh_hk", &["zh", "zh_Hant_HK"]),
    ("zh_tw", &["zh", "zh_Hant"]),
];

/// The NVDA-to-CLDR locale mapping, in generation order.
pub fn locale_map() -> IndexMap<&'static str, &'static [&'static str]> {
    NVDA_TO_CLDR.iter().copied().collect()
}
