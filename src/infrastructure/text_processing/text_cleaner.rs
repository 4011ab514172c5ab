use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

static NON_ASCII_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());

/// Flattens OCR output into a single line of ASCII text for the model prompt.
///
/// Ligatures and full-width forms are decomposed first, so `ﬁ` survives as
/// `fi` instead of being dropped with the rest of the non-ASCII characters.
/// Returns an empty string when nothing readable is left.
pub fn clean_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");
    let ascii = NON_ASCII_RUN.replace_all(&de_hyphenated, " ");

    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}
