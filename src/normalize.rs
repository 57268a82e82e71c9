// src/normalize.rs
//! Accent-insensitive text normalization for keyword matching.

use once_cell::sync::OnceCell;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for substring keyword matching: strip diacritics
/// (NFD + drop combining marks), lower-case, collapse whitespace.
///
/// "Café Komorní" and "cafe komorni" normalize to the same string.
pub fn normalize(input: &str) -> String {
    // 1) Decompose and drop combining marks ("café" → "cafe")
    let folded: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();

    // 2) Lower-case (Unicode-aware; keyword lists are already lower-case)
    let lowered = folded.to_lowercase();

    // 3) Collapse whitespace
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_ws.replace_all(&lowered, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("Kavárna U Čápa"), "kavarna u capa");
        assert_eq!(normalize("crème brûlée"), "creme brulee");
    }

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Board\tGame\n Night  "), "board game night");
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(normalize("quiet reading at the library"), "quiet reading at the library");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
