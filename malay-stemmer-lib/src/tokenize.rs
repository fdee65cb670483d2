// Word extraction from running text.

use once_cell::sync::Lazy;
use regex::Regex;

// Latin letters (ASCII, Latin-1 Supplement, Latin Extended-A) and apostrophes.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z\x{00C0}-\x{017F}']+\b").expect("word pattern is valid"));

/// Lowercase `text` and return its word tokens in order, duplicates included.
///
/// Hyphens separate tokens, so {mata-mata} yields two tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(
            tokenize("Hang Tuah berkata kepada Raja."),
            vec!["hang", "tuah", "berkata", "kepada", "raja"]
        );
    }

    #[test]
    fn test_tokenize_keeps_inner_apostrophe() {
        assert_eq!(tokenize("Qur'an dibaca"), vec!["qur'an", "dibaca"]);
    }

    #[test]
    fn test_tokenize_drops_edge_apostrophes() {
        assert_eq!(tokenize("'kata'"), vec!["kata"]);
    }

    #[test]
    fn test_tokenize_accented_letters() {
        assert_eq!(tokenize("café Ŝ"), vec!["café", "ŝ"]);
    }

    #[test]
    fn test_tokenize_splits_on_hyphens() {
        assert_eq!(tokenize("mata-mata 2 kali"), vec!["mata", "mata", "kali"]);
    }

    #[test]
    fn test_tokenize_digits_glued_to_letters() {
        // Digits are word characters, so there is no boundary before {kali}.
        assert!(tokenize("2kali").is_empty());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("  123 ... ").is_empty());
    }
}
