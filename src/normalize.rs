// Deterministic text cleaning applied to every article before vectorization.
//
// The transform is a fixed sequence: lowercase, strip diacritics (NFD then
// drop combining marks), strip angle-bracket markup, drop everything that
// isn't an ASCII letter or whitespace, remove stopwords, collapse whitespace.
// The composed function is idempotent: normalizing already-normalized text
// is a no-op.

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Stopword language for the batch. The original corpus is French news, so
/// French is the default; English is available for mixed feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    French,
    English,
}

impl Language {
    fn stopword_list(self) -> Vec<String> {
        match self {
            Language::French => get(LANGUAGE::French),
            Language::English => get(LANGUAGE::English),
        }
    }
}

/// Pure text normalizer. Construction folds the stopword list through the
/// same character pipeline as the input text, so accented stopwords still
/// match their stripped forms ("était" → "etait").
pub struct Normalizer {
    stopwords: HashSet<String>,
    tag_pattern: Regex,
}

impl Normalizer {
    pub fn new(language: Language) -> Self {
        let tag_pattern = Regex::new(r"</?[^>]+(>|$)").expect("tag pattern is valid");
        let stopwords = language
            .stopword_list()
            .iter()
            .map(|word| fold_to_ascii_letters(word))
            .filter(|word| !word.is_empty())
            .collect();
        Self {
            stopwords,
            tag_pattern,
        }
    }

    /// Normalize raw article text. Empty input yields an empty string; the
    /// output contains only lowercase ASCII letters separated by single
    /// spaces, with no leading or trailing whitespace.
    pub fn normalize(&self, raw: &str) -> String {
        let folded = fold_to_ascii_letters_and_whitespace(&self.tag_pattern, raw);
        folded
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Lowercase, strip diacritics, strip markup, keep only `a-z` + whitespace.
fn fold_to_ascii_letters_and_whitespace(tag_pattern: &Regex, raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let without_tags = tag_pattern.replace_all(&stripped, "");
    without_tags
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect()
}

/// Same fold without whitespace retention — used on single stopword tokens.
fn fold_to_ascii_letters(word: &str) -> String {
    word.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> Normalizer {
        Normalizer::new(Language::French)
    }

    #[test]
    fn test_lowercase_and_accents() {
        let n = french();
        assert_eq!(n.normalize("Désertification Sécheresse"), "desertification secheresse");
    }

    #[test]
    fn test_markup_stripped() {
        let n = french();
        assert_eq!(
            n.normalize("<p>Accord <strong>mondial</strong></p>"),
            "accord mondial"
        );
    }

    #[test]
    fn test_punctuation_and_digits_removed() {
        let n = french();
        assert_eq!(n.normalize("Croissance: 2,4% en 2024!"), "croissance");
    }

    #[test]
    fn test_stopwords_removed() {
        let n = french();
        let out = n.normalize("Le chat mange la souris");
        assert_eq!(out, "chat mange souris");
    }

    #[test]
    fn test_trailing_period_is_irrelevant() {
        let n = french();
        assert_eq!(
            n.normalize("Le chat mange la souris"),
            n.normalize("Le chat mange la souris.")
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        let n = french();
        let out = n.normalize("  chat \t mange\n\n souris  ");
        assert_eq!(out, "chat mange souris");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(french().normalize(""), "");
    }

    #[test]
    fn test_output_alphabet() {
        let n = french();
        let out = n.normalize("Inflation à 4 % — <em>déficit</em> record, selon l'INSEE.\n");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
    }

    #[test]
    fn test_idempotent() {
        let n = french();
        let once = n.normalize("Le Président annonce une <b>réforme</b> majeure ; détails à suivre.");
        let twice = n.normalize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_fold_strips_diacritics() {
        assert_eq!(fold_to_ascii_letters("était"), "etait");
        assert_eq!(fold_to_ascii_letters("Où"), "ou");
    }

    #[test]
    fn test_stopword_set_is_folded() {
        // Accented stopwords must be stored in their stripped form, or they
        // could never match tokens coming out of the character pipeline.
        let n = french();
        assert!(n
            .stopwords
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_english_stopwords() {
        let n = Normalizer::new(Language::English);
        assert_eq!(n.normalize("The cat eats the mouse"), "cat eats mouse");
    }

    #[test]
    fn test_unclosed_tag_stripped_to_end() {
        let n = french();
        assert_eq!(n.normalize("accord <a href=brok"), "accord");
    }
}
