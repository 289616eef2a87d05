//! Text normalization ahead of vectorization.
//!
//! Output is a space-joined stream of lowercase lemmas in source order, with
//! English stop words removed and duplicates retained. Empty output is valid.

use crate::prediction::lemmatizer::lemmatize;
use crate::prediction::stopwords::is_stop_word;

/// Collapses whitespace runs to single spaces and drops non-ASCII characters.
///
/// Shared with resume field extraction, which works on the same cleaned text.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(char::is_ascii)
        .collect()
}

/// Normalizes extracted resume text into the form the vectorizer was fit on.
pub fn normalize(raw: &str) -> String {
    let letters_only: String = clean_text(raw)
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c.to_ascii_lowercase() } else { ' ' })
        .collect();

    letters_only
        .split_whitespace()
        .filter(|token| !is_stop_word(token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_SUMMARY: &str = "Experienced Python developer skilled in Django, REST APIs, \
        and PostgreSQL, 5 years in backend engineering";

    #[test]
    fn test_backend_summary_keeps_content_lemmas() {
        let normalized = normalize(BACKEND_SUMMARY);
        assert_eq!(
            normalized,
            "experience python developer skill django rest api postgresql year backend engineer"
        );
        let tokens: Vec<&str> = normalized.split(' ').collect();
        for expected in ["python", "django", "rest", "api", "postgresql", "backend", "engineer"] {
            assert!(tokens.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_clean_text_collapses_whitespace_and_strips_non_ascii() {
        assert_eq!(clean_text("  Jos\u{e9}\tGarc\u{ed}a\n\nML  "), "Jos Garca ML");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_digits_and_punctuation_become_separators() {
        assert_eq!(normalize("C++/Java;SQL-2019"), "c java sql");
    }

    #[test]
    fn test_non_ascii_letters_are_dropped_not_split() {
        // "caf\u{e9}" loses the accented letter before tokenization.
        assert_eq!(normalize("caf\u{e9} latte"), "caf latte");
    }

    #[test]
    fn test_token_order_and_duplicates_are_preserved() {
        assert_eq!(normalize("Java java JAVA python Java"), "java java java python java");
    }

    #[test]
    fn test_only_stop_words_yields_empty_string() {
        assert_eq!(normalize("The and of, in -- 42!"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalizing_twice_is_a_fixed_point() {
        let inputs = [
            BACKEND_SUMMARY,
            "Managed teams running large-scale data pipelines; built dashboards for analysts.",
            "Led hiring of 12 engineers. Taught workshops on testing and deployment.",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "{input}");
        }
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let a = normalize(BACKEND_SUMMARY);
        let b = normalize(BACKEND_SUMMARY);
        assert_eq!(a, b);
    }
}
