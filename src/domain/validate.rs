//! Input validation predicates.
//!
//! Pure functions over raw answer text, parameterized by the domain
//! vocabulary. The engine consults these to decide whether a stage accepts
//! an answer; none of them mutate anything.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::text::{tokenize, tokenize_hyphenated};
use super::vocabulary::{DOMAIN_HINTS, ITEM_TYPE_TOKENS};

static CONJUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(and|&|plus)\b").unwrap());

/// Parses the text as a floating-point number.
///
/// Empty or whitespace-only text is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// True if the text parses as a floating-point number.
pub fn is_number(text: &str) -> bool {
    parse_number(text).is_some()
}

/// True if the text is a plain unsigned integer (ASCII digits only).
pub fn is_integer(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Parses the text as an unsigned integer; digit strings too large to
/// represent yield `None`.
pub fn parse_integer(text: &str) -> Option<u32> {
    if !is_integer(text) {
        return None;
    }
    text.trim().parse().ok()
}

/// True if the text contains at least one alphabetic character.
pub fn has_letters(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// True if the text contains a joining word ("and", "&", "plus") that
/// usually signals several items mashed into one chunk.
pub fn has_conjunction(text: &str) -> bool {
    CONJUNCTION.is_match(text)
}

/// Distinct tokens from both hyphen-preserving and hyphen-splitting
/// tokenization, so compound terms like "off-white" match either way.
fn combined_token_set(text: &str) -> HashSet<String> {
    tokenize_hyphenated(text)
        .into_iter()
        .chain(tokenize(text))
        .collect()
}

/// True if the text contains at least `min_hits` known item-type tokens.
pub fn has_item_type_token(text: &str, min_hits: usize) -> bool {
    if text.is_empty() {
        return false;
    }
    let hits = combined_token_set(text)
        .iter()
        .filter(|t| ITEM_TYPE_TOKENS.contains(t.as_str()))
        .count();
    hits >= min_hits
}

/// True if the text contains at least `min_hits` known fashion terms.
pub fn has_domain_words(text: &str, min_hits: usize) -> bool {
    if text.is_empty() {
        return false;
    }
    let hits = combined_token_set(text)
        .iter()
        .filter(|t| DOMAIN_HINTS.contains(t.as_str()))
        .count();
    hits >= min_hits
}

/// Strict style check: the text must contain at least one fashion domain
/// term, keeping outfit and item modes consistent.
pub fn looks_meaningful_style(text: &str) -> bool {
    has_domain_words(text, 1)
}

/// Number of distinct item-type tokens under hyphen-preserving
/// tokenization. Drives the single-item pivot and the multi-item check.
pub fn item_type_hits(text: &str) -> usize {
    tokenize_hyphenated(text)
        .into_iter()
        .collect::<HashSet<_>>()
        .iter()
        .filter(|t| ITEM_TYPE_TOKENS.contains(t.as_str()))
        .count()
}

/// A comma chunk is suspicious when it carries a conjunction or names two
/// or more distinct item types without a separating comma.
pub fn chunk_is_suspicious(chunk: &str) -> bool {
    has_conjunction(chunk) || item_type_hits(chunk) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;

    mod is_number {
        use super::*;

        #[test]
        fn accepts_integers_and_floats() {
            assert!(is_number("175"));
            assert!(is_number("70.5"));
            assert!(is_number(" 28 "));
        }

        #[test]
        fn rejects_words_and_empty() {
            assert!(!is_number("tall"));
            assert!(!is_number(""));
            assert!(!is_number("   "));
        }

        #[test]
        fn parse_number_returns_the_value() {
            assert_eq!(parse_number("175"), Some(175.0));
            assert_eq!(parse_number("abc"), None);
        }
    }

    mod integers {
        use super::*;

        #[test]
        fn accepts_digit_strings_only() {
            assert!(is_integer("28"));
            assert!(!is_integer("28.5"));
            assert!(!is_integer("-28"));
            assert!(!is_integer("twenty"));
            assert!(!is_integer(""));
        }

        #[test]
        fn parse_integer_rejects_overflow() {
            assert_eq!(parse_integer("28"), Some(28));
            assert_eq!(parse_integer("99999999999999999999"), None);
        }
    }

    mod conjunctions {
        use super::*;

        #[test]
        fn detects_and_plus() {
            assert!(has_conjunction("jeans and hoodie"));
            assert!(has_conjunction("jeans PLUS hoodie"));
        }

        #[test]
        fn ignores_words_containing_and() {
            assert!(!has_conjunction("sandals"));
            assert!(!has_conjunction("brand"));
        }
    }

    mod item_tokens {
        use super::*;

        #[test]
        fn matches_hyphenated_item_names() {
            assert!(has_item_type_token("t-shirt", 1));
            assert!(has_item_type_token("flip-flops", 1));
        }

        #[test]
        fn counts_distinct_items_only_once() {
            assert_eq!(item_type_hits("hat hat hat"), 1);
            assert_eq!(item_type_hits("t-shirt hat"), 2);
        }

        #[test]
        fn rejects_unknown_words() {
            assert!(!has_item_type_token("spaceship", 1));
            assert!(!has_item_type_token("", 1));
        }
    }

    mod domain_words {
        use super::*;

        #[test]
        fn style_terms_are_meaningful() {
            assert!(looks_meaningful_style("casual"));
            assert!(looks_meaningful_style("smart business look"));
        }

        #[test]
        fn off_topic_text_is_not_meaningful() {
            assert!(!looks_meaningful_style("quantum physics"));
            assert!(!looks_meaningful_style(""));
        }

        #[test]
        fn min_hits_threshold_applies() {
            assert!(has_domain_words("navy slim cotton", 3));
            assert!(!has_domain_words("navy only please", 3));
        }
    }

    mod suspicious_chunks {
        use super::*;

        #[test]
        fn conjunction_is_suspicious() {
            assert!(chunk_is_suspicious("jeans and hoodie"));
        }

        #[test]
        fn two_item_types_are_suspicious() {
            assert!(chunk_is_suspicious("t-shirt hat"));
        }

        #[test]
        fn single_item_with_adjectives_is_fine() {
            assert!(!chunk_is_suspicious("dark slim jeans"));
            assert!(!chunk_is_suspicious("white t-shirt"));
        }
    }
}
