//! Text normalization and tokenization.
//!
//! Pure helpers shared by the validators and the intake engine. Raw user
//! text stays canonical for display; these functions only produce the
//! normalized shadow variants and the token streams the validators count.

use once_cell::sync::Lazy;
use regex::Regex;

use super::vocabulary::STOPWORDS;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-zA-Z]+").unwrap());
static NON_ALNUM_KEEP_HYPHEN_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9a-zA-Z-]+").unwrap());

/// Lowercases, trims, and collapses internal whitespace runs to one space.
///
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    WHITESPACE_RUN.replace_all(&lowered, " ").into_owned()
}

/// Splits lowercased text on runs of non-alphanumeric characters,
/// dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_ALNUM_RUN
        .split(&lowered)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Like [`tokenize`] but hyphens survive inside tokens, so compound terms
/// such as "off-white" or "full-length" stay whole.
pub fn tokenize_hyphenated(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_ALNUM_KEEP_HYPHEN_RUN
        .split(&lowered)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Removes general stopwords from free text while preserving fashion
/// terms, rejoining the survivors with single spaces.
///
/// Produces the `*_clean` shadow fields; the raw text remains canonical.
pub fn clean_description(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalize {
        use super::*;

        #[test]
        fn lowercases_and_trims() {
            assert_eq!(normalize("  Navy Blue  "), "navy blue");
        }

        #[test]
        fn collapses_whitespace_runs() {
            assert_eq!(normalize("slim \t  fit\n jeans"), "slim fit jeans");
        }

        #[test]
        fn is_idempotent() {
            let once = normalize("  Dark   WASH  Denim ");
            assert_eq!(normalize(&once), once);
        }

        #[test]
        fn empty_input_stays_empty() {
            assert_eq!(normalize("   "), "");
        }
    }

    mod tokenize {
        use super::*;

        #[test]
        fn splits_on_punctuation_and_hyphens() {
            assert_eq!(tokenize("t-shirt, jeans!"), vec!["t", "shirt", "jeans"]);
        }

        #[test]
        fn drops_empty_tokens() {
            assert_eq!(tokenize("...  ,,"), Vec::<String>::new());
        }

        #[test]
        fn hyphenated_variant_keeps_compounds() {
            assert_eq!(tokenize_hyphenated("off-white t-shirt"), vec!["off-white", "t-shirt"]);
        }

        #[test]
        fn hyphenated_variant_still_splits_other_punctuation() {
            assert_eq!(tokenize_hyphenated("navy, slim-fit"), vec!["navy", "slim-fit"]);
        }
    }

    mod clean_description {
        use super::*;

        #[test]
        fn drops_stopwords_keeps_content() {
            assert_eq!(clean_description("I want a blue shirt"), "want blue shirt");
        }

        #[test]
        fn preserves_domain_terms_that_are_also_stopwords() {
            // "down" is a general stopword but stays as a fill material
            assert_eq!(clean_description("a down jacket"), "down jacket");
        }

        #[test]
        fn never_invents_tokens() {
            let input = "soft warm merino wool";
            let cleaned = clean_description(input);
            let input_tokens = tokenize(input);
            for token in tokenize(&cleaned) {
                assert!(input_tokens.contains(&token));
            }
        }
    }
}
