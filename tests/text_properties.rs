//! Property tests for normalization and description cleaning.
//!
//! These pin down the invariants the engine relies on: normalization is
//! idempotent, and cleaning never invents tokens, never drops fashion
//! terms, and never lets a stopword through.

use proptest::prelude::*;

use stylist_intake::domain::text::{clean_description, normalize, tokenize};
use stylist_intake::domain::vocabulary::{DOMAIN_TERMS, STOPWORDS};

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".*") {
        let once = normalize(&s);
        let twice = normalize(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn normalized_text_has_no_leading_or_doubled_whitespace(s in ".*") {
        let normalized = normalize(&s);
        prop_assert_eq!(normalized.trim(), normalized.as_str());
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn clean_description_never_invents_tokens(s in ".*") {
        let input_tokens = tokenize(&s);
        for token in tokenize(&clean_description(&s)) {
            prop_assert!(
                input_tokens.contains(&token),
                "token {:?} not present in input",
                token
            );
        }
    }

    #[test]
    fn clean_description_preserves_domain_terms(s in "[a-z ,.-]{0,60}") {
        let cleaned_tokens = tokenize(&clean_description(&s));
        for token in tokenize(&s) {
            if DOMAIN_TERMS.contains(token.as_str()) {
                prop_assert!(
                    cleaned_tokens.contains(&token),
                    "domain term {:?} was dropped",
                    token
                );
            }
        }
    }

    #[test]
    fn clean_description_removes_every_stopword(s in ".*") {
        for token in tokenize(&clean_description(&s)) {
            prop_assert!(!STOPWORDS.contains(token.as_str()));
        }
    }
}

#[test]
fn cleaning_a_realistic_description_keeps_the_content_words() {
    let cleaned = clean_description("I would like a pair of dark blue jeans with a slim fit");
    assert_eq!(cleaned, "would like pair dark blue jeans slim fit");
}
