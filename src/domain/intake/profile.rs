//! Collected shopping profile.
//!
//! The mutable record of everything a session has gathered so far. Fields
//! accumulate monotonically: answers are only ever set, never cleared
//! (the single-item pivot may overwrite `mode`, which is deliberate).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;

/// Whether the user shops for a complete outfit or a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Outfit,
    Item,
}

impl Mode {
    /// Parses a user answer, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "outfit" => Some(Self::Outfit),
            "item" => Some(Self::Item),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outfit => "outfit",
            Self::Item => "item",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an outfit is for a specific occasion or daily wear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Specific,
    Daily,
}

impl Occasion {
    /// Parses a user answer, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "specific" => Some(Self::Specific),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Specific => "specific",
            Self::Daily => "daily",
        }
    }

    /// Title-cased label for the completion summary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Specific => "Specific",
            Self::Daily => "Daily",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements collected in the common tail of the flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub age: Option<u32>,
}

impl BodyProfile {
    /// True if no measurement has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.height_cm.is_none() && self.weight_kg.is_none() && self.age.is_none()
    }
}

/// Everything collected across one conversation.
///
/// Raw answers stay canonical for display; the `*_clean` fields hold the
/// normalized/stopword-filtered shadow copies for downstream retrieval.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    // Shared
    pub mode: Option<Mode>,
    pub style: Option<String>,

    // Outfit-specific
    pub outfit_items_raw: Option<String>,
    pub outfit_items_list: Vec<String>,
    pub outfit_items_pending: VecDeque<String>,
    pub current_item: Option<String>,
    pub occasion: Option<Occasion>,

    // Item-specific
    pub single_item_type: Option<String>,
    pub match_existing: Option<bool>,
    pub wardrobe_items_to_match: Option<String>,

    // Details and body info
    pub descriptions: BTreeMap<String, String>,
    pub body: BodyProfile,

    // Normalized shadow copies
    pub style_clean: Option<String>,
    pub outfit_items_list_clean: Vec<String>,
    pub single_item_type_clean: Option<String>,
    pub wardrobe_items_to_match_clean: Option<String>,
    pub descriptions_clean: BTreeMap<String, String>,
}

impl ProfileData {
    /// Stores the raw and cleaned description for one item.
    pub fn record_description(&mut self, item: &str, raw: &str, clean: &str) {
        self.descriptions.insert(item.to_owned(), raw.to_owned());
        self.descriptions_clean.insert(item.to_owned(), clean.to_owned());
    }

    /// True once every listed outfit item has a matching description.
    pub fn outfit_descriptions_complete(&self) -> bool {
        self.outfit_items_pending.is_empty()
            && self
                .outfit_items_list
                .iter()
                .all(|item| self.descriptions.contains_key(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod mode {
        use super::*;

        #[test]
        fn parses_case_insensitively() {
            assert_eq!(Mode::parse("OUTFIT"), Some(Mode::Outfit));
            assert_eq!(Mode::parse("Item"), Some(Mode::Item));
        }

        #[test]
        fn rejects_unknown_answers() {
            assert_eq!(Mode::parse("both"), None);
            assert_eq!(Mode::parse(""), None);
        }

        #[test]
        fn serializes_to_snake_case() {
            assert_eq!(serde_json::to_string(&Mode::Outfit).unwrap(), "\"outfit\"");
        }
    }

    mod occasion {
        use super::*;

        #[test]
        fn parses_case_insensitively() {
            assert_eq!(Occasion::parse("SPECIFIC"), Some(Occasion::Specific));
            assert_eq!(Occasion::parse("daily"), Some(Occasion::Daily));
        }

        #[test]
        fn label_is_title_cased() {
            assert_eq!(Occasion::Daily.label(), "Daily");
        }
    }

    mod profile_data {
        use super::*;

        #[test]
        fn starts_empty() {
            let data = ProfileData::default();
            assert!(data.mode.is_none());
            assert!(data.descriptions.is_empty());
            assert!(data.body.is_empty());
        }

        #[test]
        fn record_description_fills_both_maps() {
            let mut data = ProfileData::default();
            data.record_description("jeans", "Dark blue, slim", "dark blue slim");
            assert_eq!(data.descriptions["jeans"], "Dark blue, slim");
            assert_eq!(data.descriptions_clean["jeans"], "dark blue slim");
        }

        #[test]
        fn outfit_descriptions_complete_requires_drained_queue() {
            let mut data = ProfileData::default();
            data.outfit_items_list = vec!["jeans".into(), "blazer".into()];
            data.outfit_items_pending = VecDeque::from(vec!["blazer".to_string()]);
            data.record_description("jeans", "blue", "blue");
            assert!(!data.outfit_descriptions_complete());

            data.outfit_items_pending.clear();
            data.record_description("blazer", "black", "black");
            assert!(data.outfit_descriptions_complete());
        }
    }
}
