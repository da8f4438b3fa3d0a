//! Per-turn response contract and data snapshot.
//!
//! The engine answers every `process` call with a [`Payload`]: the
//! messages to render, what kind of input to collect next, and a
//! public-safe [`Snapshot`] of everything gathered so far.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::profile::{BodyProfile, Mode, Occasion, ProfileData};

/// What kind of input the presentation layer should collect next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Expect {
    /// Free text input.
    #[default]
    Text,
    /// One of the listed choices (free text is still re-validated).
    Choice,
}

/// Structured response for one conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Messages to render, in order.
    pub messages: Vec<String>,
    /// Wire name of the current stage.
    pub stage: String,
    /// Which input widget to show.
    pub expect: Expect,
    /// Choices to offer; empty unless `expect` is `Choice`.
    pub choices: Vec<String>,
    /// True once the flow has finished; stop collecting input.
    pub done: bool,
    /// True exactly once, on the transition into the terminal stage.
    pub show_summary: bool,
    /// Snapshot of the collected data.
    pub data: Snapshot,
}

/// Normalized shadow copies, exposed for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanDebug {
    pub style_clean: Option<String>,
    pub outfit_items_list_clean: Vec<String>,
    pub single_item_type_clean: Option<String>,
    pub wardrobe_items_to_match_clean: Option<String>,
    pub descriptions_clean: BTreeMap<String, String>,
}

/// Public-safe view of the collected profile.
///
/// Absent answers render as `null`/empty rather than being omitted, so a
/// consumer can rely on the shape at every stage. The summary and the
/// clean-debug block are the exceptions: they appear only when populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: Option<Mode>,
    pub style: Option<String>,
    pub occasion: Option<Occasion>,
    pub outfit_items: Vec<String>,
    pub single_item_type: Option<String>,
    pub match_existing: Option<bool>,
    pub wardrobe_items_to_match: Option<String>,
    pub descriptions: BTreeMap<String, String>,
    pub body: BodyProfile,
    /// Human-readable summary, set at completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_summary: Option<String>,
    /// Normalized shadow fields, set at completion or when the
    /// clean-debug flag is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_debug: Option<CleanDebug>,
}

impl Snapshot {
    /// Builds a snapshot of the given profile.
    ///
    /// `at_complete` adds the user summary and (like `debug_clean`) the
    /// normalized shadow block.
    pub fn of(data: &ProfileData, at_complete: bool, debug_clean: bool) -> Self {
        let user_summary = at_complete.then(|| build_user_summary(data));
        let clean_debug = (at_complete || debug_clean).then(|| CleanDebug {
            style_clean: data.style_clean.clone(),
            outfit_items_list_clean: data.outfit_items_list_clean.clone(),
            single_item_type_clean: data.single_item_type_clean.clone(),
            wardrobe_items_to_match_clean: data.wardrobe_items_to_match_clean.clone(),
            descriptions_clean: data.descriptions_clean.clone(),
        });

        Self {
            mode: data.mode,
            style: data.style.clone(),
            occasion: data.occasion,
            outfit_items: data.outfit_items_list.clone(),
            single_item_type: data.single_item_type.clone(),
            match_existing: data.match_existing,
            wardrobe_items_to_match: data.wardrobe_items_to_match.clone(),
            descriptions: data.descriptions.clone(),
            body: data.body.clone(),
            user_summary,
            clean_debug,
        }
    }
}

/// Composes the human-readable completion summary from whichever fields
/// are populated.
fn build_user_summary(data: &ProfileData) -> String {
    let mut parts: Vec<String> = Vec::new();
    let style = data.style.as_deref().unwrap_or_default();

    match data.mode {
        Some(Mode::Outfit) => {
            parts.push(format!("Looking for: A complete {style} outfit"));
            if !data.outfit_items_list.is_empty() {
                parts.push(format!("Items: {}", data.outfit_items_list.join(", ")));
            }
            if let Some(occasion) = data.occasion {
                parts.push(format!("Occasion: {} wear", occasion.label()));
            }
        }
        Some(Mode::Item) => {
            let item = data.single_item_type.as_deref().unwrap_or_default();
            parts.push(format!("Looking for: A {style} {item}"));
            if data.match_existing == Some(true) {
                if let Some(wardrobe) = &data.wardrobe_items_to_match {
                    parts.push(format!("To match with: {wardrobe}"));
                }
            }
        }
        None => {}
    }

    let mut measurements: Vec<String> = Vec::new();
    if let Some(height) = data.body.height_cm {
        measurements.push(format!("{}cm", height.trunc() as i64));
    }
    if let Some(weight) = data.body.weight_kg {
        measurements.push(format!("{}kg", weight.trunc() as i64));
    }
    if let Some(age) = data.body.age {
        measurements.push(format!("{age} years old"));
    }
    if !measurements.is_empty() {
        parts.push(format!("Profile: {}", measurements.join(" \u{2022} ")));
    }

    parts.join("\n")
}
