//! Dialogue stage machine.
//!
//! Each stage is one position in the guided conversation. A stage has one
//! handler and at most two legal successors; `Complete` is terminal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// One position in the intake conversation.
///
/// The flow forks after `ModeStyle` depending on whether the user wants a
/// whole outfit or a single item, and rejoins for the body measurements:
/// - outfit: `OutfitItems` → `OutfitOccasion` → `OutfitItemDesc` (loop)
/// - item: `ItemType` → `ItemMatchWardrobe` → (`ItemWardrobeItems` →)
///   `ItemDesc`
/// - tail: `BodyHeight` → `BodyWeight` → `BodyAge` → `Complete`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Fresh session; consumed by the bootstrap call, which ignores input.
    #[default]
    Start,

    /// Choosing between a complete outfit and a single item.
    ModeSelection,

    /// Free-text style or mood for the selected mode.
    ModeStyle,

    /// Comma-separated list of outfit items.
    OutfitItems,

    /// Specific occasion vs daily wear.
    OutfitOccasion,

    /// Per-item description loop over the pending outfit items.
    OutfitItemDesc,

    /// Type of the single item (e.g. "jacket").
    ItemType,

    /// Whether the item should match the existing wardrobe.
    ItemMatchWardrobe,

    /// Which wardrobe items the new item should match.
    ItemWardrobeItems,

    /// Free-text description of the single item.
    ItemDesc,

    /// Height in centimeters.
    BodyHeight,

    /// Weight in kilograms.
    BodyWeight,

    /// Age in years.
    BodyAge,

    /// Terminal stage; the session no longer accepts answers.
    Complete,
}

impl Stage {
    /// Stable wire name of the stage, as carried in the payload.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::ModeSelection => "MODE_SELECTION",
            Self::ModeStyle => "MODE_STYLE",
            Self::OutfitItems => "OUTFIT_ITEMS",
            Self::OutfitOccasion => "OUTFIT_OCCASION",
            Self::OutfitItemDesc => "OUTFIT_ITEM_DESC",
            Self::ItemType => "ITEM_TYPE",
            Self::ItemMatchWardrobe => "ITEM_MATCH_WARDROBE",
            Self::ItemWardrobeItems => "ITEM_WARDROBE_ITEMS",
            Self::ItemDesc => "ITEM_DESC",
            Self::BodyHeight => "BODY_HEIGHT",
            Self::BodyWeight => "BODY_WEIGHT",
            Self::BodyAge => "BODY_AGE",
            Self::Complete => "COMPLETE",
        }
    }
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            (Start, ModeSelection) |
            (ModeSelection, ModeStyle) |
            // Fork on the selected mode
            (ModeStyle, OutfitItems) |
            (ModeStyle, ItemType) |
            (OutfitItems, OutfitOccasion) |
            // Single-item pivot: a lone recognizable item redirects the
            // outfit flow into the single-item flow
            (OutfitItems, ItemMatchWardrobe) |
            (OutfitOccasion, OutfitItemDesc) |
            // Description loop continues while items remain pending
            (OutfitItemDesc, OutfitItemDesc) |
            (OutfitItemDesc, BodyHeight) |
            (ItemType, ItemMatchWardrobe) |
            (ItemMatchWardrobe, ItemWardrobeItems) |
            (ItemMatchWardrobe, ItemDesc) |
            (ItemWardrobeItems, ItemDesc) |
            (ItemDesc, BodyHeight) |
            // Common tail
            (BodyHeight, BodyWeight) |
            (BodyWeight, BodyAge) |
            (BodyAge, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Start => vec![ModeSelection],
            ModeSelection => vec![ModeStyle],
            ModeStyle => vec![OutfitItems, ItemType],
            OutfitItems => vec![OutfitOccasion, ItemMatchWardrobe],
            OutfitOccasion => vec![OutfitItemDesc],
            OutfitItemDesc => vec![OutfitItemDesc, BodyHeight],
            ItemType => vec![ItemMatchWardrobe],
            ItemMatchWardrobe => vec![ItemWardrobeItems, ItemDesc],
            ItemWardrobeItems => vec![ItemDesc],
            ItemDesc => vec![BodyHeight],
            BodyHeight => vec![BodyWeight],
            BodyWeight => vec![BodyAge],
            BodyAge => vec![Complete],
            Complete => vec![],
        }
    }
}
