//! Session controller.
//!
//! Owns the current stage and the collected profile for one conversation,
//! dispatches each turn to the handler for the current stage, and builds
//! the outbound payload. Rejected input never advances the stage; it only
//! re-prompts. There are no user-facing errors: the only fallible path is
//! an internal invariant violation, surfaced as an [`EngineFault`].

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::intake::payload::{Expect, Payload, Snapshot};
use crate::domain::intake::profile::{Mode, Occasion, ProfileData};
use crate::domain::intake::stage::Stage;
use crate::domain::text;
use crate::domain::validate;
use crate::ports::{NoopTranscriptSink, TranscriptSink};

/// Internal invariant violations.
///
/// These indicate a programming defect, not bad user input; they are
/// never produced by a well-formed conversation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineFault {
    #[error("invalid stage transition from {from:?} to {to:?}")]
    InvalidTransition { from: Stage, to: Stage },

    #[error("no mode recorded while handling {stage:?}")]
    MissingMode { stage: Stage },

    #[error("no current item while handling {stage:?}")]
    MissingCurrentItem { stage: Stage },

    #[error("no item type recorded while handling {stage:?}")]
    MissingItemType { stage: Stage },

    #[error("item queue empty while handling {stage:?}")]
    EmptyItemQueue { stage: Stage },
}

/// Stateful conversation manager.
///
/// Create one `Session` per user and call [`Session::process`] for each
/// reply. Pass `None` (or an empty string) to begin the conversation; on
/// subsequent calls pass the user's text or the selected choice.
pub struct Session {
    id: SessionId,
    stage: Stage,
    data: ProfileData,
    transcript: Arc<dyn TranscriptSink>,
    debug_clean: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with transcript logging disabled.
    pub fn new() -> Self {
        Self::with_transcript(Arc::new(NoopTranscriptSink))
    }

    /// Creates a session that records its turns to the given sink.
    pub fn with_transcript(transcript: Arc<dyn TranscriptSink>) -> Self {
        Self {
            id: SessionId::new(),
            stage: Stage::Start,
            data: ProfileData::default(),
            transcript,
            debug_clean: false,
        }
    }

    /// Includes the normalized shadow fields in every snapshot, not just
    /// at completion.
    pub fn enable_clean_debug(&mut self, enabled: bool) {
        self.debug_clean = enabled;
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn data(&self) -> &ProfileData {
        &self.data
    }

    /// Advances the conversation and returns the payload to render.
    ///
    /// Input is trimmed before any handler sees it; absent or empty input
    /// counts as "no answer given". While the session is complete this
    /// returns a fixed terminal payload and mutates nothing.
    pub fn process(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let input = input.map(str::trim).filter(|s| !s.is_empty());

        self.transcript.record(&format!(
            ">> session={} | stage={} | input={:?}",
            self.id,
            self.stage.wire_name(),
            input
        ));

        let payload = match self.stage {
            Stage::Start => self.enter_mode_selection(),
            Stage::ModeSelection => self.handle_mode_selection(input),
            Stage::ModeStyle => self.handle_mode_style(input),
            Stage::OutfitItems => self.handle_outfit_items(input),
            Stage::OutfitOccasion => self.handle_outfit_occasion(input),
            Stage::OutfitItemDesc => self.handle_outfit_item_desc(input),
            Stage::ItemType => self.handle_item_type(input),
            Stage::ItemMatchWardrobe => self.handle_item_match(input),
            Stage::ItemWardrobeItems => self.handle_item_wardrobe_items(input),
            Stage::ItemDesc => self.handle_item_desc(input),
            Stage::BodyHeight => self.handle_body_height(input),
            Stage::BodyWeight => self.handle_body_weight(input),
            Stage::BodyAge => self.handle_body_age(input),
            Stage::Complete => Ok(self.build_payload(
                vec!["Session complete.".into()],
                Expect::Text,
                Vec::new(),
                true,
                false,
            )),
        }?;

        self.record_outbound(&payload);
        Ok(payload)
    }

    // ---- Stage handlers --------------------------------------------------

    /// Bootstrap: greet and ask for the mode, ignoring any input.
    fn enter_mode_selection(&mut self) -> Result<Payload, EngineFault> {
        self.advance(Stage::ModeSelection)?;
        Ok(self.choice_prompt(
            vec![
                "Hi, I'm your shopping assistant.".into(),
                "Are you looking for a complete outfit or a specific item?".into(),
            ],
            vec!["outfit".into(), "item".into()],
        ))
    }

    fn handle_mode_selection(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(mode) = input.and_then(Mode::parse) else {
            return Ok(self.choice_prompt(
                vec!["Please choose: 'outfit' or 'item'.".into()],
                vec!["outfit".into(), "item".into()],
            ));
        };

        self.data.mode = Some(mode);
        self.advance(Stage::ModeStyle)?;
        let message = match mode {
            Mode::Outfit => {
                "Great! Let's find you an outfit. What is the style or mood you're looking for?"
            }
            Mode::Item => "Awesome! What is the style or mood you're looking for?",
        };
        Ok(self.text_prompt(vec![message.into()]))
    }

    fn handle_mode_style(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(style) = input else {
            return Ok(self.text_prompt(vec!["Please describe a style or mood.".into()]));
        };
        if !validate::has_letters(style) {
            return Ok(self.text_prompt(vec![
                "Please describe a style or mood with words (not just numbers).".into(),
            ]));
        }
        if !validate::looks_meaningful_style(style) {
            return Ok(self.text_prompt(vec![
                "That doesn't look like a fashion style. Try terms like 'casual', 'smart', 'minimal', 'streetwear'."
                    .into(),
            ]));
        }

        self.data.style = Some(style.to_owned());
        self.data.style_clean = Some(text::normalize(style));

        match self.data.mode {
            Some(Mode::Outfit) => {
                self.advance(Stage::OutfitItems)?;
                Ok(self.text_prompt(vec![
                    format!("Got it! You're looking for a {style} outfit."),
                    "What clothing items do you want to include?".into(),
                    "Please separate items with commas (e.g., 'jeans, t-shirt, blazer').".into(),
                ]))
            }
            Some(Mode::Item) => {
                self.advance(Stage::ItemType)?;
                Ok(self.text_prompt(vec![
                    format!("Got it! You're looking for a {style} item."),
                    "What type of item is it? (e.g. 'jacket', 'sneakers')".into(),
                ]))
            }
            None => Err(EngineFault::MissingMode { stage: self.stage }),
        }
    }

    // ---- Outfit path -----------------------------------------------------

    fn handle_outfit_items(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(answer) = input else {
            return Ok(self.text_prompt(vec![
                "List the clothing items separated by commas.".into(),
            ]));
        };

        if !answer.contains(',') {
            return self.handle_single_outfit_chunk(answer);
        }

        let chunks: Vec<&str> = answer
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        // Catch several items mashed into one chunk ("t-shirt hat",
        // "jeans and hoodie") before validating item names.
        if chunks.iter().any(|c| validate::chunk_is_suspicious(c)) {
            return Ok(self.text_prompt(vec![
                "It looks like multiple items are in the same part. Please put each item in its own comma-separated entry."
                    .into(),
                "Example: 'jeans, t-shirt, blazer' (not 't-shirt hat').".into(),
            ]));
        }

        let invalid: Vec<&str> = chunks
            .iter()
            .copied()
            .filter(|c| !validate::has_item_type_token(c, 1))
            .collect();
        if !invalid.is_empty() {
            return Ok(self.text_prompt(vec![
                format!("I couldn't find a clothing item in: {}.", invalid.join(", ")),
                "Use item names like 'jeans, t-shirt, blazer'.".into(),
            ]));
        }

        if chunks.is_empty() {
            return Ok(self.text_prompt(vec![
                "I couldn't parse any items. Try something like: jeans, white t-shirt, blazer"
                    .into(),
            ]));
        }

        let items: Vec<String> = chunks.iter().map(|c| (*c).to_owned()).collect();
        self.data.outfit_items_raw = Some(answer.to_owned());
        self.data.outfit_items_list = items.clone();
        self.data.outfit_items_list_clean = items.iter().map(|i| text::normalize(i)).collect();
        self.data.outfit_items_pending = items.into();

        self.advance(Stage::OutfitOccasion)?;
        Ok(self.choice_prompt(
            vec![format!(
                "Perfect! You're looking for an outfit with: {}. Is it for a specific occasion or daily wear?",
                self.data.outfit_items_list.join(", ")
            )],
            vec!["specific".into(), "daily".into()],
        ))
    }

    /// A comma-free answer either pivots into the single-item flow or is
    /// sent back for commas. The pivot is a deliberate flow repair: the
    /// whole answer becomes the item and `mode` is overwritten.
    fn handle_single_outfit_chunk(&mut self, chunk: &str) -> Result<Payload, EngineFault> {
        if validate::has_conjunction(chunk) {
            return Ok(self.text_prompt(vec![
                "Please separate items with commas, e.g., 'jeans, t-shirt, blazer'.".into(),
            ]));
        }

        match validate::item_type_hits(chunk) {
            1 => {
                self.data.mode = Some(Mode::Item);
                self.data.single_item_type = Some(chunk.to_owned());
                self.data.single_item_type_clean = Some(text::normalize(chunk));
                self.advance(Stage::ItemMatchWardrobe)?;
                Ok(self.choice_prompt(
                    vec![
                        "Looks like you're after a single item.".into(),
                        format!("Item: {chunk}"),
                        "Do you want it to match your current wardrobe? (yes/no)".into(),
                    ],
                    vec!["yes".into(), "no".into()],
                ))
            }
            0 => Ok(self.text_prompt(vec![
                "I couldn't recognize a clothing item there. Try a name like 'blazer' or list items with commas: 'jeans, t-shirt, blazer'."
                    .into(),
            ])),
            _ => Ok(self.text_prompt(vec![
                "It looks like multiple items are in the same part. Please separate them with commas, e.g., 'jeans, t-shirt, blazer'."
                    .into(),
            ])),
        }
    }

    fn handle_outfit_occasion(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(occasion) = input.and_then(Occasion::parse) else {
            return Ok(self.choice_prompt(
                vec!["Choose 'specific' or 'daily'.".into()],
                vec!["specific".into(), "daily".into()],
            ));
        };

        self.data.occasion = Some(occasion);
        self.advance(Stage::OutfitItemDesc)?;

        let item = self
            .data
            .outfit_items_pending
            .pop_front()
            .ok_or(EngineFault::EmptyItemQueue { stage: self.stage })?;
        self.data.current_item = Some(item.clone());
        Ok(self.text_prompt(vec![format!("Describe the {item} (color, fit, etc.).")]))
    }

    fn handle_outfit_item_desc(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let item = self
            .data
            .current_item
            .clone()
            .ok_or(EngineFault::MissingCurrentItem { stage: self.stage })?;

        let Some(answer) = input else {
            return Ok(self.text_prompt(vec![format!("Please describe the {item}.")]));
        };
        if !validate::has_domain_words(answer, 1) {
            return Ok(self.text_prompt(vec![format!(
                "Please include fashion details for the {item} (e.g., color, material, fit like 'navy, slim, cotton')."
            )]));
        }

        self.data
            .record_description(&item, answer, &text::clean_description(answer));

        if let Some(next_item) = self.data.outfit_items_pending.pop_front() {
            self.data.current_item = Some(next_item.clone());
            self.advance(Stage::OutfitItemDesc)?;
            return Ok(self.text_prompt(vec![format!(
                "Great. Next item: describe the {next_item}."
            )]));
        }

        self.advance(Stage::BodyHeight)?;
        Ok(self.text_prompt(vec!["Thanks. Lastly, your height (in cm)?".into()]))
    }

    // ---- Single item path ------------------------------------------------

    fn handle_item_type(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(answer) = input else {
            return Ok(self.text_prompt(vec!["What type of item is it?".into()]));
        };
        if !validate::has_item_type_token(answer, 1) {
            return Ok(self.text_prompt(vec![
                "Please name a clothing item (e.g., 'jacket', 'sneakers', 'jeans').".into(),
            ]));
        }

        self.data.single_item_type = Some(answer.to_owned());
        self.data.single_item_type_clean = Some(text::normalize(answer));
        self.advance(Stage::ItemMatchWardrobe)?;
        Ok(self.choice_prompt(
            vec!["Do you want it to match your current wardrobe? (yes/no)".into()],
            vec!["yes".into(), "no".into()],
        ))
    }

    fn handle_item_match(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let match_existing = match input.map(str::to_lowercase).as_deref() {
            Some("yes") => true,
            Some("no") => false,
            _ => {
                return Ok(self.choice_prompt(
                    vec!["Please answer 'yes' or 'no'.".into()],
                    vec!["yes".into(), "no".into()],
                ));
            }
        };

        self.data.match_existing = Some(match_existing);
        let item = self
            .data
            .single_item_type
            .clone()
            .ok_or(EngineFault::MissingItemType { stage: self.stage })?;

        if match_existing {
            self.advance(Stage::ItemWardrobeItems)?;
            Ok(self.text_prompt(vec![format!(
                "Which items in your wardrobe would you like to match the {item} with? (e.g. 'dark jeans, white shirt, brown belt')"
            )]))
        } else {
            self.advance(Stage::ItemDesc)?;
            Ok(self.text_prompt(vec![format!(
                "Describe the {item} (color, material, fit, etc.)."
            )]))
        }
    }

    fn handle_item_wardrobe_items(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let item = self
            .data
            .single_item_type
            .clone()
            .ok_or(EngineFault::MissingItemType { stage: self.stage })?;

        let Some(answer) = input else {
            return Ok(self.text_prompt(vec![format!(
                "Please list the wardrobe items you'd like to match the {item} with."
            )]));
        };
        if !validate::has_domain_words(answer, 1) {
            return Ok(self.text_prompt(vec![
                "That looks a bit vague. Please list wardrobe items with fashion terms (e.g., 'dark jeans, white oxford shirt, brown belt')."
                    .into(),
            ]));
        }

        self.data.wardrobe_items_to_match = Some(answer.to_owned());
        self.data.wardrobe_items_to_match_clean = Some(text::normalize(answer));
        self.advance(Stage::ItemDesc)?;
        Ok(self.text_prompt(vec![format!(
            "Great! Now describe the {item} you're looking for that will match with: {answer}"
        )]))
    }

    fn handle_item_desc(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let item = self
            .data
            .single_item_type
            .clone()
            .ok_or(EngineFault::MissingItemType { stage: self.stage })?;

        let Some(answer) = input else {
            return Ok(self.text_prompt(vec![format!("Please describe the {item}.")]));
        };
        if !validate::has_domain_words(answer, 1) {
            return Ok(self.text_prompt(vec![format!(
                "This looks suspicious. Please include fashion details for the {item} (e.g., color, material, fit like 'black leather, slim, cropped')."
            )]));
        }

        self.data
            .record_description(&item, answer, &text::clean_description(answer));
        self.advance(Stage::BodyHeight)?;
        Ok(self.text_prompt(vec!["Height (in cm)?".into()]))
    }

    // ---- Body measurements (common tail) ---------------------------------

    fn handle_body_height(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(height) = input.and_then(validate::parse_number) else {
            return Ok(self.text_prompt(vec!["Enter a numeric height in cm.".into()]));
        };
        if !(100.0..=250.0).contains(&height) {
            return Ok(self.text_prompt(vec![
                "Enter a height between 100 and 250 cm.".into(),
            ]));
        }

        self.data.body.height_cm = Some(height);
        self.advance(Stage::BodyWeight)?;
        Ok(self.text_prompt(vec!["Weight (in kg)?".into()]))
    }

    fn handle_body_weight(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(weight) = input.and_then(validate::parse_number) else {
            return Ok(self.text_prompt(vec!["Enter a numeric weight in kg.".into()]));
        };
        if !(30.0..=300.0).contains(&weight) {
            return Ok(self.text_prompt(vec![
                "Enter a weight between 30 and 300 kg.".into(),
            ]));
        }

        self.data.body.weight_kg = Some(weight);
        self.advance(Stage::BodyAge)?;
        Ok(self.text_prompt(vec!["Age?".into()]))
    }

    fn handle_body_age(&mut self, input: Option<&str>) -> Result<Payload, EngineFault> {
        let Some(answer) = input.filter(|a| validate::is_integer(a)) else {
            return Ok(self.text_prompt(vec!["Enter age as an integer.".into()]));
        };
        let age = match validate::parse_integer(answer) {
            Some(age @ 1..=120) => age,
            _ => {
                return Ok(self.text_prompt(vec!["Enter an age between 1 and 120.".into()]));
            }
        };

        self.data.body.age = Some(age);
        self.advance(Stage::Complete)?;
        Ok(self.build_payload(
            vec![
                "Perfect! I have all the information I need. Generating your personalized recommendations..."
                    .into(),
            ],
            Expect::Text,
            Vec::new(),
            true,
            true,
        ))
    }

    // ---- Helpers ---------------------------------------------------------

    /// Moves to the next stage, validating the transition.
    fn advance(&mut self, next: Stage) -> Result<(), EngineFault> {
        self.stage = self
            .stage
            .transition_to(next)
            .map_err(|_| EngineFault::InvalidTransition {
                from: self.stage,
                to: next,
            })?;
        Ok(())
    }

    fn text_prompt(&self, messages: Vec<String>) -> Payload {
        self.build_payload(messages, Expect::Text, Vec::new(), false, false)
    }

    fn choice_prompt(&self, messages: Vec<String>, choices: Vec<String>) -> Payload {
        self.build_payload(messages, Expect::Choice, choices, false, false)
    }

    fn build_payload(
        &self,
        messages: Vec<String>,
        expect: Expect,
        choices: Vec<String>,
        done: bool,
        show_summary: bool,
    ) -> Payload {
        Payload {
            messages,
            stage: self.stage.wire_name().to_owned(),
            expect,
            choices,
            done,
            show_summary,
            data: Snapshot::of(&self.data, self.stage == Stage::Complete, self.debug_clean),
        }
    }

    fn record_outbound(&self, payload: &Payload) {
        let data = serde_json::to_string(&payload.data)
            .unwrap_or_else(|_| "<unserializable>".to_owned());
        self.transcript.record(&format!(
            "<< session={} | stage={} | expect={:?} | choices={:?} | done={} | show_summary={} | messages={:?} | data={}",
            self.id,
            payload.stage,
            payload.expect,
            payload.choices,
            payload.done,
            payload.show_summary,
            payload.messages,
            data
        ));
    }
}
