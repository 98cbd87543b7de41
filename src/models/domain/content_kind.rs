use std::fmt::{self, Debug};

use serde::{de::DeserializeOwned, Serialize};
use validator::{Validate, ValidationErrors};

use crate::constants::prompts;

use super::{FlashcardItem, QuizItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKindTag {
    Flashcards,
    Quiz,
}

impl fmt::Display for ContentKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKindTag::Flashcards => write!(f, "flashcards"),
            ContentKindTag::Quiz => write!(f, "quiz"),
        }
    }
}

/// Closed range a requested item count is clamped into, plus the value used
/// when the caller sends no usable count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl CountBounds {
    pub fn clamp(&self, requested: i64) -> u32 {
        requested.clamp(self.min as i64, self.max as i64) as u32
    }
}

/// Everything that differs between the generation targets: instructions,
/// the top-level field holding the list, the item shape and count bounds.
pub trait ContentKind: Send + Sync + 'static {
    type Item: DeserializeOwned + Serialize + Validate + Clone + Debug + Send + Sync;

    const TAG: ContentKindTag;
    const FIELD: &'static str;
    const BOUNDS: CountBounds;
    const SYSTEM_INSTRUCTION: &'static str;
    /// Plural noun used in the user instruction, e.g. "flashcards".
    const ITEM_NOUN: &'static str;
    const OUTPUT_TEMPLATE: &'static str;
    const EXTRA_RULES: &'static [&'static str];

    fn check_item(item: &Self::Item) -> Result<(), ValidationErrors> {
        item.validate()
    }
}

pub struct Flashcards;

impl ContentKind for Flashcards {
    type Item = FlashcardItem;

    const TAG: ContentKindTag = ContentKindTag::Flashcards;
    const FIELD: &'static str = "cards";
    const BOUNDS: CountBounds = CountBounds {
        min: 1,
        max: 50,
        default: 10,
    };
    const SYSTEM_INSTRUCTION: &'static str = prompts::FLASHCARD_SYSTEM_PROMPT;
    const ITEM_NOUN: &'static str = "flashcards";
    const OUTPUT_TEMPLATE: &'static str = prompts::FLASHCARD_OUTPUT_TEMPLATE;
    const EXTRA_RULES: &'static [&'static str] = prompts::FLASHCARD_RULES;
}

pub struct Quiz;

impl ContentKind for Quiz {
    type Item = QuizItem;

    const TAG: ContentKindTag = ContentKindTag::Quiz;
    const FIELD: &'static str = "questions";
    const BOUNDS: CountBounds = CountBounds {
        min: 1,
        max: 20,
        default: 5,
    };
    const SYSTEM_INSTRUCTION: &'static str = prompts::QUIZ_SYSTEM_PROMPT;
    const ITEM_NOUN: &'static str = "multiple-choice questions";
    const OUTPUT_TEMPLATE: &'static str = prompts::QUIZ_OUTPUT_TEMPLATE;
    const EXTRA_RULES: &'static [&'static str] = prompts::QUIZ_RULES;
}
