pub mod content_kind;
pub mod flashcard;
pub mod generation;
pub mod quiz_item;
pub mod rules;
pub use content_kind::{ContentKind, ContentKindTag, CountBounds, Flashcards, Quiz};
pub use flashcard::FlashcardItem;
pub use generation::{GenerationRequest, ModelSettings, Prompt, RawCompletion, RawGenerationParams};
pub use quiz_item::{AnswerLetter, QuizItem};
