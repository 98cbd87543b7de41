use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::not_blank;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct FlashcardItem {
    #[validate(custom(function = "not_blank"))]
    pub question: String,
    #[validate(custom(function = "not_blank"))]
    pub answer: String,
}

impl FlashcardItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
