use serde::Serialize;

use crate::models::domain::{FlashcardItem, QuizItem};

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub cards: Vec<FlashcardItem>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizItem>,
}

#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<&'static str>,
}
