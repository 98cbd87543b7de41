use serde::Deserialize;
use serde_json::Value;

use crate::models::domain::RawGenerationParams;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateCardsRequestDto {
    #[serde(default)]
    pub topic: Option<Value>,
    #[serde(default)]
    pub count: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateQuizRequestDto {
    #[serde(default)]
    pub topic: Option<Value>,
    #[serde(default, rename = "numQuestions")]
    pub num_questions: Option<Value>,
}

impl From<GenerateCardsRequestDto> for RawGenerationParams {
    fn from(dto: GenerateCardsRequestDto) -> Self {
        RawGenerationParams {
            topic: dto.topic,
            count: dto.count,
        }
    }
}

impl From<GenerateQuizRequestDto> for RawGenerationParams {
    fn from(dto: GenerateQuizRequestDto) -> Self {
        RawGenerationParams {
            topic: dto.topic,
            count: dto.num_questions,
        }
    }
}
