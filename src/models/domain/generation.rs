use serde_json::Value;

/// Caller input as received, before any checks. Values stay untyped so a
/// non-string topic or non-numeric count can be reported instead of
/// failing body extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGenerationParams {
    pub topic: Option<Value>,
    pub count: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
}

/// Text exactly as the completion service returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCompletion(pub String);

impl RawCompletion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawCompletion {
    fn from(text: &str) -> Self {
        RawCompletion(text.to_string())
    }
}
