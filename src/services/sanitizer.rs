use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{CountBounds, GenerationRequest, RawGenerationParams},
};

pub const INVALID_TOPIC: &str = "missing or invalid topic";

/// Validates the topic and clamps the requested count into `bounds`.
/// Out-of-range counts are never an error.
pub fn sanitize(params: &RawGenerationParams, bounds: CountBounds) -> AppResult<GenerationRequest> {
    let topic = match &params.topic {
        Some(Value::String(topic)) if !topic.trim().is_empty() => topic.trim().to_string(),
        _ => return Err(AppError::InvalidInput(INVALID_TOPIC.to_string())),
    };

    let item_count = params
        .count
        .as_ref()
        .and_then(coerce_count)
        .map(|requested| bounds.clamp(requested))
        .unwrap_or(bounds.default);

    Ok(GenerationRequest { topic, item_count })
}

// Numbers and numeric strings only; fractions truncate toward zero.
fn coerce_count(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if !number.is_finite() {
        return None;
    }

    // `as` saturates, so huge values still clamp to the upper bound.
    Some(number.trunc() as i64)
}
