use std::str::FromStr;

use serde_json::Value;

use crate::{
    errors::{AppError, AppResult},
    models::domain::ContentKind,
};

pub const NOT_VALID_JSON: &str = "not valid JSON";

/// What to do with list elements that do not match the item shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemValidationPolicy {
    /// Drop invalid elements and keep the rest in order.
    #[default]
    Filter,
    /// Fail the whole request on the first invalid element.
    Strict,
}

impl FromStr for ItemValidationPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "filter" => Ok(ItemValidationPolicy::Filter),
            "strict" => Ok(ItemValidationPolicy::Strict),
            other => Err(format!("unknown item validation policy '{}'", other)),
        }
    }
}

/// Parses cleaned completion text into the items of content kind `K`.
pub fn validate<K: ContentKind>(
    cleaned: &str,
    policy: ItemValidationPolicy,
) -> AppResult<Vec<K::Item>> {
    let parsed: Value = serde_json::from_str(cleaned)
        .map_err(|_| AppError::MalformedOutput(NOT_VALID_JSON.to_string()))?;

    let elements = match parsed {
        Value::Object(mut object) => match object.remove(K::FIELD) {
            Some(Value::Array(elements)) => elements,
            _ => return Err(list_expected(K::FIELD)),
        },
        _ => return Err(list_expected(K::FIELD)),
    };

    if elements.is_empty() {
        log::warn!("{} completion returned an empty '{}' list", K::TAG, K::FIELD);
        return Ok(Vec::new());
    }

    let total = elements.len();
    let mut items = Vec::with_capacity(total);

    for (index, element) in elements.into_iter().enumerate() {
        match parse_item::<K>(element) {
            Ok(item) => items.push(item),
            Err(reason) => match policy {
                ItemValidationPolicy::Strict => {
                    // The reason quotes model output, so it only goes to the log.
                    log::warn!("Rejecting invalid {} item {}: {}", K::TAG, index, reason);
                    return Err(AppError::SchemaMismatch(format!(
                        "item {} in '{}' is invalid",
                        index,
                        K::FIELD
                    )));
                }
                ItemValidationPolicy::Filter => {
                    log::warn!(
                        "Dropping invalid {} item {}: {}",
                        K::TAG,
                        index,
                        reason
                    );
                }
            },
        }
    }

    if items.is_empty() {
        return Err(AppError::SchemaMismatch(format!(
            "no valid items in '{}'",
            K::FIELD
        )));
    }

    if items.len() < total {
        log::warn!(
            "Kept {} of {} {} items after validation",
            items.len(),
            total,
            K::TAG
        );
    }

    Ok(items)
}

fn parse_item<K: ContentKind>(element: Value) -> AppResult<K::Item> {
    let item: K::Item = serde_json::from_value(element)
        .map_err(|e| AppError::SchemaMismatch(e.to_string()))?;
    K::check_item(&item)?;
    Ok(item)
}

fn list_expected(field: &str) -> AppError {
    AppError::SchemaMismatch(format!("expected field '{}' to be a list", field))
}
