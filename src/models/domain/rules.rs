use std::borrow::Cow;

use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("must not be blank")));
    }
    Ok(())
}

pub fn none_blank(values: &[String]) -> Result<(), ValidationError> {
    match values.iter().position(|v| v.trim().is_empty()) {
        Some(position) => {
            let mut error = ValidationError::new("blank_option")
                .with_message(Cow::from("options must not be blank"));
            error.add_param(Cow::from("position"), &position);
            Err(error)
        }
        None => Ok(()),
    }
}
