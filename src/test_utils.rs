#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::RawCompletion;

    /// Three cards wrapped in a ```json fence, as models tend to reply.
    pub fn fenced_photosynthesis_cards() -> RawCompletion {
        RawCompletion(
            "```json\n{\"cards\":[{\"question\":\"Q1\",\"answer\":\"A1\"},{\"question\":\"Q2\",\"answer\":\"A2\"},{\"question\":\"Q3\",\"answer\":\"A3\"}]}\n```"
                .to_string(),
        )
    }

    pub fn quiz_completion() -> RawCompletion {
        RawCompletion(
            r#"{"questions":[
                {"question":"What does `&mut` grant?","options":["Shared access","Exclusive mutable access","Ownership","Nothing"],"correct":"B"},
                {"question":"Which trait enables `?` on custom errors?","options":["From","Into","Display","Default"],"correct":"A"}
            ]}"#
            .to_string(),
        )
    }

    /// Second question only has three options.
    pub fn quiz_completion_with_short_item() -> RawCompletion {
        RawCompletion(
            r#"{"questions":[
                {"question":"What does `&mut` grant?","options":["Shared access","Exclusive mutable access","Ownership","Nothing"],"correct":"B"},
                {"question":"Pick one","options":["x","y","z"],"correct":"A"}
            ]}"#
            .to_string(),
        )
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{
        models::domain::{Flashcards, Quiz},
        services::{
            schema_validator::{validate, ItemValidationPolicy},
            unwrapper::unwrap_completion,
        },
    };

    #[test]
    fn test_fixtures_fenced_cards_unwrap_to_three_cards() {
        let cleaned = unwrap_completion(fenced_photosynthesis_cards().as_str());
        let cards = validate::<Flashcards>(&cleaned, ItemValidationPolicy::Strict).unwrap();
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn test_fixtures_quiz_completion_is_valid() {
        let questions =
            validate::<Quiz>(quiz_completion().as_str(), ItemValidationPolicy::Strict).unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_fixtures_short_item_fails_strict() {
        let result = validate::<Quiz>(
            quiz_completion_with_short_item().as_str(),
            ItemValidationPolicy::Strict,
        );
        assert!(result.is_err());
    }
}
