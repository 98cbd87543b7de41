use serde_json::json;

use studygen_server::{
    errors::AppError,
    models::domain::{ContentKind, Flashcards, Quiz, RawGenerationParams},
    services::{
        prompt_builder::build_prompt,
        sanitizer::sanitize,
        schema_validator::{validate, ItemValidationPolicy},
        unwrapper::unwrap_completion,
    },
};

const CARDS: &str = r#"{"cards":[{"question":"What is chlorophyll?","answer":"A green pigment"},{"question":"Where does the Calvin cycle occur?","answer":"In the stroma"}]}"#;

#[test]
fn unwrapping_clean_text_is_a_no_op() {
    assert_eq!(unwrap_completion(CARDS), CARDS);
}

#[test]
fn fenced_completion_round_trips_through_the_validator() {
    let fenced = format!("```json\n{}\n```", CARDS);
    let cleaned = unwrap_completion(&fenced);
    assert_eq!(cleaned, CARDS);

    let items = validate::<Flashcards>(&cleaned, ItemValidationPolicy::Strict).unwrap();
    let expected: serde_json::Value = serde_json::from_str(CARDS).unwrap();
    assert_eq!(serde_json::to_value(&items).unwrap(), expected["cards"]);
}

#[test]
fn double_fenced_completion_keeps_one_fence_and_is_rejected() {
    let double = format!("```json\n```json\n{}\n```\n```", CARDS);
    let cleaned = unwrap_completion(&double);
    assert_eq!(cleaned, format!("```json\n{}\n```", CARDS));

    assert!(matches!(
        validate::<Flashcards>(&cleaned, ItemValidationPolicy::Filter),
        Err(AppError::MalformedOutput(_))
    ));
}

#[test]
fn sanitized_request_drives_the_prompt() {
    let params = RawGenerationParams {
        topic: Some(json!("  Mitochondria ")),
        count: Some(json!(1000)),
    };

    let request = sanitize(&params, Quiz::BOUNDS).unwrap();
    assert_eq!(request.item_count, Quiz::BOUNDS.max);

    let prompt = build_prompt::<Quiz>(&request);
    assert!(prompt.user.contains("Create exactly 20 multiple-choice questions"));
    assert!(prompt.user.contains("\"Mitochondria\""));
    assert_eq!(prompt, build_prompt::<Quiz>(&request));
}

#[test]
fn quiz_items_preserve_field_values() {
    let text = r#"{"questions":[{"question":"Powerhouse of the cell?","options":["Nucleus","Mitochondrion","Golgi body","Lysosome"],"correct":"B"}]}"#;

    let items = validate::<Quiz>(text, ItemValidationPolicy::Strict).unwrap();
    assert_eq!(items[0].correct_option(), Some("Mitochondrion"));
    assert_eq!(
        serde_json::to_value(&items).unwrap(),
        serde_json::from_str::<serde_json::Value>(text).unwrap()["questions"]
    );
}
