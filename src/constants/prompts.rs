pub const FLASHCARD_SYSTEM_PROMPT: &str = "You are a study assistant that writes flashcards for learners. \
Each flashcard has a short, self-contained question on the front and a concise, factually accurate answer on the back. \
Cover the most important facts, definitions and relationships of the topic, avoid duplicates, and never reveal the answer inside the question. \
You reply with a single JSON object and nothing else.";

pub const QUIZ_SYSTEM_PROMPT: &str = "You are a study assistant that writes multiple-choice quiz questions for learners. \
Each question has exactly four answer options, exactly one of which is correct; the wrong options are plausible but clearly incorrect to someone who knows the material. \
Vary which option letter holds the correct answer across questions. \
You reply with a single JSON object and nothing else.";

pub const FLASHCARD_OUTPUT_TEMPLATE: &str =
    r#"{"cards":[{"question":"...","answer":"..."}]}"#;

pub const QUIZ_OUTPUT_TEMPLATE: &str =
    r#"{"questions":[{"question":"...","options":["...","...","...","..."],"correct":"A"}]}"#;

pub const FLASHCARD_RULES: &[&str] = &["Every card has a non-empty \"question\" and a non-empty \"answer\"."];

pub const QUIZ_RULES: &[&str] = &[
    "Every question has exactly 4 strings in \"options\", without letter prefixes.",
    "\"correct\" is the letter of the correct option: one of \"A\", \"B\", \"C\" or \"D\", where \"A\" is the first option.",
];

/// Rules shared by every kind. The response unwrapper and schema validator
/// still defend against the model ignoring them.
pub const COMMON_RULES: &[&str] = &[
    "Return ONLY the JSON object.",
    "Do not wrap the JSON in markdown code fences or backticks.",
    "Do not number the items.",
    "Do not add any commentary, explanation or text before or after the JSON.",
    "Do not add any keys other than those shown in the template.",
];
