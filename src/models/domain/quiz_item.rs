use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{none_blank, not_blank};

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizItem {
    #[validate(custom(function = "not_blank"))]
    pub question: String,
    #[validate(length(equal = 4), custom(function = "none_blank"))]
    pub options: Vec<String>,
    pub correct: AnswerLetter,
}

/// Letter of the correct option, `A` being `options[0]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    pub fn index(self) -> usize {
        match self {
            AnswerLetter::A => 0,
            AnswerLetter::B => 1,
            AnswerLetter::C => 2,
            AnswerLetter::D => 3,
        }
    }
}

impl QuizItem {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct.index()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(options: &[&str], correct: AnswerLetter) -> QuizItem {
        QuizItem {
            question: "Which organelle performs photosynthesis?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct,
        }
    }

    #[test]
    fn quiz_item_with_four_options_passes() {
        let quiz = item(&["Chloroplast", "Nucleus", "Ribosome", "Vacuole"], AnswerLetter::A);
        assert!(quiz.validate().is_ok());
        assert_eq!(quiz.correct_option(), Some("Chloroplast"));
    }

    #[test]
    fn quiz_item_with_three_options_fails() {
        let quiz = item(&["Chloroplast", "Nucleus", "Ribosome"], AnswerLetter::A);
        let errors = quiz.validate().unwrap_err();
        assert_eq!(errors.field_errors()["options"][0].code, "length");
    }

    #[test]
    fn quiz_item_with_blank_option_fails() {
        let quiz = item(&["Chloroplast", " ", "Ribosome", "Vacuole"], AnswerLetter::A);
        let errors = quiz.validate().unwrap_err();
        let option_errors = errors.field_errors()["options"];
        assert_eq!(option_errors[0].code, "blank_option");
        assert_eq!(option_errors[0].params["position"], 1);
    }

    #[test]
    fn quiz_item_with_blank_question_fails() {
        let mut quiz = item(&["Chloroplast", "Nucleus", "Ribosome", "Vacuole"], AnswerLetter::B);
        quiz.question = "   ".to_string();
        assert!(quiz.validate().unwrap_err().field_errors().contains_key("question"));
    }

    #[test]
    fn option_count_matches_the_length_rule() {
        let quiz = item(&["a"; OPTION_COUNT], AnswerLetter::D);
        assert!(quiz.validate().is_ok());
    }

    #[test]
    fn answer_letter_only_accepts_a_to_d() {
        for letter in ["\"A\"", "\"B\"", "\"C\"", "\"D\""] {
            assert!(serde_json::from_str::<AnswerLetter>(letter).is_ok());
        }
        for letter in ["\"E\"", "\"a\"", "1", "\"\""] {
            assert!(serde_json::from_str::<AnswerLetter>(letter).is_err());
        }
    }

    #[test]
    fn answer_letter_serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&AnswerLetter::C).unwrap(), "\"C\"");
    }
}
