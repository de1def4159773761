use crate::types::trait_type::DiscType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    #[serde(rename = "type")]
    pub trait_type: DiscType,
}

/// A forced-choice question. Option order only matters for display; the
/// trait tags may repeat within one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub options: [QuestionOption; 4],
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&QuestionOption> {
        self.options.get(index)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.questions.iter().map(|question| question.id)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_deserializes_type_key() {
        let question: Question = serde_json::from_str(
            r#"{"id": 3, "options": [
                {"text": "bold", "type": "D"},
                {"text": "lively", "type": "I"},
                {"text": "calm", "type": "S"},
                {"text": "exact", "type": "D"}
            ]}"#,
        )
        .expect("question should parse");
        assert_eq!(question.id, 3);
        assert_eq!(question.options[3].trait_type, DiscType::D);
    }

    #[test]
    fn question_requires_exactly_four_options() {
        let parsed = serde_json::from_str::<Question>(
            r#"{"id": 1, "options": [
                {"text": "a", "type": "D"},
                {"text": "b", "type": "I"},
                {"text": "c", "type": "S"}
            ]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn bank_resolves_questions_by_id() {
        let bank = fixtures::disc_bank(3);
        assert_eq!(bank.get(2).map(|question| question.id), Some(2));
        assert!(bank.get(9).is_none());
        assert!(bank.get(2).and_then(|question| question.option(4)).is_none());
    }
}
