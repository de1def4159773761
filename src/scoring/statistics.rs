use crate::types::answer::AnswerSet;
use crate::types::question::QuestionBank;
use crate::types::trait_type::TraitMap;
use serde::{Deserialize, Serialize};

/// How often each trait was picked as most-like and least-like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStats {
    pub total_questions: usize,
    pub answered_questions: usize,
    pub most_like: TraitMap<u32>,
    pub least_like: TraitMap<u32>,
}

/// Picks that do not resolve against the bank are left out; scoring is what
/// reports those.
pub fn selection_stats(bank: &QuestionBank, answers: &AnswerSet) -> SelectionStats {
    let mut stats = SelectionStats {
        total_questions: bank.len(),
        ..SelectionStats::default()
    };

    for (id, answer) in answers {
        let Some(question) = bank.get(*id) else {
            continue;
        };
        if answer.is_valid() {
            stats.answered_questions += 1;
        }
        if let Some(option) = answer.most_like.and_then(|index| question.option(index)) {
            stats.most_like[option.trait_type] += 1;
        }
        if let Some(option) = answer.least_like.and_then(|index| question.option(index)) {
            stats.least_like[option.trait_type] += 1;
        }
    }
    stats
}
