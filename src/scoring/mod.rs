pub mod completeness;
pub mod statistics;

use crate::types::answer::{Answer, AnswerSet};
use crate::types::question::{Question, QuestionBank};
use crate::types::report::ScoreResult;
use crate::types::trait_type::{DiscType, TraitMap};
use thiserror::Error;
use tracing::{debug, info};

pub const MOST_LIKE_POINTS: i64 = 2;
pub const LEAST_LIKE_PENALTY: i64 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("question {question_id}: most-like and least-like select the same option")]
    InvalidAnswer { question_id: u32 },

    #[error("answer references unknown question {question_id}")]
    UnknownQuestion { question_id: u32 },

    #[error("question {question_id}: option index {index} is out of range")]
    OptionIndex { question_id: u32, index: usize },
}

/// Converts an answer set into trait scores, percentages and a primary type.
///
/// Every present pick counts: most-like adds two points to its option's trait,
/// least-like removes one. Totals are floored at zero afterwards. All answers
/// are checked before anything is accumulated, so an error never leaves a
/// partial result behind.
pub fn score(bank: &QuestionBank, answers: &AnswerSet) -> Result<ScoreResult, ScoringError> {
    let resolved = answers
        .iter()
        .map(|(&question_id, answer)| resolve(bank, question_id, answer))
        .collect::<Result<Vec<_>, _>>()?;

    let raw = accumulate(resolved);
    let scores = raw.map(|value| u32::try_from((*value).max(0)).unwrap_or(u32::MAX));
    let percentages = percentages(&scores);
    let primary_type = primary_type(&percentages);

    info!(?scores, ?percentages, %primary_type, "scoring complete");
    Ok(ScoreResult {
        scores,
        percentages,
        primary_type,
    })
}

/// Raw per-trait totals before flooring. Negative totals are kept here so
/// the result does not depend on the order answers are applied in.
fn accumulate<'a>(resolved: impl IntoIterator<Item = (&'a Question, &'a Answer)>) -> TraitMap<i64> {
    let mut raw = TraitMap::<i64>::default();
    for (question, answer) in resolved {
        if let Some(most) = answer.most_like {
            raw[question.options[most].trait_type] += MOST_LIKE_POINTS;
        }
        if let Some(least) = answer.least_like {
            raw[question.options[least].trait_type] -= LEAST_LIKE_PENALTY;
        }
        debug!(question = question.id, ?answer, "answer applied");
    }
    raw
}

fn resolve<'a>(
    bank: &'a QuestionBank,
    question_id: u32,
    answer: &'a Answer,
) -> Result<(&'a Question, &'a Answer), ScoringError> {
    let question = bank
        .get(question_id)
        .ok_or(ScoringError::UnknownQuestion { question_id })?;

    for index in answer.most_like.iter().chain(answer.least_like.iter()) {
        if question.option(*index).is_none() {
            return Err(ScoringError::OptionIndex {
                question_id,
                index: *index,
            });
        }
    }

    if answer.is_conflicting() {
        return Err(ScoringError::InvalidAnswer { question_id });
    }
    Ok((question, answer))
}

/// Share of the total per trait, rounded half away from zero independently.
/// The four values are not rebalanced, so they may sum to 99 or 101.
pub fn percentages(scores: &TraitMap<u32>) -> TraitMap<u32> {
    let total: u64 = scores.iter().map(|(_, score)| u64::from(*score)).sum();
    if total == 0 {
        return TraitMap::default();
    }
    scores.map(|score| {
        let rounded = (200 * u64::from(*score) + total) / (2 * total);
        rounded as u32
    })
}

/// Highest percentage wins; ties go to the trait declared first (D, I, S, C).
pub fn primary_type(percentages: &TraitMap<u32>) -> DiscType {
    let mut best = DiscType::D;
    for (ty, value) in percentages.iter() {
        if *value > percentages[best] {
            best = ty;
        }
    }
    best
}
