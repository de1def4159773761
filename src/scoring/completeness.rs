use crate::types::answer::AnswerSet;
use crate::types::question::QuestionBank;

/// A test is submittable when every bank question has an answer and every
/// answer present is complete and non-conflicting.
pub fn is_test_complete(bank: &QuestionBank, answers: &AnswerSet) -> bool {
    bank.ids().all(|id| answers.contains_key(&id)) && answers.values().all(|answer| answer.is_valid())
}

/// Bank question ids that lack a valid answer, in bank order.
pub fn missing_questions(bank: &QuestionBank, answers: &AnswerSet) -> Vec<u32> {
    bank.ids()
        .filter(|id| !answers.get(id).is_some_and(|answer| answer.is_valid()))
        .collect()
}

/// Answer-set ids whose two picks select the same option.
pub fn conflicting_questions(answers: &AnswerSet) -> Vec<u32> {
    answers
        .iter()
        .filter(|(_, answer)| answer.is_conflicting())
        .map(|(id, _)| *id)
        .collect()
}

/// Number of bank questions with a valid answer, out of the bank size.
pub fn progress(bank: &QuestionBank, answers: &AnswerSet) -> (usize, usize) {
    let answered = bank.len() - missing_questions(bank, answers).len();
    (answered, bank.len())
}
