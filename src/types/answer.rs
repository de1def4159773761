use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A respondent's picks for one question, as option positions (0..=3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_like: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub least_like: Option<usize>,
}

impl Answer {
    pub fn new(most_like: usize, least_like: usize) -> Self {
        Self {
            most_like: Some(most_like),
            least_like: Some(least_like),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.most_like.is_some() && self.least_like.is_some()
    }

    pub fn is_conflicting(&self) -> bool {
        matches!((self.most_like, self.least_like), (Some(most), Some(least)) if most == least)
    }

    pub fn is_valid(&self) -> bool {
        self.is_complete() && !self.is_conflicting()
    }
}

/// Answers keyed by question id. May be partial while a test is in progress.
pub type AnswerSet = BTreeMap<u32, Answer>;
