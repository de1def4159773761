use crate::profile::TypeProfile;
use crate::scoring::statistics::SelectionStats;
use crate::types::answer::AnswerSet;
use crate::types::trait_type::{DiscType, TraitMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub scores: TraitMap<u32>,
    pub percentages: TraitMap<u32>,
    pub primary_type: DiscType,
}

/// Name stored for records submitted without one.
pub const ANONYMOUS_USER: &str = "anonymous";

/// A finished assessment as it is persisted: who took it, what they picked,
/// what it scored, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub user_name: String,
    pub answers: AnswerSet,
    pub results: ScoreResult,
    pub completed_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(user_name: impl Into<String>, answers: AnswerSet, results: ScoreResult) -> Self {
        let user_name = user_name.into();
        let user_name = match user_name.trim() {
            "" => ANONYMOUS_USER.to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            user_name,
            answers,
            results,
            completed_at: Utc::now(),
        }
    }
}

/// Everything a report renderer needs for one scored assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub results: ScoreResult,
    pub statistics: SelectionStats,
    pub profile: &'static TypeProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
