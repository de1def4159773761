use crate::error::{DiscError, Result};
use crate::types::answer::AnswerSet;
use serde::Deserialize;
use std::path::Path;

/// Answers as submitted, with the respondent's name when the sheet has one.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerSheet {
    pub user_name: Option<String>,
    pub answers: AnswerSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NamedSheet {
    user_name: Option<String>,
    answers: AnswerSet,
}

/// Accepts either a bare answer set or an object carrying `answers` (and
/// optionally `userName`), which includes saved result records.
pub fn parse(content: &str) -> Result<AnswerSheet> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    let sheet = if value.get("answers").is_some() {
        let named: NamedSheet = serde_json::from_str(content)?;
        AnswerSheet {
            user_name: named.user_name,
            answers: named.answers,
        }
    } else {
        AnswerSheet {
            user_name: None,
            answers: serde_json::from_str(content)?,
        }
    };
    Ok(sheet)
}

pub fn read(path: &Path) -> Result<AnswerSheet> {
    if !path.exists() {
        return Err(DiscError::PathNotFound(path.display().to_string()));
    }
    parse(&std::fs::read_to_string(path)?)
}
