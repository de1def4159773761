use crate::error::{DiscError, Result};
use crate::types::question::{Question, QuestionBank};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_BANK: &str = include_str!("../data/questions.toml");

#[derive(Deserialize)]
#[serde(untagged)]
enum BankDocument {
    Wrapped { questions: Vec<Question> },
    Bare(Vec<Question>),
}

impl From<BankDocument> for QuestionBank {
    fn from(document: BankDocument) -> Self {
        match document {
            BankDocument::Wrapped { questions } | BankDocument::Bare(questions) => {
                QuestionBank::new(questions)
            }
        }
    }
}

/// The 28-question bank shipped with the binary.
pub fn builtin() -> Result<QuestionBank> {
    let bank: QuestionBank = toml::from_str(BUILTIN_BANK)?;
    validate(&bank)?;
    Ok(bank)
}

/// Reads a bank from a `.toml` or `.json` file.
pub fn load(path: &Path) -> Result<QuestionBank> {
    if !path.exists() {
        return Err(DiscError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let bank = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str::<QuestionBank>(&content)?,
        Some("json") => serde_json::from_str::<BankDocument>(&content)?.into(),
        _ => return Err(DiscError::UnsupportedFormat(path.display().to_string())),
    };
    if bank.is_empty() {
        return Err(DiscError::EmptyBank(path.display().to_string()));
    }
    validate(&bank)?;
    debug!(path = %path.display(), questions = bank.len(), "question bank loaded");
    Ok(bank)
}

/// Loads `path` when given, otherwise the built-in bank.
pub fn resolve(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => load(path),
        None => builtin(),
    }
}

/// Question ids must be unique. Repeated trait tags inside a question are
/// fine.
pub fn validate(bank: &QuestionBank) -> Result<()> {
    let mut seen = HashSet::new();
    for id in bank.ids() {
        if !seen.insert(id) {
            return Err(DiscError::DuplicateQuestion(id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::trait_type::DiscType;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_bank_has_28_sequential_questions() {
        let bank = builtin().expect("builtin bank should parse");
        assert_eq!(bank.len(), 28);
        assert!(bank.ids().eq(1..=28));
    }

    #[test]
    fn builtin_bank_keeps_repeated_trait_tags() {
        let bank = builtin().expect("builtin bank should parse");
        let first = bank.get(1).expect("question 1 should exist");
        let dominance = first
            .options
            .iter()
            .filter(|option| option.trait_type == DiscType::D)
            .count();
        assert_eq!(dominance, 3);
    }

    #[test]
    fn load_reads_bare_json_array() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("bank.json");
        fs::write(
            &path,
            r#"[{"id": 1, "options": [
                {"text": "a", "type": "D"},
                {"text": "b", "type": "I"},
                {"text": "c", "type": "S"},
                {"text": "d", "type": "C"}
            ]}]"#,
        )
        .expect("bank should write");

        let bank = load(&path).expect("bank should load");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("bank.toml");
        let question = r#"
[[questions]]
id = 4
options = [
    { text = "a", type = "D" },
    { text = "b", type = "I" },
    { text = "c", type = "S" },
    { text = "d", type = "C" },
]
"#;
        fs::write(&path, format!("{question}{question}")).expect("bank should write");

        let err = load(&path).expect_err("duplicate ids should fail");
        assert!(matches!(err, DiscError::DuplicateQuestion(4)));
    }

    #[test]
    fn load_rejects_empty_and_unknown_formats() {
        let dir = TempDir::new().expect("temp dir should be created");
        let empty = dir.path().join("empty.json");
        fs::write(&empty, "[]").expect("bank should write");
        assert!(matches!(load(&empty), Err(DiscError::EmptyBank(_))));

        let yaml = dir.path().join("bank.yaml");
        fs::write(&yaml, "questions: []").expect("bank should write");
        assert!(matches!(load(&yaml), Err(DiscError::UnsupportedFormat(_))));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(load(&missing), Err(DiscError::PathNotFound(_))));
    }
}
