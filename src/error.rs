use crate::scoring::ScoringError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unknown DISC type: {0}")]
    UnknownTrait(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("question bank is empty: {0}")]
    EmptyBank(String),

    #[error("duplicate question id in bank: {0}")]
    DuplicateQuestion(u32),

    #[error("no free record file name for {0}")]
    RecordNameTaken(String),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiscError>;
