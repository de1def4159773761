use crate::error::DiscError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_RECORDS_DIR: &str = ".disc/records";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscConfig {
    pub bank: Option<BankConfig>,
    pub report: Option<ReportConfig>,
    pub records: Option<RecordsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordsConfig {
    pub dir: Option<PathBuf>,
}

impl DiscConfig {
    pub fn bank_path(&self) -> Option<&Path> {
        self.bank.as_ref().and_then(|bank| bank.path.as_deref())
    }

    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn records_dir(&self) -> PathBuf {
        self.records
            .as_ref()
            .and_then(|records| records.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_DIR))
    }

    pub fn validate(&self) -> Result<(), DiscError> {
        if let Some(path) = self.bank_path() {
            let supported = matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("toml" | "json")
            );
            if !supported {
                return Err(DiscError::ConfigParse(format!(
                    "bank.path must point to a .toml or .json file: {}",
                    path.display()
                )));
            }
        }

        if let Some(dir) = self.records.as_ref().and_then(|records| records.dir.as_ref()) {
            if dir.as_os_str().is_empty() {
                return Err(DiscError::ConfigParse(
                    "records.dir must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
