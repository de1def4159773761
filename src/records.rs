use crate::error::{DiscError, Result};
use crate::types::report::{ResultRecord, ANONYMOUS_USER};
use crate::types::trait_type::TraitMap;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

const MAX_NAME_ATTEMPTS: u32 = 100;

/// Writes `record` as pretty JSON under `dir`, named after the user and the
/// completion time. Existing files are never replaced; a numeric suffix is
/// added when the name is taken.
pub fn save(dir: &Path, record: &ResultRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(DiscError::Io)?;
    let stamp = record.completed_at.format("%Y%m%dT%H%M%S%.3fZ");
    let stem = format!("{}-{stamp}", file_stem(&record.user_name));
    let json = serde_json::to_string_pretty(record)?;

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let out_path = match attempt {
            0 => dir.join(format!("{stem}.json")),
            n => dir.join(format!("{stem}-{n}.json")),
        };
        match OpenOptions::new().write(true).create_new(true).open(&out_path) {
            Ok(mut file) => {
                file.write_all(json.as_bytes()).map_err(DiscError::Io)?;
                debug!(path = %out_path.display(), "result record saved");
                return Ok(out_path);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(DiscError::Io(err)),
        }
    }
    Err(DiscError::RecordNameTaken(stem))
}

/// Every readable record under `dir`, newest first. A missing directory is
/// an empty history.
pub fn history(dir: &Path, user: Option<&str>) -> Result<Vec<ResultRecord>> {
    let mut records = stored(dir)
        .into_iter()
        .map(|(_, record)| record)
        .filter(|record| user.map_or(true, |user| record.user_name == user))
        .collect::<Vec<_>>();
    records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    Ok(records)
}

/// Dashboard figures over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    pub total: usize,
    pub today: usize,
    pub last_week: usize,
    pub primary_types: TraitMap<u32>,
}

/// `today` counts records since midnight UTC of `now`; `last_week` counts
/// records since seven days before that midnight.
pub fn summary(records: &[ResultRecord], now: DateTime<Utc>) -> RecordSummary {
    let today_start = Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::default()));
    let week_start = today_start - Duration::days(7);

    let mut summary = RecordSummary {
        total: records.len(),
        ..RecordSummary::default()
    };
    for record in records {
        if record.completed_at >= today_start {
            summary.today += 1;
        }
        if record.completed_at >= week_start {
            summary.last_week += 1;
        }
        summary.primary_types[record.results.primary_type] += 1;
    }
    summary
}

/// Which records `prune` removes. Every criterion that is set must match;
/// a filter with none set matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneFilter<'a> {
    pub user: Option<&'a str>,
    pub completed_before: Option<DateTime<Utc>>,
}

impl PruneFilter<'_> {
    fn matches(&self, record: &ResultRecord) -> bool {
        if self.user.is_none() && self.completed_before.is_none() {
            return false;
        }
        self.user.map_or(true, |user| record.user_name == user)
            && self
                .completed_before
                .map_or(true, |cutoff| record.completed_at < cutoff)
    }
}

/// Deletes matching record files and returns their paths.
pub fn prune(dir: &Path, filter: PruneFilter<'_>) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for (path, record) in stored(dir) {
        if filter.matches(&record) {
            fs::remove_file(&path).map_err(DiscError::Io)?;
            debug!(path = %path.display(), "result record removed");
            removed.push(path);
        }
    }
    Ok(removed)
}

fn stored(dir: &Path) -> Vec<(PathBuf, ResultRecord)> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "skipping unreadable records entry");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !path.extension().is_some_and(|ext| ext == "json") {
            continue;
        }
        let parsed = fs::read(path)
            .map_err(DiscError::Io)
            .and_then(|bytes| serde_json::from_slice::<ResultRecord>(&bytes).map_err(DiscError::Json));
        match parsed {
            Ok(record) => records.push((path.to_path_buf(), record)),
            Err(err) => warn!(path = %path.display(), %err, "skipping unreadable record"),
        }
    }
    records
}

fn file_stem(user_name: &str) -> String {
    let stem: String = user_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        ANONYMOUS_USER.to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answer::{Answer, AnswerSet};
    use crate::types::report::ScoreResult;
    use crate::types::trait_type::DiscType;

    use tempfile::TempDir;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn typed_record(user: &str, minutes: i64, primary_type: DiscType) -> ResultRecord {
        let answers: AnswerSet = [(1, Answer::new(0, 1))].into_iter().collect();
        let mut record = ResultRecord::new(
            user,
            answers,
            ScoreResult {
                scores: TraitMap { d: 2, i: 0, s: 0, c: 0 },
                percentages: TraitMap { d: 100, i: 0, s: 0, c: 0 },
                primary_type,
            },
        );
        record.completed_at = base_time() + Duration::minutes(minutes);
        record
    }

    fn record(user: &str, minutes: i64) -> ResultRecord {
        typed_record(user, minutes, DiscType::D)
    }

    #[test]
    fn save_names_file_after_user_and_time() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = save(dir.path(), &record("Kim Min/su", 0)).expect("record should save");
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("Kim_Min_su-20240501T090000.000Z.json")
        );
    }

    #[test]
    fn save_keeps_both_records_when_names_collide() {
        let dir = TempDir::new().expect("temp dir should be created");
        let first = save(dir.path(), &record("Kim Min", 0)).expect("record should save");
        let second = save(dir.path(), &record("Kim_Min", 0)).expect("record should save");
        let third = save(dir.path(), &record("Kim Min", 0)).expect("record should save");

        assert_ne!(first, second);
        assert_eq!(
            second.file_name().and_then(|name| name.to_str()),
            Some("Kim_Min-20240501T090000.000Z-1.json")
        );
        assert_ne!(second, third);

        let all = history(dir.path(), None).expect("history should load");
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|r| r.user_name == "Kim Min").count(), 2);
    }

    #[test]
    fn save_uses_anonymous_for_blank_user() {
        let dir = TempDir::new().expect("temp dir should be created");
        let saved = record("", 0);
        assert_eq!(saved.user_name, ANONYMOUS_USER);
        let path = save(dir.path(), &saved).expect("record should save");
        assert!(path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("anonymous-")));
    }

    #[test]
    fn history_returns_newest_first_and_filters_by_user() {
        let dir = TempDir::new().expect("temp dir should be created");
        save(dir.path(), &record("alex", 0)).expect("record should save");
        save(dir.path(), &record("alex", 30)).expect("record should save");
        save(dir.path(), &record("sam", 10)).expect("record should save");

        let all = history(dir.path(), None).expect("history should load");
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|pair| pair[0].completed_at >= pair[1].completed_at));

        let alex = history(dir.path(), Some("alex")).expect("history should load");
        assert_eq!(alex.len(), 2);
        assert_eq!(alex[0].completed_at, record("alex", 30).completed_at);
    }

    #[test]
    fn history_skips_unparseable_files() {
        let dir = TempDir::new().expect("temp dir should be created");
        save(dir.path(), &record("alex", 0)).expect("record should save");
        fs::write(dir.path().join("notes.json"), "{not json").expect("junk should write");
        fs::write(dir.path().join("readme.txt"), "ignored").expect("text should write");

        let all = history(dir.path(), None).expect("history should load");
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn history_skips_files_that_are_not_utf8() {
        let dir = TempDir::new().expect("temp dir should be created");
        save(dir.path(), &record("alex", 0)).expect("record should save");
        fs::write(dir.path().join("junk.json"), [0xff, 0xfe, 0x00]).expect("junk should write");

        let all = history(dir.path(), None).expect("history should load");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user_name, "alex");
    }

    #[test]
    fn history_of_missing_dir_is_empty() {
        let dir = TempDir::new().expect("temp dir should be created");
        let records = history(&dir.path().join("absent"), None).expect("history should load");
        assert!(records.is_empty());
    }

    #[test]
    fn summary_counts_time_windows_and_primary_types() {
        let now = base_time() + Duration::hours(3);
        let records = vec![
            typed_record("a", 0, DiscType::D),
            typed_record("b", -10 * 60, DiscType::I),
            typed_record("c", -3 * 24 * 60, DiscType::I),
            typed_record("d", -8 * 24 * 60, DiscType::C),
        ];

        let summary = summary(&records, now);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.today, 1);
        assert_eq!(summary.last_week, 3);
        assert_eq!(summary.primary_types, TraitMap { d: 1, i: 2, s: 0, c: 1 });
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(summary(&[], base_time()), RecordSummary::default());
    }

    #[test]
    fn prune_removes_matching_records_only() {
        let dir = TempDir::new().expect("temp dir should be created");
        save(dir.path(), &record("alex", -60 * 24 * 40)).expect("record should save");
        save(dir.path(), &record("alex", 0)).expect("record should save");
        save(dir.path(), &record("sam", -60 * 24 * 40)).expect("record should save");

        let cutoff = base_time() - Duration::days(30);
        let removed = prune(
            dir.path(),
            PruneFilter {
                user: Some("alex"),
                completed_before: Some(cutoff),
            },
        )
        .expect("prune should succeed");
        assert_eq!(removed.len(), 1);

        let left = history(dir.path(), None).expect("history should load");
        assert_eq!(left.len(), 2);
        assert!(left.iter().any(|r| r.user_name == "sam"));
    }

    #[test]
    fn prune_without_criteria_removes_nothing() {
        let dir = TempDir::new().expect("temp dir should be created");
        save(dir.path(), &record("alex", 0)).expect("record should save");

        let removed = prune(dir.path(), PruneFilter::default()).expect("prune should succeed");
        assert!(removed.is_empty());
        assert_eq!(history(dir.path(), None).expect("history should load").len(), 1);
    }
}
