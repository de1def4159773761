mod bank;
mod cli;
mod config;
mod error;
mod profile;
mod records;
mod report;
mod scoring;
mod sheet;
mod types;

use crate::error::DiscError;
use crate::types::config::{DiscConfig, ReportFormatSetting};
use crate::types::report::{ResultRecord, ScoreReport};
use chrono::{Duration, Utc};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn bank_path(root: &Path, flag: Option<&Path>, config: &DiscConfig) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| config.bank_path().map(|path| root.join(path)))
}

fn run() -> Result<i32, DiscError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.root)?;
    if loaded.is_none() {
        info!(root = %cli.root.display(), "no disc.toml found, using defaults");
    }
    let config = loaded.unwrap_or_default();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let bank = bank::resolve(bank_path(&cli.root, cmd.bank.as_deref(), &config).as_deref())?;
            let sheet = sheet::read(&cmd.answers)?;

            let conflicts = scoring::completeness::conflicting_questions(&sheet.answers);
            if !conflicts.is_empty() {
                eprintln!(
                    "error: most-like and least-like must differ (questions {})",
                    join_ids(&conflicts)
                );
                return Ok(exit_code::BLOCKING);
            }
            if !cmd.partial && !scoring::completeness::is_test_complete(&bank, &sheet.answers) {
                let missing = scoring::completeness::missing_questions(&bank, &sheet.answers);
                eprintln!(
                    "incomplete: {} unanswered question(s): {} (use --partial to score anyway)",
                    missing.len(),
                    join_ids(&missing)
                );
                return Ok(exit_code::WARNINGS);
            }

            let results = scoring::score(&bank, &sheet.answers)?;
            let statistics = scoring::statistics::selection_stats(&bank, &sheet.answers);
            let user_name = cmd.user.or(sheet.user_name);

            let mut completed_at = None;
            if cmd.save {
                let record = ResultRecord::new(
                    user_name.clone().unwrap_or_default(),
                    sheet.answers,
                    results.clone(),
                );
                let dir = cmd
                    .records_dir
                    .unwrap_or_else(|| cli.root.join(config.records_dir()));
                let path = records::save(&dir, &record)?;
                completed_at = Some(record.completed_at);
                eprintln!("saved: {}", path.display());
            }

            let score_report = ScoreReport {
                user_name,
                profile: profile::profile(results.primary_type),
                results,
                statistics,
                completed_at,
            };
            let output_format = match cmd.format {
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                None => match config.report_format() {
                    Some(ReportFormatSetting::Json) => report::OutputFormat::Json,
                    Some(ReportFormatSetting::Md) | None => report::OutputFormat::Md,
                },
            };
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let bank = bank::resolve(bank_path(&cli.root, cmd.bank.as_deref(), &config).as_deref())?;
            let sheet = sheet::read(&cmd.answers)?;

            let (answered, total) = scoring::completeness::progress(&bank, &sheet.answers);
            println!("progress: {answered}/{total}");

            let unknown = sheet
                .answers
                .keys()
                .filter(|id| bank.get(**id).is_none())
                .copied()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                warn!(questions = %join_ids(&unknown), "answers reference questions outside the bank");
                println!("unknown: {}", join_ids(&unknown));
            }

            let conflicts = scoring::completeness::conflicting_questions(&sheet.answers);
            if !conflicts.is_empty() {
                println!("conflicting: {}", join_ids(&conflicts));
                return Ok(exit_code::BLOCKING);
            }

            if scoring::completeness::is_test_complete(&bank, &sheet.answers) && unknown.is_empty() {
                println!("check: complete");
                Ok(exit_code::SUCCESS)
            } else {
                let missing = scoring::completeness::missing_questions(&bank, &sheet.answers);
                if !missing.is_empty() {
                    println!("missing: {}", join_ids(&missing));
                }
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Bank(cmd) => {
            let bank = bank::resolve(bank_path(&cli.root, cmd.bank.as_deref(), &config).as_deref())?;
            for question in &bank.questions {
                let options = question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| format!("{index}:{} [{}]", option.text, option.trait_type))
                    .collect::<Vec<_>>();
                println!("{:>3}. {}", question.id, options.join("  "));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let dir = cmd
                .records_dir
                .unwrap_or_else(|| cli.root.join(config.records_dir()));
            let history = records::history(&dir, cmd.user.as_deref())?;
            if history.is_empty() {
                println!("history: no results");
                return Ok(exit_code::SUCCESS);
            }
            for record in &history {
                let percentages = record
                    .results
                    .percentages
                    .iter()
                    .map(|(ty, pct)| format!("{ty}={pct}%"))
                    .collect::<Vec<_>>();
                println!(
                    "{} {} {} [{}]",
                    record.completed_at.format("%Y-%m-%d %H:%M"),
                    record.user_name,
                    record.results.primary_type,
                    percentages.join(" ")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Stats(cmd) => {
            let dir = cmd
                .records_dir
                .unwrap_or_else(|| cli.root.join(config.records_dir()));
            let history = records::history(&dir, None)?;
            let summary = records::summary(&history, Utc::now());
            match cmd.format {
                Some(cli::ReportFormat::Json) => {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                }
                Some(cli::ReportFormat::Md) | None => {
                    let spread = summary
                        .primary_types
                        .iter()
                        .map(|(ty, count)| format!("{ty}={count}"))
                        .collect::<Vec<_>>();
                    println!("total: {}", summary.total);
                    println!("today: {}", summary.today);
                    println!("last 7 days: {}", summary.last_week);
                    println!("primary types: {}", spread.join(" "));
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Prune(cmd) => {
            let dir = cmd
                .records_dir
                .unwrap_or_else(|| cli.root.join(config.records_dir()));
            let filter = records::PruneFilter {
                user: cmd.user.as_deref(),
                completed_before: cmd
                    .older_than_days
                    .map(|days| Utc::now() - Duration::days(i64::from(days))),
            };
            let removed = records::prune(&dir, filter)?;
            info!(count = removed.len(), dir = %dir.display(), "records pruned");
            println!("pruned: {} record(s)", removed.len());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Profile(cmd) => {
            let profile = profile::profile(cmd.trait_type);
            println!("{} ({}): {}", profile.name, profile.trait_type, profile.subtitle);
            println!("{}", profile.summary);
            println!("strengths: {}", profile.strengths.join(", "));
            println!("development areas: {}", profile.development_areas.join(", "));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
