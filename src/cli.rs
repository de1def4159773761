use crate::types::trait_type::DiscType;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "disc", version, about = "DISC personality assessment scoring CLI")]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding disc.toml; relative config paths resolve against it
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a completed answer sheet
    Score(ScoreCommand),
    /// Report whether an answer sheet is ready to be scored
    Check(CheckCommand),
    /// List the questions of a bank
    Bank(BankCommand),
    /// List saved results, newest first
    History(HistoryCommand),
    /// Summarise saved results: totals, recent activity, primary types
    Stats(StatsCommand),
    /// Delete saved results by respondent and/or age
    Prune(PruneCommand),
    /// Describe one DISC type
    Profile(ProfileCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Answer sheet (JSON answer set, or an object with userName and answers)
    pub answers: PathBuf,
    /// Question bank file (.toml or .json); defaults to the built-in bank
    #[arg(long)]
    pub bank: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Respondent name; overrides the name in the answer sheet
    #[arg(long)]
    pub user: Option<String>,
    /// Score even when some questions are unanswered
    #[arg(long)]
    pub partial: bool,
    /// Save a result record to the records directory
    #[arg(long)]
    pub save: bool,
    #[arg(long)]
    pub records_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub answers: PathBuf,
    #[arg(long)]
    pub bank: Option<PathBuf>,
}

#[derive(Args)]
pub struct BankCommand {
    #[arg(long)]
    pub bank: Option<PathBuf>,
}

#[derive(Args)]
pub struct HistoryCommand {
    /// Only show results for this respondent
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub records_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct StatsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long)]
    pub records_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct PruneCommand {
    /// Only delete results for this respondent
    #[arg(long, required_unless_present = "older_than_days")]
    pub user: Option<String>,
    /// Only delete results completed more than this many days ago
    #[arg(long, required_unless_present = "user")]
    pub older_than_days: Option<u32>,
    #[arg(long)]
    pub records_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ProfileCommand {
    /// D, I, S or C
    pub trait_type: DiscType,
}
