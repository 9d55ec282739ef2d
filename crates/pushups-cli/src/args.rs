//! Command-line interface definitions using clap.
//!
//! Argument wrappers keep clap attributes out of the core crate and convert
//! into core types with `From` impls:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Types → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use pushups_core::{EditAction, Outcome, SessionKey};

/// Guided training tracker for the "100 pushups" progression plan
///
/// Runs plan sessions set by set with optional rest timers, scores each
/// session as SUCCESS, PARTIAL or INCOMPLETE, and keeps every attempt in a
/// CSV log with rotating backups. Without a subcommand the interactive menu
/// starts.
#[derive(Parser)]
#[command(version, about, name = "pushups")]
pub struct Args {
    /// Path to the attempt log CSV file. Defaults to
    /// $XDG_DATA_HOME/pushups/attempt_log.csv
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to a plan table CSV file. Defaults to the bundled plan
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Do not snapshot the log before changing it
    #[arg(long, global = true)]
    pub no_backup: bool,

    /// Number of log snapshots to keep; 0 keeps all of them
    #[arg(long, global = true, default_value_t = 5)]
    pub max_backups: usize,

    /// Score sessions with short sets as INCOMPLETE instead of PARTIAL
    #[arg(long, global = true)]
    pub no_partial: bool,

    /// Default the "Start rest timer?" answer to no
    #[arg(long, global = true)]
    pub no_timer: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the pushups CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu (the default)
    #[command(alias = "m")]
    Menu,
    /// Show the last attempt and the upcoming session
    #[command(alias = "st")]
    Status,
    /// Run the session after the last non-TEST attempt
    #[command(alias = "n")]
    Next,
    /// Run the session of the last non-TEST attempt again
    #[command(alias = "r")]
    Repeat,
    /// Run a specific session of the plan
    #[command(alias = "s")]
    Session(SessionArgs),
    /// Log a single-set max test
    #[command(alias = "t")]
    Test(TestArgs),
    /// List logged attempts with their indices
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Remove an attempt or change its outcome
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Show a text bar chart of all attempts
    #[command(alias = "c")]
    Chart,
    /// Merge attempts from another log file
    #[command(alias = "i")]
    Import(ImportArgs),
    /// Show plan entries
    #[command(alias = "p")]
    Plan(PlanArgs),
}

/// Run a specific session of the plan
#[derive(ClapArgs)]
pub struct SessionArgs {
    #[arg(help = "Plan week", value_parser = clap::value_parser!(i32).range(1..))]
    pub week: i32,
    #[arg(help = "Day of the week (1-3)", value_parser = clap::value_parser!(i32).range(1..=3))]
    pub day: i32,
    #[arg(help = "Plan column (1, 2 or 3)")]
    pub column: String,
}

impl From<SessionArgs> for SessionKey {
    fn from(val: SessionArgs) -> Self {
        SessionKey::new(val.week, val.day, val.column)
    }
}

/// Log a single-set max test
#[derive(ClapArgs)]
pub struct TestArgs {
    #[arg(help = "Pushups done in one unbroken set; prompted for when omitted")]
    pub count: Option<u32>,
}

/// List logged attempts
#[derive(ClapArgs)]
pub struct HistoryArgs {
    #[arg(short, long, help = "Show only the newest N attempts")]
    pub limit: Option<usize>,
}

/// Remove an attempt or change its outcome
///
/// The index is the one shown by `history`.
#[derive(ClapArgs)]
pub struct EditArgs {
    #[arg(help = "Index of the attempt as listed by `history`")]
    pub index: usize,
    #[command(subcommand)]
    pub action: EditCommand,
}

#[derive(Subcommand)]
pub enum EditCommand {
    /// Delete the attempt
    Remove,
    /// Replace the attempt's outcome
    Outcome {
        #[arg(
            help = "New outcome (SUCCESS, PARTIAL, INCOMPLETE or TEST)",
            value_parser = parse_outcome
        )]
        outcome: Outcome,
    },
}

impl From<EditCommand> for EditAction {
    fn from(val: EditCommand) -> Self {
        match val {
            EditCommand::Remove => EditAction::Remove,
            EditCommand::Outcome { outcome } => EditAction::SetOutcome(outcome),
        }
    }
}

/// Merge attempts from another log file
#[derive(ClapArgs)]
pub struct ImportArgs {
    #[arg(help = "Attempt log CSV file to import")]
    pub file: PathBuf,
}

/// Show plan entries
#[derive(ClapArgs)]
pub struct PlanArgs {
    #[arg(short, long, help = "Show only this week")]
    pub week: Option<i32>,
}

fn parse_outcome(value: &str) -> Result<Outcome, String> {
    value.parse::<Outcome>().map_err(|e| e.to_string())
}
