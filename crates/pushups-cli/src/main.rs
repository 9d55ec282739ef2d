//! Pushups CLI Application
//!
//! Command-line interface for the 100 pushups training tracker.

mod args;
mod cli;
mod console;
mod renderer;
mod timer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use pushups_core::TrackerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        log_file,
        plan_file,
        no_backup,
        max_backups,
        no_partial,
        no_timer,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_log_path(log_file)
        .with_plan_path(plan_file)
        .with_backups(!no_backup)
        .with_max_backups(max_backups)
        .with_partial_success(!no_partial)
        .with_rest_timer_default(!no_timer)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!(
        "Pushups tracker started with log '{}'",
        tracker.config().log_path().display()
    );

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    match command {
        None | Some(Menu) => cli.menu().await,
        Some(Status) => cli.status().await,
        Some(Next) => cli.next().await,
        Some(Repeat) => cli.repeat().await,
        Some(Session(args)) => cli.session(args.into()).await,
        Some(Test(args)) => cli.test(args.count).await,
        Some(History(args)) => cli.history(args.limit).await,
        Some(Edit(args)) => cli.edit(args.index, args.action.into()).await,
        Some(Chart) => cli.chart().await,
        Some(Import(args)) => cli.import(&args.file).await,
        Some(Plan(args)) => cli.plan(args.week).await,
    }
}
