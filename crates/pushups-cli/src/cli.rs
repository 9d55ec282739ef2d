//! Command handlers.
//!
//! Each handler calls the [`Tracker`], wraps the result in a display type
//! from `pushups_core::display` and renders it as markdown. Anything that
//! reads stdin runs on tokio's blocking pool through a fresh [`StdConsole`].

use std::{io, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use pushups_core::{
    display::{
        Attempts, EditResult, ImportResult, LoggedResult, OperationStatus, PlanEntries,
        ProgressChart,
    },
    EditAction, NextSession, Outcome, PlanEntry, SessionKey, SessionRunner, Tracker,
};
use tokio::{runtime::Handle, task};

use crate::{
    console::{InteractiveSession, StdConsole},
    renderer::TerminalRenderer,
    timer::Countdown,
};

const MENU: &str = "\
## Menu

1) Attempt the next session (based on last NON-TEST attempt)
2) Repeat the last NON-TEST attempt
3) Specify a session (Week/Day/Column)
4) Perform a TEST (single-set max pushups)
5) Edit/Remove attempts in the log
6) Exit
";

/// Command handlers bound to one tracker and renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Last attempt, test suggestion and upcoming session.
    pub async fn status(&self) -> Result<()> {
        let status = self
            .tracker
            .status()
            .await
            .context("Failed to read progress")?;
        self.renderer.render(&status.to_string())
    }

    /// Run the session after the last normal attempt.
    pub async fn next(&self) -> Result<()> {
        let last = self
            .tracker
            .last_normal_attempt()
            .await
            .context("Failed to read the attempt log")?
            .ok_or_else(|| {
                anyhow!(
                    "No normal (non-TEST) attempt found. Use `session` to specify an initial \
                     session."
                )
            })?;

        let key = match self.tracker.reporter().next_session(&last) {
            NextSession::Scheduled(key) => key,
            NextSession::PlanComplete => {
                bail!("The plan is complete. Perform a TEST to measure your max.")
            }
        };
        let entry = self
            .tracker
            .find_entry(&key)
            .context("Try specifying a session manually")?;

        self.run_entry(entry).await
    }

    /// Run the session of the last normal attempt again.
    pub async fn repeat(&self) -> Result<()> {
        let last = self
            .tracker
            .last_normal_attempt()
            .await
            .context("Failed to read the attempt log")?
            .ok_or_else(|| anyhow!("No normal (non-TEST) attempt to repeat."))?;
        let entry = self.tracker.find_entry(&last.key())?;

        self.renderer.render("Repeating the last session:\n\n")?;
        self.run_entry(entry).await
    }

    /// Run a specific plan session.
    pub async fn session(&self, key: SessionKey) -> Result<()> {
        let entry = self.tracker.find_entry(&key)?;
        self.run_entry(entry).await
    }

    /// Log a TEST, prompting for the count when none is given.
    pub async fn test(&self, count: Option<u32>) -> Result<()> {
        let count = match count {
            Some(count) => count,
            None => {
                prompt(|console| {
                    console
                        .ask_count("Enter the maximum number of pushups in a single unbroken set: ")
                })
                .await?
            }
        };

        let record = self
            .tracker
            .log_test(count)
            .await
            .context("Failed to log the TEST attempt")?;
        self.renderer.render(&LoggedResult::new(&record).to_string())
    }

    /// Indexed attempt list, optionally limited to the newest entries.
    pub async fn history(&self, limit: Option<usize>) -> Result<()> {
        let records = self
            .tracker
            .attempts()
            .await
            .context("Failed to read the attempt log")?;
        let attempts = match limit {
            Some(limit) => Attempts::tail(records, limit),
            None => Attempts::new(records),
        };

        self.renderer
            .render(&format!("## Attempt Log\n\n{attempts}"))
    }

    /// Remove an attempt or change its outcome.
    pub async fn edit(&self, index: usize, action: EditAction) -> Result<()> {
        let record = self
            .tracker
            .edit_attempt(index, action)
            .await
            .context("Failed to edit the attempt log")?;
        self.renderer
            .render(&EditResult::new(index, action, &record).to_string())
    }

    /// Bar chart of every attempt.
    pub async fn chart(&self) -> Result<()> {
        let records = self
            .tracker
            .attempts()
            .await
            .context("Failed to read the attempt log")?;
        let last_normal = records.iter().rev().find(|r| !r.is_test());
        let suggest_test = self.tracker.reporter().suggest_test(last_normal);

        let chart = ProgressChart::new(&records).with_test_suggestion(suggest_test);
        self.renderer.render(&chart.to_string())
    }

    /// Merge another attempt log into this one.
    pub async fn import(&self, source: &Path) -> Result<()> {
        let summary = self
            .tracker
            .import(source)
            .await
            .with_context(|| format!("Failed to import '{}'", source.display()))?;
        self.renderer
            .render(&ImportResult::new(source, summary).to_string())
    }

    /// Plan entries, optionally for one week only.
    pub async fn plan(&self, week: Option<i32>) -> Result<()> {
        let catalog = self.tracker.catalog();
        let entries: Vec<PlanEntry> = match week {
            Some(week) => catalog.week(week).cloned().collect(),
            None => catalog.entries().to_vec(),
        };

        self.renderer.render(&PlanEntries(entries).to_string())
    }

    /// Interactive menu loop. End of input exits like choosing 6.
    pub async fn menu(&self) -> Result<()> {
        loop {
            self.chart().await?;
            println!();
            self.status().await?;
            println!();
            self.renderer.render(MENU)?;

            let Some(choice) = prompt_or_eof("Enter menu choice: ").await? else {
                println!();
                return Ok(());
            };
            debug!("Menu choice '{choice}'");

            let result = match choice.as_str() {
                "1" => self.next().await,
                "2" => self.repeat().await,
                "3" => self.pick_session().await,
                "4" => self.test(None).await,
                "5" => self.edit_interactive().await,
                "6" => {
                    return self.renderer.render("Exiting the 100 Pushups tracker.\n");
                }
                _ => {
                    self.renderer.render("Invalid choice. Please try again.\n")?;
                    continue;
                }
            };

            if let Err(e) = result {
                self.renderer
                    .render(&OperationStatus::failure(format!("{e:#}")).to_string())?;
            }
        }
    }

    /// Ask for week, day and column, then run that session.
    async fn pick_session(&self) -> Result<()> {
        let final_week = self.tracker.reporter().final_week();
        let columns: Vec<String> = self
            .tracker
            .catalog()
            .columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        if columns.is_empty() {
            bail!("The plan is empty; no sessions available.");
        }

        let key = prompt(move |console| {
            let week =
                console.ask_in_range(&format!("Enter Week (1-{final_week}): "), 1, final_week)?;
            let day = console.ask_in_range("Enter Day (1-3): ", 1, 3)?;
            let choices: Vec<&str> = columns.iter().map(String::as_str).collect();
            let column = console.ask_choice(
                &format!("Enter Column ({}): ", choices.join(", ")),
                &choices,
            )?;
            Ok(SessionKey::new(week, day, column))
        })
        .await?;

        match self.tracker.find_entry(&key) {
            Ok(entry) => self.run_entry(entry).await,
            Err(_) => self
                .renderer
                .render("No matching session was found in the plan.\n"),
        }
    }

    /// Pick an attempt from the full list and remove or relabel it.
    async fn edit_interactive(&self) -> Result<()> {
        let records = self
            .tracker
            .attempts()
            .await
            .context("Failed to read the attempt log")?;
        if records.is_empty() {
            return self
                .renderer
                .render("No attempts in the log. Nothing to edit.\n");
        }

        let attempts = Attempts::new(records);
        self.renderer
            .render(&format!("## Edit Attempt Log\n\n{attempts}\n"))?;

        let selection = prompt(|console| {
            console.ask("Enter the index of the attempt to edit/remove (or 'cancel' to exit): ")
        })
        .await?;
        if selection.eq_ignore_ascii_case("cancel") {
            return self.renderer.render("Edit canceled.\n");
        }
        let Ok(index) = selection.parse::<usize>() else {
            return self.renderer.render("Invalid selection.\n");
        };
        if index >= attempts.len() {
            return self.renderer.render("Invalid index.\n");
        }

        self.renderer
            .render(&format!("Selected attempt: {}\n\n", &attempts[index]))?;
        let action = prompt(|console| {
            console.say("What would you like to do with this attempt?")?;
            console.say("1) Remove the attempt (r)")?;
            console.say("2) Modify the outcome (m)")?;
            console.say("3) Cancel and do nothing (c)")?;
            let choice = console.ask("Enter your choice: ")?.to_lowercase();
            match choice.as_str() {
                "1" | "r" => Ok(Some(EditAction::Remove)),
                "2" | "m" => {
                    let value =
                        console.ask("Enter new outcome (SUCCESS, PARTIAL, INCOMPLETE, TEST): ")?;
                    match value.parse::<Outcome>() {
                        Ok(outcome) => Ok(Some(EditAction::SetOutcome(outcome))),
                        Err(_) => {
                            console.say("Invalid outcome.")?;
                            Ok(None)
                        }
                    }
                }
                "3" | "c" => {
                    console.say("No changes made.")?;
                    Ok(None)
                }
                _ => {
                    console.say("No valid action specified. No changes made.")?;
                    Ok(None)
                }
            }
        })
        .await?;

        match action {
            Some(action) => self.edit(index, action).await,
            None => Ok(()),
        }
    }

    /// Walk the operator through `entry` and log the result.
    async fn run_entry(&self, entry: PlanEntry) -> Result<()> {
        self.renderer.render(&format!("## Session\n\n{entry}"))?;

        let rest_default = self.tracker.config().rest_timer_default;
        let handle = Handle::current();
        let runner_entry = entry.clone();
        let run = task::spawn_blocking(move || {
            let mut session =
                InteractiveSession::new(StdConsole::stdio(), Countdown::new(handle), rest_default);
            SessionRunner::new(&mut session).run(&runner_entry)
        })
        .await
        .context("Session task failed")?
        .context("Session was interrupted")?;

        let record = self
            .tracker
            .log_session(&entry.key(), &run)
            .await
            .context("Failed to log the session")?;
        println!();
        self.renderer.render(&LoggedResult::new(&record).to_string())
    }
}

/// Run a console interaction on the blocking pool.
async fn prompt<T, F>(interaction: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut StdConsole) -> io::Result<T> + Send + 'static,
{
    task::spawn_blocking(move || interaction(&mut StdConsole::stdio()))
        .await
        .context("Prompt task failed")?
        .context("Failed to read input")
}

/// Ask one question; `None` when stdin is closed.
async fn prompt_or_eof(question: &'static str) -> Result<Option<String>> {
    task::spawn_blocking(move || match StdConsole::stdio().ask(question) {
        Ok(answer) => Ok(Some(answer)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    })
    .await
    .context("Prompt task failed")?
    .context("Failed to read input")
}
