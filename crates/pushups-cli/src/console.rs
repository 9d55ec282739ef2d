//! Line-based operator prompts.
//!
//! [`Console`] reads answers from any `BufRead` and writes prompts to any
//! `Write`, so the interactive flows can be driven from tests. Invalid
//! answers are re-prompted; end of input is an `UnexpectedEof` error.

use std::{
    fmt::Display,
    io::{self, BufRead, Stdin, StdinLock, Stdout, Write},
    str::FromStr,
};

use pushups_core::{RestSpec, RestTimer, SetAction, SetPrompt};

use crate::timer::Clock;

/// Prompt/answer channel for interactive flows.
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Console bound to the process's stdin and stdout.
pub type StdConsole = Console<StdinLock<'static>, Stdout>;

impl StdConsole {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Print `prompt` and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Read a non-negative integer, re-prompting until one is given.
    pub fn ask_count(&mut self, prompt: &str) -> io::Result<u32> {
        loop {
            match self.ask(prompt)?.parse::<u32>() {
                Ok(count) => return Ok(count),
                Err(_) => self.say("Invalid input. Please enter a non-negative integer.")?,
            }
        }
    }

    /// Read an integer within `min..=max`, re-prompting until one is given.
    pub fn ask_in_range<T>(&mut self, prompt: &str, min: T, max: T) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            match self.ask(prompt)?.parse::<T>() {
                Ok(value) if value >= min && value <= max => return Ok(value),
                _ => self.say(format!("Please enter an integer between {min} and {max}."))?,
            }
        }
    }

    /// Read one of `choices`, case-insensitively, re-prompting otherwise.
    pub fn ask_choice(&mut self, prompt: &str, choices: &[&str]) -> io::Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
                return Ok(choice.to_string());
            }
        }
    }

    /// Yes/no question; an empty answer takes `default`.
    pub fn ask_yes_no(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}

/// Operator side of a guided session: set prompts plus rest periods.
pub struct InteractiveSession<R, W, C> {
    console: Console<R, W>,
    clock: C,
    rest_default: bool,
}

impl<R: BufRead, W: Write, C: Clock> InteractiveSession<R, W, C> {
    pub fn new(console: Console<R, W>, clock: C, rest_default: bool) -> Self {
        Self {
            console,
            clock,
            rest_default,
        }
    }
}

impl<R: BufRead, W: Write, C: Clock> SetPrompt for InteractiveSession<R, W, C> {
    fn confirm_set(&mut self, number: usize, spec: &str) -> io::Result<SetAction> {
        self.console.say(format!("Set {number}: {spec} pushups."))?;
        let answer = self
            .console
            .ask("Press Enter to confirm completion or type 'quit' to stop: ")?;
        if answer.eq_ignore_ascii_case("quit") {
            self.console.say("Session was stopped before completion.")?;
            Ok(SetAction::Quit)
        } else {
            Ok(SetAction::Completed)
        }
    }

    fn final_set_count(&mut self, _number: usize, spec: &str) -> io::Result<u32> {
        self.console.say(format!("Final set: {spec} pushups."))?;
        self.console
            .ask_count("How many pushups were completed in the final set? ")
    }
}

impl<R: BufRead, W: Write, C: Clock> RestTimer for InteractiveSession<R, W, C> {
    fn rest(&mut self, rest: &RestSpec, upcoming: &str) -> io::Result<()> {
        self.console
            .say(format!("Next set will be: {upcoming} pushups.\n"))?;

        let default = if self.rest_default { "y" } else { "n" };
        let start = self.console.ask_yes_no(
            &format!("Start rest timer? (default={default}): "),
            self.rest_default,
        )?;
        if !start {
            return Ok(());
        }

        let seconds = rest.duration().as_secs();
        self.console.say(format!(
            "\nRest for {seconds} second(s) (press Ctrl+C to skip)."
        ))?;
        if self.clock.countdown(seconds)? {
            self.console.say("\nRest complete!\n")
        } else {
            self.console.say("\nRest timer skipped!\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use pushups_core::{models::PlanEntry, SessionRunner, SetResult};

    use super::*;

    /// Clock that records requested durations without waiting.
    #[derive(Default)]
    struct FakeClock {
        requested: Vec<u64>,
        finish: bool,
    }

    impl Clock for FakeClock {
        fn countdown(&mut self, seconds: u64) -> io::Result<bool> {
            self.requested.push(seconds);
            Ok(self.finish)
        }
    }

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn entry() -> PlanEntry {
        PlanEntry {
            week: 1,
            day: 1,
            column: "1".to_string(),
            sets: vec!["2".to_string(), "3".to_string(), "MAX≥3".to_string()],
            rest: "60s".to_string(),
        }
    }

    #[test]
    fn test_ask_count_reprompts() {
        let mut console = console("abc\n-1\n7\n");
        assert_eq!(console.ask_count("Count? ").expect("answer"), 7);

        let output = String::from_utf8(console.output).expect("utf-8");
        assert_eq!(output.matches("Count? ").count(), 3);
        assert_eq!(
            output
                .matches("Invalid input. Please enter a non-negative integer.")
                .count(),
            2
        );
    }

    #[test]
    fn test_ask_in_range() {
        let mut console = console("0\n4\n3\n");
        assert_eq!(console.ask_in_range("Day? ", 1, 3).expect("answer"), 3);
        let output = String::from_utf8(console.output).expect("utf-8");
        assert!(output.contains("Please enter an integer between 1 and 3."));
    }

    #[test]
    fn test_ask_choice_is_case_insensitive() {
        let mut console = console("x\nR\n");
        assert_eq!(
            console.ask_choice("Choice? ", &["r", "m", "c"]).expect("answer"),
            "r"
        );
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut console = console("");
        let err = console.ask("Anything? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_yes_no_default() {
        let mut console = console("\nno\nYES\n");
        assert!(console.ask_yes_no("? ", true).expect("answer"));
        assert!(!console.ask_yes_no("? ", true).expect("answer"));
        assert!(console.ask_yes_no("? ", false).expect("answer"));
    }

    #[test]
    fn test_interactive_session_full_run() {
        // Confirm, skip timer, confirm, take timer, final count
        let input = "\nn\n\n\n4\n";
        let mut session = InteractiveSession::new(
            console(input),
            FakeClock {
                finish: true,
                ..Default::default()
            },
            true,
        );

        let run = SessionRunner::new(&mut session)
            .run(&entry())
            .expect("session should run");

        assert!(run.completed);
        assert_eq!(
            run.results,
            vec![
                SetResult::new(2, 2),
                SetResult::new(3, 3),
                SetResult::new(4, 3)
            ]
        );
        assert_eq!(session.clock.requested, vec![60]);

        let output = String::from_utf8(session.console.output).expect("utf-8");
        assert!(output.contains("Set 1: 2 pushups."));
        assert!(output.contains("Next set will be: MAX≥3 pushups."));
        assert!(output.contains("Final set: MAX≥3 pushups."));
        assert!(output.contains("Rest complete!"));
    }

    #[test]
    fn test_interactive_session_quit() {
        let mut session = InteractiveSession::new(console("quit\n"), FakeClock::default(), false);

        let run = SessionRunner::new(&mut session)
            .run(&entry())
            .expect("session should run");

        assert!(!run.completed);
        assert!(run.results.is_empty());
        let output = String::from_utf8(session.console.output).expect("utf-8");
        assert!(output.contains("Session was stopped before completion."));
    }

    #[test]
    fn test_skipped_rest_is_reported() {
        let mut session = InteractiveSession::new(console("y\n"), FakeClock::default(), false);

        session
            .rest(&RestSpec::Fixed(45), "10")
            .expect("rest should run");

        assert_eq!(session.clock.requested, vec![45]);
        let output = String::from_utf8(session.console.output).expect("utf-8");
        assert!(output.contains("Start rest timer? (default=n): "));
        assert!(output.contains("Rest timer skipped!"));
    }
}
