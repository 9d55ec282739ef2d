//! Rest-timer countdown.
//!
//! The countdown runs on the tokio runtime from a blocking thread and stops
//! early on Ctrl+C. Once the Ctrl+C listener has been registered it stays in
//! place for the rest of the process, so Ctrl+C no longer terminates the
//! program after the first rest period.

use std::{
    io::{self, Write},
    time::Duration,
};

use log::debug;
use tokio::{runtime::Handle, signal, time};

/// Source of rest periods.
pub trait Clock {
    /// Count `seconds` down. Returns `false` when the countdown was cut short.
    fn countdown(&mut self, seconds: u64) -> io::Result<bool>;
}

/// Countdown printed to stdout, one tick per second.
pub struct Countdown {
    handle: Handle,
}

impl Countdown {
    /// Countdown driven by the given runtime. Must be used from a thread
    /// that is not itself running async code, such as a `spawn_blocking`
    /// task.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Clock for Countdown {
    fn countdown(&mut self, seconds: u64) -> io::Result<bool> {
        self.handle.block_on(async move {
            let mut ticks = time::interval(Duration::from_secs(1));
            let mut stdout = io::stdout();

            for remaining in (1..=seconds).rev() {
                tokio::select! {
                    _ = ticks.tick() => {
                        write!(stdout, "\r{remaining} ")?;
                        stdout.flush()?;
                    }
                    result = signal::ctrl_c() => {
                        result?;
                        debug!("Rest timer interrupted with {remaining}s left");
                        return Ok(false);
                    }
                }
            }

            // The last tick only marks the end of the final second
            tokio::select! {
                _ = ticks.tick() => Ok::<_, io::Error>(true),
                result = signal::ctrl_c() => result.map(|()| false),
            }
        })
    }
}
