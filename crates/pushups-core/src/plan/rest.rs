//! Rest specification parsing.

use std::time::Duration;

use rand::Rng;
use regex::Regex;

/// Rest used when a specification carries no usable number.
pub const DEFAULT_REST_SECONDS: u64 = 60;

/// Recommended rest between two sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestSpec {
    /// Any duration within an inclusive range, e.g. `60-90s`
    Range { low: u64, high: u64 },

    /// A fixed duration, e.g. `90s` or `90s+`
    Fixed(u64),
}

impl RestSpec {
    /// Interpret a `RecommendedRest` cell.
    ///
    /// `60-90s` becomes a range; `90s+` and any other text use their first
    /// number. An inverted range or text without digits falls back to
    /// [`DEFAULT_REST_SECONDS`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pushups_core::plan::RestSpec;
    ///
    /// assert_eq!(RestSpec::parse("60-90s"), RestSpec::Range { low: 60, high: 90 });
    /// assert_eq!(RestSpec::parse("90s+"), RestSpec::Fixed(90));
    /// assert_eq!(RestSpec::parse("rest well"), RestSpec::Fixed(60));
    /// ```
    pub fn parse(spec: &str) -> Self {
        let spec = spec.trim();
        let range = Regex::new(r"^(\d+)-(\d+)s").ok();
        if let Some(caps) = range.as_ref().and_then(|re| re.captures(spec)) {
            let low = caps[1].parse::<u64>().unwrap_or(DEFAULT_REST_SECONDS);
            let high = caps[2].parse::<u64>().unwrap_or(DEFAULT_REST_SECONDS);
            return if low < high {
                RestSpec::Range { low, high }
            } else {
                RestSpec::Fixed(DEFAULT_REST_SECONDS)
            };
        }

        let seconds = Regex::new(r"\d+")
            .ok()
            .and_then(|re| re.find(spec).and_then(|m| m.as_str().parse().ok()))
            .unwrap_or(DEFAULT_REST_SECONDS);
        RestSpec::Fixed(seconds)
    }

    /// Pick the rest duration, drawing uniformly from a range.
    pub fn duration(&self) -> Duration {
        let seconds = match *self {
            RestSpec::Range { low, high } => rand::rng().random_range(low..=high),
            RestSpec::Fixed(seconds) => seconds,
        };
        Duration::from_secs(seconds)
    }
}
