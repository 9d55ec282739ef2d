//! Set specification parsing.

/// Prefix of open-ended sets, compared against the upper-cased spec.
const MAX_PREFIX: &str = "MAX≥";

/// Minimum repetitions required by a set specification.
///
/// A plain integer is returned as is and `MAX≥K` yields `K`. Anything that
/// cannot be parsed yields 0, so a malformed target never fails a set.
///
/// # Examples
///
/// ```rust
/// use pushups_core::plan::parse_minimum;
///
/// assert_eq!(parse_minimum("10"), 10);
/// assert_eq!(parse_minimum("MAX≥12"), 12);
/// assert_eq!(parse_minimum("garbage"), 0);
/// ```
pub fn parse_minimum(spec: &str) -> u32 {
    let normalized = spec.trim().to_uppercase();
    match normalized.strip_prefix(MAX_PREFIX) {
        Some(rest) => {
            if rest.contains('≥') {
                return 0;
            }
            rest.trim().parse().unwrap_or(0)
        }
        None => normalized.parse().unwrap_or(0),
    }
}

/// Whether a set specification is an open-ended `MAX≥K` set.
pub fn is_max_spec(spec: &str) -> bool {
    spec.to_uppercase().contains(MAX_PREFIX)
}
