use std::fmt::Debug;

use regex_raptor::Regex;

/// Runs `check` against every row of a table. Failures are collected so
/// that a single run reports every row that failed, not just the first.
pub fn run<T: Debug>(
    rows: &[T],
    mut check: impl FnMut(&T) -> Result<(), String>,
) {
    let mut failures = vec![];
    for row in rows.iter() {
        if let Err(msg) = check(row) {
            failures.push(format!("{:?}\n    {}", row, msg));
        }
    }
    if !failures.is_empty() {
        panic!(
            "{} of {} rows failed:\n{}",
            failures.len(),
            rows.len(),
            failures.join("\n"),
        );
    }
}

/// Compiles `pattern` and runs a search over `haystack`.
pub fn search(pattern: &str, haystack: &str) -> Result<Regex, String> {
    let mut re = Regex::new(pattern).map_err(|err| err.to_string())?;
    re.match_count(haystack);
    Ok(re)
}

/// Returns an error describing the mismatch if `got` isn't `expected`.
pub fn expect<T: Debug + PartialEq>(
    what: &str,
    expected: T,
    got: T,
) -> Result<(), String> {
    if expected == got {
        Ok(())
    } else {
        Err(format!("{}: expected {:?}, got {:?}", what, expected, got))
    }
}
