//! The handlers behind each [`Command`].
//!
//! Handlers run synchronously on the worker task and have no timeout: a handler
//! that never returns stalls the whole loop.

use super::registry::{Command, Reversible};
use crate::model::{ResultLog, ResultValue};
use tracing::{info, warn};

/// Executes a bound command against the worker's current log.
pub fn execute(command: Command, results: &ResultLog) -> ResultValue {
    match command {
        Command::Ping => ResultValue::Bool(ping()),
        Command::Reverse(input) => reverse(input).into(),
        Command::ShowResults => show_results(results),
    }
}

/// Liveness check; always succeeds.
pub fn ping() -> bool {
    true
}

/// Reverses the characters of a scalar, or the elements of a list.
pub fn reverse(input: Reversible) -> Reversible {
    match input {
        Reversible::Text(s) => Reversible::Text(s.chars().rev().collect()),
        Reversible::List(mut items) => {
            items.reverse();
            Reversible::List(items)
        }
    }
}

/// Logs the full result log and returns how many entries it held. Does not clear the log.
pub fn show_results(results: &ResultLog) -> ResultValue {
    match results.to_pretty_json() {
        Ok(dump) => info!(count = results.len(), "Results:\n{}", dump),
        Err(e) => {
            warn!(error = %e, "Could not render results as JSON");
            info!(count = results.len(), "Results:\n{:#?}", results.entries());
        }
    }
    ResultValue::Report {
        entries: results.len(),
    }
}

impl From<Reversible> for ResultValue {
    fn from(value: Reversible) -> Self {
        match value {
            Reversible::Text(s) => ResultValue::Text(s),
            Reversible::List(items) => ResultValue::List(items),
        }
    }
}
