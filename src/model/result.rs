//! Result records produced by the worker.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Outcome value of a dispatched order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultValue {
    Bool(bool),
    Text(String),
    /// Structured echo of a list argument.
    List(Vec<String>),
    /// Written by `show_results`: how many entries the log held when it was
    /// dumped. The dump itself goes to the log output, never into the result.
    Report { entries: usize },
    /// The order name was not in the worker's registry.
    InvalidOrder,
    /// The handler failed; carries the error message.
    Fault(String),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Bool(b) => write!(f, "{}", b),
            ResultValue::Text(s) => write!(f, "{:?}", s),
            ResultValue::List(items) => write!(f, "{:?}", items),
            ResultValue::Report { entries } => write!(f, "<{} results>", entries),
            ResultValue::InvalidOrder => write!(f, "invalid_order"),
            ResultValue::Fault(e) => write!(f, "fault: {}", e),
        }
    }
}

/// One executed order: what ran, when it finished and what it returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderResult {
    pub order: String,
    pub time_done: DateTime<Utc>,
    pub result: ResultValue,
}

impl OrderResult {
    /// Stamps a result with the current time.
    pub fn now(order: impl Into<String>, result: ResultValue) -> Self {
        Self {
            order: order.into(),
            time_done: Utc::now(),
            result,
        }
    }
}

/// Append-only history of executed orders, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultLog {
    entries: Vec<OrderResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: OrderResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OrderResult] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrderResult> {
        self.entries.iter()
    }

    /// Pretty-printed JSON dump of every entry.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl IntoIterator for ResultLog {
    type Item = OrderResult;
    type IntoIter = std::vec::IntoIter<OrderResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_append_order() {
        let mut log = ResultLog::new();
        log.push(OrderResult::now("ping", ResultValue::Bool(true)));
        log.push(OrderResult::now("reverse", ResultValue::Text("cba".into())));
        log.push(OrderResult::now("nope", ResultValue::InvalidOrder));

        let names: Vec<&str> = log.iter().map(|r| r.order.as_str()).collect();
        assert_eq!(names, vec!["ping", "reverse", "nope"]);
        assert!(log.entries()[0].time_done <= log.entries()[2].time_done);
    }

    #[test]
    fn test_invalid_order_serializes_as_sentinel() {
        let json = serde_json::to_value(&ResultValue::InvalidOrder).unwrap();
        assert_eq!(json, serde_json::json!("invalid_order"));

        let json = serde_json::to_value(&ResultValue::Bool(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "bool": true }));

        let json = serde_json::to_value(&ResultValue::Report { entries: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "report": { "entries": 2 } }));
    }

    #[test]
    fn test_pretty_json_dump_lists_entries() {
        let mut log = ResultLog::new();
        log.push(OrderResult::now("ping", ResultValue::Bool(true)));

        let dump = log.to_pretty_json().unwrap();
        assert!(dump.starts_with('['));
        assert!(dump.contains("\"order\": \"ping\""));
        assert!(dump.contains("\"time_done\""));
    }
}
