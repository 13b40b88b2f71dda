//! # Order Registry
//!
//! The set of commands a worker can actually execute.
//!
//! Every command the crate knows how to run is a variant of [`CommandKind`].
//! A deployment declares an allow-list of names; at construction the worker
//! keeps only the allow-list names that map onto a `CommandKind`, so the
//! registry never contains anything outside the allow-list. Names without a
//! handler are skipped rather than rejected, which lets deployments share one
//! allow-list while shipping different handler sets.
//!
//! Once an order's name resolves, [`CommandKind::bind`] attaches the order's
//! argument and produces a [`Command`], which the worker dispatches with a `match`.

use crate::model::{OrderArg, OrderError};
use std::collections::BTreeMap;
use tracing::debug;

/// Command names recognized by a default deployment.
pub const VALID_ORDERS: &[&str] = &["ping", "reverse", "show_results"];

/// A command with a handler, before its argument is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CommandKind {
    Ping,
    Reverse,
    ShowResults,
}

impl CommandKind {
    pub const ALL: [CommandKind; 3] = [CommandKind::Ping, CommandKind::Reverse, CommandKind::ShowResults];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Ping => "ping",
            CommandKind::Reverse => "reverse",
            CommandKind::ShowResults => "show_results",
        }
    }

    /// Attaches an order argument, checking it against the command's arity.
    pub fn bind(self, arg: OrderArg) -> Result<Command, OrderError> {
        let order = self.name().to_string();
        match (self, arg) {
            (CommandKind::Ping, OrderArg::None) => Ok(Command::Ping),
            (CommandKind::ShowResults, OrderArg::None) => Ok(Command::ShowResults),
            (CommandKind::Ping | CommandKind::ShowResults, _) => {
                Err(OrderError::UnexpectedArgument { order })
            }
            (CommandKind::Reverse, OrderArg::None) => Err(OrderError::MissingArgument { order }),
            (CommandKind::Reverse, OrderArg::Scalar(s)) => Ok(Command::Reverse(Reversible::Text(s))),
            (CommandKind::Reverse, OrderArg::List(items)) => {
                Ok(Command::Reverse(Reversible::List(items)))
            }
        }
    }
}

/// Input (and output) of `reverse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reversible {
    Text(String),
    List(Vec<String>),
}

/// A resolved order, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Reverse(Reversible),
    ShowResults,
}

/// Name → command mapping, built once and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct OrderRegistry {
    commands: BTreeMap<String, CommandKind>,
}

impl OrderRegistry {
    /// Registers every allow-list name that has a handler.
    pub fn from_allow_list<I, S>(allow_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut commands = BTreeMap::new();
        for name in allow_list {
            let name = name.as_ref();
            match CommandKind::from_name(name) {
                Some(kind) => {
                    debug!(order = name, "Loaded valid order");
                    commands.insert(name.to_string(), kind);
                }
                None => debug!(order = name, "No handler, skipping"),
            }
        }
        Self { commands }
    }

    pub fn resolve(&self, name: &str) -> Result<CommandKind, OrderError> {
        self.commands
            .get(name)
            .copied()
            .ok_or_else(|| OrderError::UnknownOrder(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
