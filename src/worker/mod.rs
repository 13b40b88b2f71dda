//! # Worker
//!
//! The consuming side of the system: a long-lived task that pulls orders off the
//! queue, executes them and keeps a log of what happened.
//!
//! ## The Loop
//!
//! ```text
//! Waiting ──order──▶ Dispatching ──ack──▶ Waiting
//!    │
//!    └──timeout──▶ IdleSleep ──wait_interval──▶ Waiting
//! ```
//!
//! A receive waits at most `timeout`. When nothing arrives the worker logs a
//! warning and sleeps for `wait_interval` before trying again, so a new order is
//! picked up within `timeout + wait_interval` at worst without spinning.
//!
//! ## Ownership
//!
//! The worker owns its [`OrderRegistry`] and [`ResultLog`] outright. Nothing else
//! can reach them, so neither needs a lock. The only thing shared with the
//! controller is the queue.
//!
//! ## Failures
//!
//! - Unknown names produce [`ResultValue::InvalidOrder`].
//! - A handler error (e.g. `ping` given an argument) is recorded as
//!   [`ResultValue::Fault`] and the loop carries on.
//! - Panics are not caught; they end the worker task.
//!
//! There is no stop signal. The loop only ends when every [`OrderQueue`](crate::framework::OrderQueue)
//! handle has been dropped, at which point [`Worker::run`] hands back the final log.

pub mod handlers;
pub mod registry;

pub use registry::*;

use crate::config::WorkerConfig;
use crate::framework::{OrderReceiver, QueueError};
use crate::model::{Order, OrderResult, ResultLog, ResultValue};
use tracing::{debug, error, info, warn, Instrument, Span};

/// Where the worker is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Waiting,
    Dispatching,
    IdleSleep,
}

/// Outcome of one loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// An order was executed and acknowledged.
    Dispatched(OrderResult),
    /// The receive timed out and the worker slept.
    Idle,
    /// No producers remain and the queue is drained.
    Closed,
}

pub struct Worker {
    receiver: OrderReceiver,
    registry: OrderRegistry,
    results: ResultLog,
    config: WorkerConfig,
    state: WorkerState,
    span: Span,
}

impl Worker {
    /// Builds a worker and its registry from `config.allow_list`.
    pub fn new(receiver: OrderReceiver, config: WorkerConfig) -> Self {
        let span = tracing::info_span!("worker");
        let registry = span.in_scope(|| OrderRegistry::from_allow_list(&config.allow_list));
        span.in_scope(|| {
            info!(orders = registry.len(), "Set up worker");
            debug!(timeout = ?config.timeout, wait_interval = ?config.wait_interval, "Worker timings");
        });

        Self {
            receiver,
            registry,
            results: ResultLog::new(),
            config,
            state: WorkerState::Waiting,
            span,
        }
    }

    /// Replaces the span every worker event is recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    pub fn results(&self) -> &ResultLog {
        &self.results
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Waits up to the configured timeout for the next order.
    pub async fn receive(&mut self) -> Result<Option<Order>, QueueError> {
        self.state = WorkerState::Waiting;
        let timeout = self.config.timeout;
        let received = self.receiver.recv_timeout(timeout).await?;
        match &received {
            Some(order) => debug!(order = %order.name, params = ?order.params, "Got order"),
            None => warn!(?timeout, "No order received"),
        }
        Ok(received)
    }

    /// Executes one order and stamps the outcome. Never fails.
    pub fn dispatch(&self, order: &Order) -> OrderResult {
        let _guard = self.span.enter();

        let kind = match self.registry.resolve(&order.name) {
            Ok(kind) => kind,
            Err(e) => {
                error!(order = %order.name, "{}", e);
                return OrderResult::now(&order.name, ResultValue::InvalidOrder);
            }
        };
        debug!(order = %order.name, "Found valid order");

        let value = match kind.bind(order.argument()) {
            Ok(command) => handlers::execute(command, &self.results),
            Err(e) => {
                error!(order = %order.name, error = %e, "Handler fault");
                ResultValue::Fault(e.to_string())
            }
        };
        OrderResult::now(&order.name, value)
    }

    /// Records a result and marks its queue item processed.
    pub fn acknowledge(&mut self, result: OrderResult) -> Result<(), QueueError> {
        self.results.push(result);
        self.receiver.task_done()
    }

    /// Runs a single iteration of the loop.
    pub async fn step(&mut self) -> Tick {
        let span = self.span.clone();
        self.step_inner().instrument(span).await
    }

    async fn step_inner(&mut self) -> Tick {
        match self.receive().await {
            Ok(Some(order)) => {
                self.state = WorkerState::Dispatching;
                debug!(order = %order.name, "Carrying out order");
                let result = self.dispatch(&order);
                info!(order = %result.order, result = %result.result, "Order done");
                if let Err(e) = self.acknowledge(result.clone()) {
                    error!(error = %e, "Acknowledge failed");
                }
                self.state = WorkerState::Waiting;
                Tick::Dispatched(result)
            }
            Ok(None) => {
                self.state = WorkerState::IdleSleep;
                let wait_interval = self.config.wait_interval;
                info!(?wait_interval, "Waiting for more orders");
                tokio::time::sleep(wait_interval).await;
                self.state = WorkerState::Waiting;
                Tick::Idle
            }
            Err(e) => {
                debug!(error = %e, "Stopped receiving");
                Tick::Closed
            }
        }
    }

    /// Runs the loop until the queue closes, then returns the result log.
    pub async fn run(mut self) -> ResultLog {
        self.span.in_scope(|| info!(orders = ?self.registry.names().collect::<Vec<_>>(), "Worker started"));

        while self.step().await != Tick::Closed {}

        self.span.in_scope(|| info!(results = self.results.len(), "Shutdown"));
        self.results
    }
}
