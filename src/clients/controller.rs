use crate::framework::{OrderQueue, QueueError};
use crate::model::{Order, OrderError, OrderSpec};
use tracing::{info, instrument, warn, Span};

/// Producer-side handle that sends orders to the worker.
///
/// The controller tracks nothing beyond the queue. It can be used before the
/// worker is spawned; orders simply wait in the queue.
#[derive(Clone)]
pub struct Controller {
    queue: OrderQueue,
    span: Span,
}

impl Controller {
    pub fn new(queue: OrderQueue) -> Self {
        Self {
            queue,
            span: tracing::info_span!("controller"),
        }
    }

    /// Replaces the span every controller event is recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Enqueues an order. Returns `false`, leaving the queue untouched, when
    /// `name` is empty or the queue is closed.
    pub fn send_order(&self, name: impl AsRef<str>, params: Option<Vec<String>>) -> bool {
        self.try_send_order(name, params).is_ok()
    }

    /// Like [`send_order`](Self::send_order), but says why a send was rejected.
    #[instrument(parent = &self.span, skip_all, fields(order = name.as_ref()))]
    pub fn try_send_order(
        &self,
        name: impl AsRef<str>,
        params: Option<Vec<String>>,
    ) -> Result<(), OrderError> {
        let name = name.as_ref();
        if name.is_empty() {
            warn!("Refusing to send order without a name");
            return Err(OrderError::EmptyName);
        }

        let params = params.unwrap_or_default();
        info!(?params, "Sent order");
        self.queue
            .enqueue(Order::new(name, params))
            .map_err(|_| OrderError::QueueClosed)
    }

    /// Enqueues an order parsed from the command line.
    pub fn send(&self, spec: OrderSpec) -> bool {
        self.send_order(spec.name, Some(spec.params))
    }

    /// Blocks until the worker has acknowledged every order sent so far.
    ///
    /// Returns `Err(QueueError::Closed)` if the worker goes away first.
    pub async fn join(&self) -> Result<(), QueueError> {
        self.queue.join().await
    }

    /// Orders enqueued but not yet picked up by the worker.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
