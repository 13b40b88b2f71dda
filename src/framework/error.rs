//! # Queue Errors
//!
//! Errors raised by the shared order queue itself. Order-level failures live in
//! [`crate::model::OrderError`].

/// Errors that can occur within the queue plumbing.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum QueueError {
    /// The other side of the queue is gone.
    #[error("Queue closed")]
    Closed,
    /// `task_done` was called more often than items were enqueued.
    #[error("task_done() called more times than there were items")]
    TooManyAcknowledgements,
}
