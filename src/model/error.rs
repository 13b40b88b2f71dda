//! Error types for order handling.

use thiserror::Error;

/// Errors that can occur while sending or executing an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    /// The controller was asked to send an order without a name.
    #[error("Order name must not be empty")]
    EmptyName,

    /// The worker side of the queue is gone.
    #[error("Order queue closed")]
    QueueClosed,

    /// The order name is not in the worker's registry.
    #[error("Invalid order received: {0}")]
    UnknownOrder(String),

    /// A zero-argument order was given parameters.
    #[error("Order {order} takes no arguments")]
    UnexpectedArgument { order: String },

    /// A one-argument order was given no parameters.
    #[error("Order {order} requires an argument")]
    MissingArgument { order: String },
}
