//! Queue plumbing shared by the controller and the worker.
//!
//! # Main Components
//!
//! - [`order_queue`] - Creates the producer/consumer pair
//! - [`OrderQueue`] - Clonable producer handle with the `join` barrier
//! - [`OrderReceiver`] - Single consumer with bounded-wait receive and `task_done`
//! - [`QueueError`] - Queue-level errors

pub mod error;
pub mod queue;

pub use error::QueueError;
pub use queue::{order_queue, OrderQueue, OrderReceiver};
