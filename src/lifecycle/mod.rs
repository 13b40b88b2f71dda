//! # System Lifecycle
//!
//! Wires the queue, the controller and the worker together and tears them down.
//!
//! ## Startup
//!
//! 1. Create the queue pair
//! 2. Hand the producer to a [`Controller`](crate::clients::Controller)
//! 3. Build the [`Worker`](crate::worker::Worker) (this resolves its registry)
//! 4. Spawn the worker loop on its own Tokio task
//!
//! ## Shutdown
//!
//! The worker has no stop message. Dropping the controller closes the queue;
//! the worker finishes whatever is still queued, notices the close on its next
//! receive and returns its result log from the task.
//!
//! See [`setup_tracing`] for the logging setup.

pub mod dispatch_system;
pub mod tracing;

pub use self::dispatch_system::*;
pub use self::tracing::*;
