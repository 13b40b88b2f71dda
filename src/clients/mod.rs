//! The controller: the only way orders get onto the queue.

pub mod controller;

pub use controller::*;
