//! Plain data types exchanged between the controller and the worker.

pub mod error;
pub mod order;
pub mod result;

pub use error::*;
pub use order::*;
pub use result::*;
