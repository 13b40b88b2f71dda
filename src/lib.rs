//! # Order Dispatch
//!
//! > **A controller, a queue and a worker that carries out named orders.**
//!
//! A controller enqueues named orders (`ping`, `reverse:abc`, ...) onto a shared
//! in-process queue. A single worker task pulls them off, runs the matching
//! handler and appends a timestamped result to its own log.
//!
//! ## 🏗️ Design
//!
//! ### One-way Data Flow
//! Orders travel controller → queue → worker and nothing comes back except the
//! acknowledgement that releases [`Controller::join`](clients::Controller::join).
//! The queue is the only shared state.
//!
//! ### Bounded Waiting
//! The worker never blocks forever on an empty queue. Each receive waits at most
//! `timeout`; on expiry it logs a warning and sleeps `wait_interval` before
//! trying again.
//!
//! ### Static Dispatch
//! Every command the crate can run is a variant of [`worker::CommandKind`]. The
//! registry is the intersection of a deployment's allow-list with those
//! variants, and execution is a plain `match` over [`worker::Command`].
//!
//! ### Failures Are Results
//! Unknown orders become `invalid_order`; handler errors become a `Fault`
//! result. The loop keeps going either way.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the joinable queue ([`OrderQueue`](framework::OrderQueue) / [`OrderReceiver`](framework::OrderReceiver)).
//! - [`model`]: [`Order`](model::Order), [`OrderResult`](model::OrderResult), [`ResultLog`](model::ResultLog) and errors.
//! - [`clients`]: the [`Controller`](clients::Controller).
//! - [`worker`]: the [`Worker`](worker::Worker) loop, its registry and handlers.
//! - [`lifecycle`]: [`DispatchSystem`](lifecycle::DispatchSystem) and [`setup_tracing`](lifecycle::setup_tracing).
//! - [`config`]: [`WorkerConfig`](config::WorkerConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- -o ping reverse:abc reverse:a,b,c
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod worker;
