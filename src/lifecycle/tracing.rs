//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. The library itself
//! never installs one: the controller and the worker each carry their own
//! [`tracing::Span`] (replaceable with `with_span`), and every event they emit
//! is recorded under it.
//!
//! ## What Gets Traced
//!
//! - **Worker lifecycle**: setup, registry loading, start, shutdown
//! - **Orders**: sent, received, carried out, result
//! - **Idle periods**: receive timeouts (warn) and the idle sleep that follows
//! - **Errors**: unknown orders and handler faults
//!
//! ## Usage Examples
//!
//! ```bash
//! # Sent orders and results
//! RUST_LOG=info cargo run -- -o ping reverse:abc
//!
//! # Also show registry loading and each received order
//! RUST_LOG=debug cargo run -- -o ping reverse:abc
//! ```
//!
//! With `RUST_LOG=info` a run looks like:
//!
//! ```text
//! INFO worker: Set up worker orders=3
//! INFO controller:try_send_order: Sent order order="ping" params=[]
//! INFO worker: Worker started orders=["ping", "reverse", "show_results"]
//! INFO worker: Order done order="ping" result=true
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans already say which component spoke
        .compact()
        .init();
}
