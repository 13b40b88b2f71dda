//! # Joinable Order Queue
//!
//! A FIFO channel of [`Order`]s shared between the controller and the worker.
//!
//! ## Key Types
//!
//! - [`OrderQueue`]: the producer handle. Cheap to clone; every controller holds one.
//! - [`OrderReceiver`]: the single consumer owned by the worker.
//!
//! ## Join Barrier
//!
//! Every enqueued order counts as *unfinished* until the consumer calls
//! [`OrderReceiver::task_done`]. [`OrderQueue::join`] waits until that count
//! drops back to zero. The count lives in a `watch` channel so a waiter that
//! subscribes after the last acknowledgement still sees zero and returns
//! immediately.
//!
//! Dropping the [`OrderReceiver`] (including when the worker task panics)
//! marks the consumer gone. A `join` still waiting on unacknowledged orders
//! then fails with [`QueueError::Closed`] instead of blocking forever.
//!
//! ```rust
//! use order_dispatch::framework::order_queue;
//! use order_dispatch::model::Order;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (queue, mut receiver) = order_queue();
//!     queue.enqueue(Order::new("ping", Vec::new())).unwrap();
//!
//!     let order = receiver.recv_timeout(Duration::from_millis(10)).await.unwrap();
//!     assert_eq!(order.unwrap().name, "ping");
//!     receiver.task_done().unwrap();
//!
//!     queue.join().await.unwrap();
//! }
//! ```

use crate::framework::error::QueueError;
use crate::model::Order;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Acknowledgement state shared by both halves.
#[derive(Debug, Clone, Copy)]
struct Progress {
    unfinished: usize,
    consumer_alive: bool,
}

/// Creates a connected producer/consumer pair.
pub fn order_queue() -> (OrderQueue, OrderReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let (progress, _) = watch::channel(Progress {
        unfinished: 0,
        consumer_alive: true,
    });
    let progress = Arc::new(progress);
    let queued = Arc::new(AtomicUsize::new(0));

    let queue = OrderQueue {
        sender,
        progress: progress.clone(),
        queued: queued.clone(),
    };
    let receiver = OrderReceiver {
        receiver,
        progress,
        queued,
    };
    (queue, receiver)
}

/// Producer half of the queue.
#[derive(Clone)]
pub struct OrderQueue {
    sender: mpsc::UnboundedSender<Order>,
    progress: Arc<watch::Sender<Progress>>,
    queued: Arc<AtomicUsize>,
}

impl OrderQueue {
    /// Pushes an order onto the queue. The queue is unbounded, so this never waits.
    pub fn enqueue(&self, order: Order) -> Result<(), QueueError> {
        // Count first so a fast consumer never acknowledges an uncounted item.
        self.progress.send_modify(|p| p.unfinished += 1);
        self.queued.fetch_add(1, Ordering::SeqCst);
        if self.sender.send(order).is_err() {
            self.queued.fetch_sub(1, Ordering::SeqCst);
            self.progress.send_modify(|p| p.unfinished -= 1);
            return Err(QueueError::Closed);
        }
        Ok(())
    }

    /// Number of orders waiting to be dequeued.
    pub fn len(&self) -> usize {
        self.queued.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of orders enqueued but not yet acknowledged.
    pub fn unfinished(&self) -> usize {
        self.progress.borrow().unfinished
    }

    /// Blocks until every enqueued order has been acknowledged.
    ///
    /// Fails with [`QueueError::Closed`] if the consumer is dropped while
    /// orders are still unacknowledged.
    pub async fn join(&self) -> Result<(), QueueError> {
        let mut watcher = self.progress.subscribe();
        let progress = *watcher
            .wait_for(|p| p.unfinished == 0 || !p.consumer_alive)
            .await
            .map_err(|_| QueueError::Closed)?;
        if progress.unfinished == 0 {
            Ok(())
        } else {
            Err(QueueError::Closed)
        }
    }
}

/// Consumer half of the queue. There is exactly one per queue.
pub struct OrderReceiver {
    receiver: mpsc::UnboundedReceiver<Order>,
    progress: Arc<watch::Sender<Progress>>,
    queued: Arc<AtomicUsize>,
}

impl OrderReceiver {
    /// Waits up to `timeout` for the next order.
    ///
    /// Returns `Ok(None)` when the timeout elapses and `Err(QueueError::Closed)`
    /// once every [`OrderQueue`] handle has been dropped and the queue is drained.
    pub async fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<Order>, QueueError> {
        match tokio::time::timeout(timeout, self.receiver.recv()).await {
            Ok(Some(order)) => {
                self.queued.fetch_sub(1, Ordering::SeqCst);
                Ok(Some(order))
            }
            Ok(None) => Err(QueueError::Closed),
            Err(_elapsed) => Ok(None),
        }
    }

    /// Marks one previously dequeued order as processed.
    pub fn task_done(&self) -> Result<(), QueueError> {
        let mut underflow = false;
        self.progress.send_if_modified(|p| {
            if p.unfinished == 0 {
                underflow = true;
                false
            } else {
                p.unfinished -= 1;
                true
            }
        });
        if underflow {
            return Err(QueueError::TooManyAcknowledgements);
        }
        Ok(())
    }
}

impl Drop for OrderReceiver {
    fn drop(&mut self) {
        self.progress.send_modify(|p| p.consumer_alive = false);
    }
}
