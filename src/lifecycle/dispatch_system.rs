use crate::clients::Controller;
use crate::config::WorkerConfig;
use crate::framework::order_queue;
use crate::model::ResultLog;
use crate::worker::Worker;
use tracing::{error, info};

/// The runtime orchestrator: one queue, one controller, one worker task.
///
/// # Example
///
/// ```ignore
/// let system = DispatchSystem::start(WorkerConfig::default());
///
/// system.controller.send_order("ping", None);
/// system.controller.send_order("reverse", Some(vec!["abc".into()]));
/// system.controller.join().await?;
///
/// let results = system.shutdown().await?;
/// ```
pub struct DispatchSystem {
    /// Handle for sending orders to the worker
    pub controller: Controller,

    /// The worker task; yields the final result log once the queue closes
    handle: tokio::task::JoinHandle<ResultLog>,
}

impl DispatchSystem {
    /// Creates the queue, builds the worker from `config` and spawns it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: WorkerConfig) -> Self {
        let (queue, receiver) = order_queue();
        let controller = Controller::new(queue);
        info!("Set up controller");

        let worker = Worker::new(receiver, config);
        let handle = tokio::spawn(worker.run());

        Self { controller, handle }
    }

    /// Drops the controller and waits for the worker to drain and stop.
    ///
    /// Orders still in the queue are executed first. Returns the worker's
    /// complete result log, or an error if the worker task panicked.
    pub async fn shutdown(self) -> Result<ResultLog, String> {
        info!("Shutting down system...");

        // Closing the last producer is what lets the worker loop end.
        drop(self.controller);

        match self.handle.await {
            Ok(results) => {
                info!(results = results.len(), "System shutdown complete.");
                Ok(results)
            }
            Err(e) => {
                error!("Worker task failed: {:?}", e);
                Err(format!("Worker task failed: {:?}", e))
            }
        }
    }
}
