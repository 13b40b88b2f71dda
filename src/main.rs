use clap::Parser;
use order_dispatch::config::WorkerConfig;
use order_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use order_dispatch::model::OrderSpec;
use order_dispatch::worker::VALID_ORDERS;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "order-dispatch")]
#[command(about = "Send orders to a background worker and report the results")]
#[command(version)]
struct Cli {
    /// Orders to send, as `name` or `name:param1,param2,...`
    #[arg(short, long, num_args = 1.., required = true, long_help = orders_help())]
    orders: Vec<OrderSpec>,

    /// Seconds the worker waits for an order before idling
    #[arg(long, default_value_t = 5.0)]
    timeout: f64,

    /// Seconds the worker sleeps after a receive timed out
    #[arg(long, default_value_t = 5.0)]
    wait_interval: f64,

    /// Restrict the orders this worker accepts (comma separated)
    #[arg(long, value_delimiter = ',')]
    allow: Option<Vec<String>>,
}

fn orders_help() -> String {
    format!(
        "Orders to send. Valid orders are: {}\nAdd parameters like: order:param1,param2,...",
        VALID_ORDERS.join(", ")
    )
}

fn seconds(value: f64, flag: &str) -> Result<Duration, String> {
    Duration::try_from_secs_f64(value).map_err(|e| format!("--{}: {}", flag, e))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let cli = Cli::parse();

    let mut config = WorkerConfig::default()
        .with_timeout(seconds(cli.timeout, "timeout")?)
        .with_wait_interval(seconds(cli.wait_interval, "wait-interval")?);
    if let Some(allow) = cli.allow {
        config = config.with_allow_list(allow);
    }

    let system = DispatchSystem::start(config);

    let total = cli.orders.len();
    let mut sent = 0;
    for spec in cli.orders {
        if system.controller.send(spec.clone()) {
            sent += 1;
        } else {
            warn!(order = %spec, "Order not sent");
        }
    }
    info!(sent, total, "Sent orders");

    system.controller.join().await.map_err(|e| e.to_string())?;
    system.controller.send_order("show_results", None);
    system.controller.join().await.map_err(|e| e.to_string())?;

    let results = system.shutdown().await?;
    info!(results = results.len(), "Application completed successfully");
    Ok(())
}
