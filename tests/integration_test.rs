use order_dispatch::config::WorkerConfig;
use order_dispatch::lifecycle::DispatchSystem;
use order_dispatch::model::{OrderSpec, ResultValue};
use std::time::Duration;

fn fast_config() -> WorkerConfig {
    WorkerConfig::default()
        .with_timeout(Duration::from_millis(50))
        .with_wait_interval(Duration::from_millis(10))
}

fn specs(items: &[&str]) -> Vec<OrderSpec> {
    items.iter().map(|s| s.parse().unwrap()).collect()
}

/// Full end-to-end run: ping, reverse and show_results through the real worker.
#[tokio::test]
async fn test_ping_reverse_show_results_end_to_end() {
    let system = DispatchSystem::start(fast_config());

    for spec in specs(&["ping", "reverse:abc", "show_results"]) {
        assert!(system.controller.send(spec));
    }
    system.controller.join().await.expect("join failed");

    let results = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(results.len(), 3);

    let entries = results.entries();
    assert_eq!(entries[0].order, "ping");
    assert_eq!(entries[0].result, ResultValue::Bool(true));
    assert_eq!(entries[1].order, "reverse");
    assert_eq!(entries[1].result, ResultValue::Text("cba".into()));
    assert_eq!(entries[2].order, "show_results");

    // The dump predates the show_results entry itself
    assert_eq!(entries[2].result, ResultValue::Report { entries: 2 });

    // Completion timestamps follow dispatch order
    assert!(entries[0].time_done <= entries[1].time_done);
    assert!(entries[1].time_done <= entries[2].time_done);
}

/// The binary's flow: send everything, join, then ask for a final report.
#[tokio::test]
async fn test_join_before_final_report() {
    let system = DispatchSystem::start(fast_config());

    for spec in specs(&["ping", "reverse:a,b,c", "launch_missiles", "ping:extra"]) {
        assert!(system.controller.send(spec));
    }
    system.controller.join().await.unwrap();
    assert_eq!(system.controller.pending(), 0);

    assert!(system.controller.send_order("show_results", None));
    system.controller.join().await.unwrap();

    let results = system.shutdown().await.unwrap();
    let values: Vec<&ResultValue> = results.iter().map(|r| &r.result).collect();
    assert_eq!(values[0], &ResultValue::Bool(true));
    assert_eq!(
        values[1],
        &ResultValue::List(vec!["c".into(), "b".into(), "a".into()])
    );
    assert_eq!(values[2], &ResultValue::InvalidOrder);
    assert!(matches!(values[3], ResultValue::Fault(_)));
    assert_eq!(values[4], &ResultValue::Report { entries: 4 });
}

/// Back-to-back show_results orders each add one small entry to the log.
#[tokio::test]
async fn test_repeated_show_results_grow_log_linearly() {
    let system = DispatchSystem::start(fast_config());

    let k = 20;
    for _ in 0..k {
        assert!(system.controller.send_order("show_results", None));
    }
    system.controller.join().await.unwrap();

    let results = system.shutdown().await.unwrap();
    assert_eq!(results.len(), k);
    for (i, entry) in results.iter().enumerate() {
        assert_eq!(entry.result, ResultValue::Report { entries: i });
    }

    // One dumped entry is well under a kilobyte, so k of them stay small
    let dump = results.to_pretty_json().unwrap();
    assert!(dump.len() < k * 1024, "dump is {} bytes", dump.len());
}

/// Orders sent before the worker has had a chance to run are still processed.
#[tokio::test]
async fn test_orders_survive_idle_periods() {
    let system = DispatchSystem::start(fast_config());

    // Let the worker time out and idle at least once
    tokio::time::sleep(Duration::from_millis(120)).await;

    assert!(system.controller.send_order("ping", None));
    system.controller.join().await.unwrap();

    let results = system.shutdown().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results.entries()[0].result, ResultValue::Bool(true));
}

/// A deployment with a reduced allow-list answers other names with invalid_order.
#[tokio::test]
async fn test_reduced_allow_list_deployment() {
    let config = fast_config().with_allow_list(["ping", "show_results"]);
    let system = DispatchSystem::start(config);

    assert!(system.controller.send_order("reverse", Some(vec!["abc".into()])));
    assert!(system.controller.send_order("ping", None));
    system.controller.join().await.unwrap();

    let results = system.shutdown().await.unwrap();
    assert_eq!(results.entries()[0].result, ResultValue::InvalidOrder);
    assert_eq!(results.entries()[1].result, ResultValue::Bool(true));
}

/// Empty names never reach the worker.
#[tokio::test]
async fn test_empty_order_is_not_sent() {
    let system = DispatchSystem::start(fast_config());

    assert!(!system.controller.send_order("", None));
    assert!(!system.controller.send("".parse().unwrap()));
    system.controller.join().await.unwrap();

    let results = system.shutdown().await.unwrap();
    assert!(results.is_empty());
}
