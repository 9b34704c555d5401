// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const CHECKS_TOTAL: &str = "pagewatch_checks_total";
pub const MATCHES_TOTAL: &str = "pagewatch_matches_total";
pub const FETCH_FAILURES_TOTAL: &str = "pagewatch_fetch_failures_total";
pub const FETCH_DURATION_SECONDS: &str = "pagewatch_fetch_duration_seconds";
pub const NOTIFICATIONS_TOTAL: &str = "pagewatch_notifications_total";
pub const NOTIFICATION_FAILURES_TOTAL: &str = "pagewatch_notification_failures_total";

/// 启动 Prometheus 指标导出器
///
/// 未调用时指标宏为空操作
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new();

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = builder.with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(CHECKS_TOTAL, "Total number of page checks started");
    describe_counter!(MATCHES_TOTAL, "Total number of checks where the phrase was found");
    describe_counter!(FETCH_FAILURES_TOTAL, "Total number of failed page fetches");
    describe_histogram!(FETCH_DURATION_SECONDS, "Duration of page fetches in seconds");
    describe_counter!(NOTIFICATIONS_TOTAL, "Total number of notifications delivered");
    describe_counter!(
        NOTIFICATION_FAILURES_TOTAL,
        "Total number of notifications that failed to deliver"
    );

    info!("Metrics exporter listening on {}", addr);
}
