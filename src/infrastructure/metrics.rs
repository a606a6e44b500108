// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

/// 初始化指标系统
///
/// 启动Prometheus导出器并注册应用所需的各类监控指标
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let addr: SocketAddr = "0.0.0.0:9000".parse().expect("Invalid metrics address");

    // Start the exporter
    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = builder.with_http_listener(addr).install() {
        tracing::warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
    }

    // Register metrics
    describe_counter!("users_created_total", "Total number of users created");
    describe_counter!("users_updated_total", "Total number of users updated");
    describe_counter!("users_deleted_total", "Total number of users deleted");
    describe_counter!(
        "trainings_created_total",
        "Total number of trainings created"
    );
    describe_counter!(
        "trainings_updated_total",
        "Total number of trainings updated"
    );

    info!("Metrics exporter listening on {}", addr);
}
