// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化遥测系统
///
/// 日志级别由RUST_LOG环境变量控制，未设置时应用自身输出
/// 调试级别日志。FITTRACKRS_LOG_FORMAT设为json时输出
/// 结构化日志，供日志采集系统使用。
pub fn init_telemetry() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,fittrackrs=debug".into());

    let registry = tracing_subscriber::registry().with(filter);

    let json_output = std::env::var("FITTRACKRS_LOG_FORMAT").is_ok_and(|format| format == "json");
    if json_output {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
