// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志订阅器
///
/// 日志级别由 `RUST_LOG` 控制，未设置时使用 `info,pagewatch=debug`。
/// 重复调用时保留已安装的订阅器。
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pagewatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
