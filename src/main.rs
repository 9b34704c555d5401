// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use pagewatch::config::settings::Settings;
use pagewatch::engines::reqwest_engine::ReqwestEngine;
use pagewatch::engines::traits::PageFetcher;
use pagewatch::infrastructure::metrics::init_metrics;
use pagewatch::infrastructure::services::build_notifier;
use pagewatch::utils::telemetry;
use pagewatch::workers::watch_worker::WatchWorker;
use pagewatch::workers::Worker;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，加载配置后运行监控循环，直到收到 Ctrl-C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env if present
    let _ = dotenvy::dotenv();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pagewatch...");

    // 3. Load configuration
    let settings = Settings::new()?;
    info!("Website: {}", settings.website_url);
    info!("Search text: {}", settings.search_text);
    info!("Check interval: {:?}", settings.check_interval);

    if let Some(addr) = settings.metrics_addr {
        init_metrics(addr);
    }

    // 4. Initialize components
    let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestEngine::new(
        &settings.user_agent,
        settings.request_timeout,
    )?);
    let notifier = build_notifier(&settings.notifier, settings.request_timeout)?;
    info!("Notifier: {}", notifier.name());

    let worker = WatchWorker::from_settings(&settings, fetcher, notifier);

    // 5. Run until interrupted
    tokio::select! {
        _ = worker.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received, stopping {} worker", worker.name());
        }
    }

    Ok(())
}
