// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod mock_fetcher;
pub mod mock_notifier;

use mock_fetcher::MockFetcher;
use mock_notifier::RecordingNotifier;
use pagewatch::workers::watch_worker::WatchWorker;
use std::sync::Arc;
use std::time::Duration;

pub const WEBSITE_URL: &str = "https://x.test";

/// 用模拟组件创建工作器
pub fn worker_with(
    fetcher: Arc<MockFetcher>,
    notifier: Arc<RecordingNotifier>,
    phrase: &str,
    interval: Duration,
) -> WatchWorker {
    WatchWorker::new(
        fetcher,
        notifier,
        WEBSITE_URL.to_string(),
        phrase.to_string(),
        interval,
    )
}
