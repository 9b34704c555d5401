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

use crate::config::settings::Settings;
use crate::domain::models::notification::Notification;
use crate::domain::services::match_pipeline::MatchPipeline;
use crate::domain::services::notifier::Notifier;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::metrics::{
    CHECKS_TOTAL, FETCH_DURATION_SECONDS, FETCH_FAILURES_TOTAL, MATCHES_TOTAL,
    NOTIFICATIONS_TOTAL, NOTIFICATION_FAILURES_TOTAL,
};
use crate::workers::worker::Worker;
use async_trait::async_trait;
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

/// 单个检查周期的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// 未找到搜索文本
    NoMatch,
    /// 找到并已发送通知
    Notified { links: Vec<String> },
    /// 抓取失败
    FetchFailed,
    /// 页面URL无法作为链接解析的基准
    ParseFailed,
    /// 找到但通知发送失败
    NotifyFailed { links: Vec<String> },
}

/// 页面监控工作器
///
/// 按固定间隔检查页面，周期之间不共享状态。周期超时时推迟下一次检查，不会并发执行。
pub struct WatchWorker {
    fetcher: Arc<dyn PageFetcher>,
    notifier: Arc<dyn Notifier>,
    website_url: String,
    search_text: String,
    check_interval: Duration,
}

impl WatchWorker {
    /// 创建新的页面监控工作器实例
    ///
    /// # 参数
    ///
    /// * `fetcher` - 页面抓取引擎
    /// * `notifier` - 通知渠道
    /// * `website_url` - 被检查的页面
    /// * `search_text` - 搜索文本
    /// * `check_interval` - 检查间隔，必须大于零
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        notifier: Arc<dyn Notifier>,
        website_url: String,
        search_text: String,
        check_interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            website_url,
            search_text,
            check_interval,
        }
    }

    pub fn from_settings(
        settings: &Settings,
        fetcher: Arc<dyn PageFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(
            fetcher,
            notifier,
            settings.website_url.clone(),
            settings.search_text.clone(),
            settings.check_interval,
        )
    }

    /// 执行一次检查：抓取、匹配、通知
    ///
    /// 所有错误都在周期内记录并吞掉，不会向外传播
    pub async fn run_cycle(&self) -> CycleOutcome {
        info!("Checking {}", self.website_url);
        counter!(CHECKS_TOTAL).increment(1);

        let response = match self.fetcher.fetch(&self.website_url).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error fetching website: {}", e);
                counter!(FETCH_FAILURES_TOTAL).increment(1);
                return CycleOutcome::FetchFailed;
            }
        };
        histogram!(FETCH_DURATION_SECONDS).record(response.response_time_ms as f64 / 1000.0);

        let result = match MatchPipeline::check(
            &response.body,
            response.content_type.as_deref(),
            &self.website_url,
            &self.search_text,
        ) {
            Ok(result) => result,
            Err(e) => {
                error!("Error checking page: {}", e);
                return CycleOutcome::ParseFailed;
            }
        };

        if !result.matched {
            return CycleOutcome::NoMatch;
        }
        counter!(MATCHES_TOTAL).increment(1);

        let notification =
            Notification::new(&self.website_url, &self.search_text, result.links.clone());
        match self.notifier.notify(&notification).await {
            Ok(()) => {
                info!(
                    links = result.links.len(),
                    "{} notification sent successfully",
                    self.notifier.name()
                );
                counter!(NOTIFICATIONS_TOTAL).increment(1);
                CycleOutcome::Notified {
                    links: result.links,
                }
            }
            Err(e) => {
                warn!("Error sending {} notification: {}", self.notifier.name(), e);
                counter!(NOTIFICATION_FAILURES_TOTAL).increment(1);
                CycleOutcome::NotifyFailed {
                    links: result.links,
                }
            }
        }
    }
}

#[async_trait]
impl Worker for WatchWorker {
    /// 运行监控循环
    ///
    /// 启动时立即检查一次，之后按间隔检查
    async fn run(&self) {
        info!(
            "Watch worker started: interval {:?}, notifier {}",
            self.check_interval,
            self.notifier.name()
        );

        let mut ticker = interval(self.check_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    fn name(&self) -> &str {
        "watch"
    }
}
