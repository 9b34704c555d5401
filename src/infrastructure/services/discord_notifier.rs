// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::Notification;
use crate::domain::services::notifier::Notifier;
use crate::utils::errors::NotifyError;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Discord Webhook 负载
#[derive(Debug, Serialize)]
struct DiscordPayload<'a> {
    content: &'a str,
}

/// Discord Webhook 通知实现
pub struct DiscordNotifier {
    /// HTTP 客户端
    client: reqwest::Client,
    /// Webhook 地址
    webhook_url: String,
}

impl DiscordNotifier {
    /// 创建新的 Discord 通知实现
    ///
    /// # 参数
    ///
    /// * `webhook_url` - Webhook 地址
    /// * `timeout` - 单次请求超时，与页面抓取共用同一配置
    pub fn new(webhook_url: String, timeout: Duration) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            webhook_url,
        })
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let content = notification.to_markdown();

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&DiscordPayload { content: &content })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(NotifyError::UnexpectedStatus { status, body })
        }
    }

    fn name(&self) -> &'static str {
        "discord"
    }
}
