// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务模块
///
/// 通知渠道的具体实现
pub mod discord_notifier;
pub mod email_notifier;

use crate::config::settings::NotifierSettings;
use crate::domain::services::notifier::Notifier;
use crate::utils::errors::NotifyError;
use discord_notifier::DiscordNotifier;
use email_notifier::EmailNotifier;
use std::sync::Arc;
use std::time::Duration;

/// 根据配置创建通知渠道
///
/// `request_timeout` 用于基于 HTTP 的通知渠道
pub fn build_notifier(
    settings: &NotifierSettings,
    request_timeout: Duration,
) -> Result<Arc<dyn Notifier>, NotifyError> {
    Ok(match settings {
        NotifierSettings::Discord(discord) => Arc::new(DiscordNotifier::new(
            discord.webhook_url.clone(),
            request_timeout,
        )?),
        NotifierSettings::Email(email) => Arc::new(EmailNotifier::new(email)?),
    })
}
