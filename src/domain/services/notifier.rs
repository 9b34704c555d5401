// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::notification::Notification;
use crate::utils::errors::NotifyError;
use async_trait::async_trait;

/// 通知渠道特质
///
/// 启动时根据配置选择具体实现（Discord Webhook 或 SMTP 邮件）
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 发送匹配通知
    ///
    /// # 参数
    ///
    /// * `notification` - 通知内容
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 发送成功
    /// * `Err(NotifyError)` - 发送失败
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;

    /// 渠道名称
    fn name(&self) -> &'static str;
}
