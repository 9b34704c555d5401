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

use crate::engines::reqwest_engine::DEFAULT_USER_AGENT;
use config::{Config, Environment, File, Map};
use lettre::message::Mailbox;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// 配置错误类型
///
/// 均为启动时的致命错误
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("Invalid {key}: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    #[error("Invalid {key} format: {value:?}. Use format like '5m', '1h', etc.")]
    InvalidDuration { key: &'static str, value: String },

    #[error("Invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("No notifier configured: set DISCORD_WEBHOOK or SMTP_HOST/EMAIL_FROM/EMAIL_TO")]
    MissingNotifier,
}

/// 环境变量中的原始配置
#[derive(Debug, Deserialize)]
struct RawSettings {
    website_url: Option<String>,
    search_text: Option<String>,
    check_interval: String,
    request_timeout: String,
    user_agent: String,
    discord_webhook: Option<String>,
    smtp_host: Option<String>,
    smtp_port: u16,
    smtp_username: Option<String>,
    smtp_password: Option<String>,
    smtp_tls: String,
    email_from: Option<String>,
    email_to: Option<String>,
    metrics_addr: Option<String>,
}

/// 应用程序配置设置
#[derive(Debug, Clone)]
pub struct Settings {
    /// 被检查的页面
    pub website_url: String,
    /// 搜索文本
    pub search_text: String,
    /// 检查间隔
    pub check_interval: Duration,
    /// 单次请求超时
    pub request_timeout: Duration,
    pub user_agent: String,
    /// 通知渠道配置
    pub notifier: NotifierSettings,
    /// Prometheus 指标监听地址，未设置时不启用
    pub metrics_addr: Option<SocketAddr>,
}

/// 通知渠道配置
#[derive(Debug, Clone)]
pub enum NotifierSettings {
    Discord(DiscordSettings),
    Email(EmailSettings),
}

/// Discord Webhook 配置
#[derive(Debug, Clone)]
pub struct DiscordSettings {
    pub webhook_url: String,
}

/// SMTP 传输安全模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    /// 明文连接后升级
    StartTls,
    /// 直接TLS连接
    Tls,
    /// 不加密
    None,
}

/// SMTP 邮件配置
#[derive(Debug, Clone)]
pub struct EmailSettings {
    pub host: String,
    pub port: u16,
    pub tls: SmtpTls,
    /// 用户名与密码，需同时设置
    pub credentials: Option<(String, String)>,
    pub from: Mailbox,
    pub to: Mailbox,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次读取默认值、`config/default` 配置文件（可选）和进程环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载并校验的配置
    /// * `Err(SettingsError)` - 缺少必填项或格式错误
    pub fn new() -> Result<Self, SettingsError> {
        Self::load(None)
    }

    /// 从给定的环境变量集合加载配置，`None` 表示使用进程环境变量
    pub fn load(env: Option<Map<String, String>>) -> Result<Self, SettingsError> {
        let builder = Config::builder()
            .set_default("check_interval", "5m")?
            .set_default("request_timeout", "30s")?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("smtp_port", 587)?
            .set_default("smtp_tls", "starttls")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().ignore_empty(true).source(env));

        let raw: RawSettings = builder.build()?.try_deserialize()?;
        raw.validate()
    }
}

impl RawSettings {
    fn validate(self) -> Result<Settings, SettingsError> {
        let website_url = required("WEBSITE_URL", self.website_url)?;
        let parsed = Url::parse(&website_url).map_err(|e| SettingsError::InvalidUrl {
            key: "WEBSITE_URL",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SettingsError::InvalidUrl {
                key: "WEBSITE_URL",
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        let search_text = required("SEARCH_TEXT", self.search_text)?;
        let check_interval = parse_duration("CHECK_INTERVAL", &self.check_interval)?;
        let request_timeout = parse_duration("REQUEST_TIMEOUT", &self.request_timeout)?;

        let metrics_addr = self
            .metrics_addr
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .map_err(|_| SettingsError::InvalidValue {
                        key: "METRICS_ADDR",
                        value: addr.clone(),
                    })
            })
            .transpose()?;

        let notifier = match (self.discord_webhook, self.smtp_host) {
            (Some(webhook_url), smtp_host) => {
                if smtp_host.is_some() {
                    warn!("Both DISCORD_WEBHOOK and SMTP_HOST are set, using Discord");
                }
                Url::parse(&webhook_url).map_err(|e| SettingsError::InvalidUrl {
                    key: "DISCORD_WEBHOOK",
                    reason: e.to_string(),
                })?;
                NotifierSettings::Discord(DiscordSettings { webhook_url })
            }
            (None, Some(host)) => NotifierSettings::Email(EmailSettings {
                host,
                port: self.smtp_port,
                tls: parse_tls(&self.smtp_tls)?,
                credentials: match (self.smtp_username, self.smtp_password) {
                    (Some(user), Some(pass)) => Some((user, pass)),
                    (None, None) => None,
                    (Some(_), None) => return Err(SettingsError::Missing("SMTP_PASSWORD")),
                    (None, Some(_)) => return Err(SettingsError::Missing("SMTP_USERNAME")),
                },
                from: parse_mailbox("EMAIL_FROM", required("EMAIL_FROM", self.email_from)?)?,
                to: parse_mailbox("EMAIL_TO", required("EMAIL_TO", self.email_to)?)?,
            }),
            (None, None) => return Err(SettingsError::MissingNotifier),
        };

        Ok(Settings {
            website_url,
            search_text,
            check_interval,
            request_timeout,
            user_agent: self.user_agent,
            notifier,
            metrics_addr,
        })
    }
}

fn required(key: &'static str, value: Option<String>) -> Result<String, SettingsError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::Missing(key))
}

fn parse_duration(key: &'static str, value: &str) -> Result<Duration, SettingsError> {
    match humantime::parse_duration(value.trim()) {
        Ok(d) if !d.is_zero() => Ok(d),
        _ => Err(SettingsError::InvalidDuration {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_tls(value: &str) -> Result<SmtpTls, SettingsError> {
    match value.to_ascii_lowercase().as_str() {
        "starttls" => Ok(SmtpTls::StartTls),
        "tls" => Ok(SmtpTls::Tls),
        "none" => Ok(SmtpTls::None),
        _ => Err(SettingsError::InvalidValue {
            key: "SMTP_TLS",
            value: value.to_string(),
        }),
    }
}

fn parse_mailbox(key: &'static str, value: String) -> Result<Mailbox, SettingsError> {
    value
        .parse::<Mailbox>()
        .map_err(|_| SettingsError::InvalidValue { key, value })
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
