// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 匹配通知
///
/// 所有通知渠道共用的内容
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    /// 被检查的页面
    pub source_url: String,
    /// 配置的搜索文本（原始大小写）
    pub phrase: String,
    /// 相关链接，按优先级排序
    pub links: Vec<String>,
    /// 检测到匹配的时间
    pub timestamp: DateTime<Local>,
}

impl Notification {
    pub fn new(source_url: impl Into<String>, phrase: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            source_url: source_url.into(),
            phrase: phrase.into(),
            links,
            timestamp: Local::now(),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format(TIME_FORMAT).to_string()
    }

    /// 带 Markdown 强调的消息（Discord）
    pub fn to_markdown(&self) -> String {
        let mut message = format!(
            "🔔 **Match Found!**\n\nWebsite: {}\nSearch text: {}\nTime: {}",
            self.source_url,
            self.phrase,
            self.formatted_time()
        );
        if !self.links.is_empty() {
            message.push_str("\n\n**Links:**\n");
            self.push_numbered_links(&mut message);
        }
        message
    }

    /// 纯文本消息（邮件正文）
    pub fn to_plain_text(&self) -> String {
        let mut message = format!(
            "Match Found!\n\nWebsite: {}\nSearch text: {}\nTime: {}",
            self.source_url,
            self.phrase,
            self.formatted_time()
        );
        if !self.links.is_empty() {
            message.push_str("\n\nLinks:\n");
            self.push_numbered_links(&mut message);
        }
        message
    }

    pub fn subject(&self) -> String {
        format!("Match found: {}", self.phrase)
    }

    fn push_numbered_links(&self, out: &mut String) {
        for (i, link) in self.links.iter().enumerate() {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{}. {}", i + 1, link);
        }
    }
}
