// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 匹配流程错误类型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("无效的页面URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// 通知发送错误类型
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("请求失败: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Webhook返回状态码 {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("邮件构建失败: {0}")]
    InvalidMessage(String),

    #[error("SMTP发送失败: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
