// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 单个检查周期的匹配结果
///
/// 未匹配时 `links` 恒为空；匹配时 `links` 至少包含一个URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    pub links: Vec<String>,
}

impl MatchResult {
    /// 未匹配
    pub fn no_match() -> Self {
        Self::default()
    }

    /// 匹配，链接列表为空时回退到 `fallback_url`
    pub fn matched(links: Vec<String>, fallback_url: &str) -> Self {
        let links = if links.is_empty() {
            vec![fallback_url.to_string()]
        } else {
            links
        };
        Self {
            matched: true,
            links,
        }
    }
}
