// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::url_utils::is_product_url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// 候选链接优先级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPriority {
    /// 指向产品详情页的链接
    Product,
    /// 其他链接
    Other,
}

impl LinkPriority {
    /// 根据已解析的绝对URL判断优先级
    pub fn classify(url: &str) -> Self {
        if is_product_url(url) {
            LinkPriority::Product
        } else {
            LinkPriority::Other
        }
    }
}

impl fmt::Display for LinkPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkPriority::Product => write!(f, "product"),
            LinkPriority::Other => write!(f, "other"),
        }
    }
}

/// 候选链接
///
/// 以解析后的绝对URL作为唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateLink {
    pub url: String,
    pub priority: LinkPriority,
}

impl CandidateLink {
    pub fn new(url: String) -> Self {
        let priority = LinkPriority::classify(&url);
        Self { url, priority }
    }
}

/// 去重的候选链接集合
///
/// 按优先级分为两组，组内保持发现顺序
#[derive(Debug, Default)]
pub struct CandidateSet {
    seen: HashSet<String>,
    product: Vec<CandidateLink>,
    other: Vec<CandidateLink>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加链接，已存在时忽略
    ///
    /// # 返回值
    ///
    /// 链接是首次出现时返回 `true`
    pub fn insert(&mut self, url: String) -> bool {
        if url.is_empty() || self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());

        let candidate = CandidateLink::new(url);
        match candidate.priority {
            LinkPriority::Product => self.product.push(candidate),
            LinkPriority::Other => self.other.push(candidate),
        }
        true
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// 有产品链接时只返回产品链接，否则返回其他链接
    pub fn into_ranked(self) -> Vec<CandidateLink> {
        if self.product.is_empty() {
            self.other
        } else {
            self.product
        }
    }

    /// 同 [`CandidateSet::into_ranked`]，只保留URL
    pub fn into_urls(self) -> Vec<String> {
        self.into_ranked().into_iter().map(|c| c.url).collect()
    }
}
