// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::{Document, Element};
use crate::domain::models::candidate_link::CandidateSet;
use crate::domain::services::text_matcher::contains;
use crate::utils::url_utils::{is_product_url, resolve_url};
use once_cell::sync::Lazy;
use scraper::Selector;
use tracing::debug;
use url::Url;

/// 可能包含产品/条目标题的结构选择器，按顺序扫描
const STRUCTURAL_SELECTORS: [&str; 7] = [
    "h1",
    "h2",
    "h3",
    "[class*='product']",
    "[class*='item']",
    "[id*='product']",
    "[id*='item']",
];

static STRUCTURAL: Lazy<Vec<Selector>> = Lazy::new(|| {
    STRUCTURAL_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("static selector is valid"))
        .collect()
});

/// 链接候选提取器
///
/// 对已匹配的页面，找出与搜索文本最相关的链接。依次执行：
///
/// 1. 当前页面本身是产品页时直接返回当前页面
/// 2. 文本包含搜索文本的 `<a>` 元素
/// 3. 标题及产品/条目容器
/// 4. 直接文本包含搜索文本的任意元素
///
/// 所有策略共用一个去重集合，最终产品链接优先。
pub struct LinkExtractor<'a> {
    base: Url,
    base_raw: &'a str,
}

impl<'a> LinkExtractor<'a> {
    /// 创建提取器
    ///
    /// # 参数
    ///
    /// * `base_url` - 被检查页面的URL，相对链接基于它解析
    ///
    /// # 返回值
    ///
    /// * `Ok(LinkExtractor)` - 提取器
    /// * `Err(url::ParseError)` - `base_url` 不是合法的绝对URL
    pub fn new(base_url: &'a str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: Url::parse(base_url)?,
            base_raw: base_url,
        })
    }

    /// 查找与搜索文本相关的链接
    ///
    /// 返回空列表表示没有页面内的候选链接，由调用方回退到页面URL
    pub fn find_links(&self, document: &Document, phrase: &str) -> Vec<String> {
        if is_product_url(self.base_raw) && contains(&document.body_text(), phrase) {
            debug!("Already on a product page, using {}", self.base_raw);
            return vec![self.base_raw.to_string()];
        }

        let mut candidates = CandidateSet::new();
        self.scan_anchors(document, phrase, &mut candidates);
        self.scan_structural(document, phrase, &mut candidates);
        self.scan_direct_text(document, phrase, &mut candidates);

        debug!("Collected {} candidate links", candidates.len());
        candidates.into_urls()
    }

    fn scan_anchors(&self, document: &Document, phrase: &str, candidates: &mut CandidateSet) {
        for anchor in document.anchors() {
            if !contains(&anchor.full_text(), phrase) {
                continue;
            }
            if let Some(link) = anchor.attr("href").and_then(|href| self.resolve(href)) {
                candidates.insert(link);
            }
        }
    }

    fn scan_structural(&self, document: &Document, phrase: &str, candidates: &mut CandidateSet) {
        for selector in STRUCTURAL.iter() {
            for element in document.select(selector) {
                if !contains(&element.full_text(), phrase) {
                    continue;
                }
                if let Some(link) = self.closest_link(element) {
                    candidates.insert(link);
                }
            }
        }
    }

    fn scan_direct_text(&self, document: &Document, phrase: &str, candidates: &mut CandidateSet) {
        for element in document.elements() {
            if !contains(&element.direct_text(), phrase) {
                continue;
            }
            if let Some(link) = self.closest_link(element) {
                candidates.insert(link);
            }
        }
    }

    /// 查找与元素关联最紧密的链接
    ///
    /// 依次尝试：元素本身、祖先 `<a>`、第一个后代 `<a>`、
    /// 各级祖先容器内的第一个 `<a>`（优先产品链接）。
    pub fn closest_link(&self, element: Element<'_>) -> Option<String> {
        if element.is_anchor() {
            if let Some(href) = element.attr("href") {
                return self.resolve(href);
            }
        }

        let enclosing = element
            .parents()
            .filter(Element::is_anchor)
            .find_map(|anchor| anchor.attr("href").and_then(|href| self.resolve(href)));
        if enclosing.is_some() {
            return enclosing;
        }

        if let Some(link) = element
            .first_descendant_anchor()
            .and_then(|anchor| anchor.attr("href"))
            .and_then(|href| self.resolve(href))
        {
            return Some(link);
        }

        let mut nearest = None;
        for parent in element.parents() {
            let Some(link) = parent
                .first_descendant_anchor()
                .and_then(|anchor| anchor.attr("href"))
                .and_then(|href| self.resolve(href))
            else {
                continue;
            };
            if is_product_url(&link) {
                return Some(link);
            }
            nearest.get_or_insert(link);
        }
        nearest
    }

    fn resolve(&self, href: &str) -> Option<String> {
        resolve_url(&self.base, href)
    }
}
