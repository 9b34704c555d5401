// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::document::Document;
use crate::domain::models::match_result::MatchResult;
use crate::domain::services::link_extractor::LinkExtractor;
use crate::domain::services::text_matcher::contains;
use crate::utils::errors::PipelineError;
use tracing::{debug, info};

/// 匹配流程
///
/// 解析 -> 整页匹配 -> 链接提取 -> 回退到页面URL
pub struct MatchPipeline;

impl MatchPipeline {
    /// 检查页面内容
    ///
    /// # 参数
    ///
    /// * `html` - 响应体原始字节
    /// * `content_type` - 响应的 `Content-Type`
    /// * `base_url` - 页面URL
    /// * `phrase` - 搜索文本，不区分大小写
    ///
    /// # 返回值
    ///
    /// * `Ok(MatchResult)` - 匹配结果
    /// * `Err(PipelineError)` - 页面URL无效
    pub fn check(
        html: &[u8],
        content_type: Option<&str>,
        base_url: &str,
        phrase: &str,
    ) -> Result<MatchResult, PipelineError> {
        let extractor = LinkExtractor::new(base_url)?;
        let document = Document::from_bytes(html, content_type);

        if !contains(&document.body_text(), phrase) {
            info!("No match found");
            return Ok(MatchResult::no_match());
        }

        info!("Match found, extracting links");
        let links = extractor.find_links(&document, &phrase.to_lowercase());
        if links.is_empty() {
            debug!("No page-specific links, falling back to {}", base_url);
        }

        Ok(MatchResult::matched(links, base_url))
    }
}
