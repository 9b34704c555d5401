// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::text_encoding::decode_html;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("static selector is valid"));

/// 已解析的HTML文档
///
/// 每个检查周期解析一次，只读，周期结束后丢弃
pub struct Document {
    html: Html,
}

impl Document {
    /// 从HTML文本解析文档
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// 从原始响应字节解析文档
    ///
    /// # 参数
    ///
    /// * `bytes` - 响应体
    /// * `content_type` - 响应的 `Content-Type`，用于确定字符集
    ///
    /// 非法字节按替换字符处理，与浏览器一致，不会失败
    pub fn from_bytes(bytes: &[u8], content_type: Option<&str>) -> Self {
        Self::parse(&decode_html(bytes, content_type))
    }

    /// `<body>` 的全部文本（包含所有后代文本节点）
    pub fn body_text(&self) -> String {
        self.html
            .select(&BODY_SELECTOR)
            .map(|body| Element::from(body).full_text())
            .collect()
    }

    /// 按文档顺序遍历所有元素，包括 `<html>` 本身
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(Element::from)
    }

    /// 按文档顺序返回匹配选择器的元素
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = Element<'a>> + 'a {
        self.html.select(selector).map(Element::from)
    }

    /// 文档中所有 `<a>` 元素
    pub fn anchors(&self) -> impl Iterator<Item = Element<'_>> {
        self.elements().filter(Element::is_anchor)
    }
}

/// 文档树中元素的只读句柄
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }
}

impl<'a> Element<'a> {
    /// 标签名（小写）
    pub fn tag(&self) -> &'a str {
        self.inner.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    pub fn is_anchor(&self) -> bool {
        self.tag() == "a"
    }

    /// 仅由直接子文本节点组成的文本，不包含子元素的文本
    pub fn direct_text(&self) -> String {
        self.inner
            .children()
            .filter_map(|child| child.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    /// 包含所有后代文本节点的文本，保留原始空白
    pub fn full_text(&self) -> String {
        self.inner.text().collect()
    }

    /// 祖先元素，由近及远
    pub fn parents(&self) -> impl Iterator<Item = Element<'a>> {
        self.inner
            .ancestors()
            .filter_map(ElementRef::wrap)
            .map(Element::from)
    }

    /// 直接子元素
    pub fn children(&self) -> impl Iterator<Item = Element<'a>> {
        self.inner
            .children()
            .filter_map(ElementRef::wrap)
            .map(Element::from)
    }

    /// 后代元素（先序遍历，不包含自身）
    pub fn descendants(&self) -> impl Iterator<Item = Element<'a>> {
        self.inner
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Element::from)
    }

    /// 先序遍历中第一个 `<a>` 后代
    pub fn first_descendant_anchor(&self) -> Option<Element<'a>> {
        self.descendants().find(Element::is_anchor)
    }
}
