// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 产品详情页路径片段
pub const PRODUCT_PATH_SEGMENT: &str = "/products/";

/// 将可能为相对路径的URL转换为绝对路径URL
///
/// 空的或无法解析的 `href` 返回 `None`，不会产生错误
pub fn resolve_url(base_url: &Url, href: &str) -> Option<String> {
    if href.is_empty() {
        return None;
    }
    base_url.join(href).ok().map(String::from)
}

/// 判断URL是否指向产品详情页
pub fn is_product_url(url: &str) -> bool {
    url.contains(PRODUCT_PATH_SEGMENT)
}
