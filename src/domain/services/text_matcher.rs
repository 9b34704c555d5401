// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 不区分大小写的子串匹配
///
/// 两侧都转为小写后比较，空白字符保持原样。空的 `needle` 不匹配任何文本。
pub fn contains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
