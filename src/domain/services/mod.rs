// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 文本匹配（text_matcher）：不区分大小写的子串匹配
/// - 链接提取（link_extractor）：为匹配的文本找出最相关的链接
/// - 匹配流程（match_pipeline）：解析、匹配、提取与回退
/// - 通知（notifier）：通知渠道抽象
pub mod link_extractor;
pub mod match_pipeline;
pub mod notifier;
pub mod text_matcher;
