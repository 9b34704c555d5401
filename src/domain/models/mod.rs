// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 候选链接（candidate_link）：去重、分级的相关链接
/// - 匹配结果（match_result）：单个检查周期的结果
/// - 通知（notification）：发送给通知渠道的内容
pub mod candidate_link;
pub mod match_result;
pub mod notification;
