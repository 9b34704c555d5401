// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// - 文档（document）：只读的HTML文档与元素句柄
/// - 领域模型（models）：候选链接、匹配结果、通知
/// - 服务（services）：匹配与链接提取逻辑、通知抽象
///
/// 领域层不依赖网络或配置实现。
pub mod document;
pub mod models;
pub mod services;
