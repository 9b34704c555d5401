// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统与外部系统交互的实现：
/// - 指标（metrics）：Prometheus 指标导出
/// - 服务（services）：Discord 与 SMTP 通知渠道
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod metrics;
pub mod services;
