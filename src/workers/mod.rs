// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供周期性的页面检查工作器
pub mod watch_worker;
pub mod worker;

pub use worker::Worker;
