// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 从默认值、可选配置文件和环境变量加载并校验设置
pub mod settings;
