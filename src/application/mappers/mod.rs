// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 映射器模块
///
/// 负责数据传输对象与领域实体之间的转换
/// 需要跨资源解析引用的转换在此完成
pub mod training_mapper;
