// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::training::Training;
use async_trait::async_trait;

use super::user_repository::RepositoryError;

/// 训练仓库特质
///
/// 定义训练数据访问接口。读取操作随训练一并解析归属用户，
/// 用户引用无法解析时该字段为空。
#[async_trait]
pub trait TrainingRepository: Send + Sync {
    /// 保存训练，标识为空时插入并分配标识，否则按标识写入
    async fn save(&self, training: &Training) -> Result<Training, RepositoryError>;
    /// 根据ID查找训练
    async fn find_by_id(&self, id: i64) -> Result<Option<Training>, RepositoryError>;
    /// 获取全部训练
    async fn find_all(&self) -> Result<Vec<Training>, RepositoryError>;
}
