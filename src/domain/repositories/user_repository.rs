// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到，仅在按标识写入的路径上出现，普通查询的缺失不使用此错误
    #[error("Record not found")]
    NotFound,
}

/// 用户仓库特质
///
/// 定义用户数据访问接口。接口仅暴露按标识存取与全量读取，
/// 所有条件筛选在领域服务中基于全量快照完成。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 保存用户，标识为空时插入并分配标识，否则按标识写入
    async fn save(&self, user: &User) -> Result<User, RepositoryError>;
    /// 根据ID查找用户
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError>;
    /// 获取全部用户
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    /// 根据ID删除用户
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
