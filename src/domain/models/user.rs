// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::repositories::user_repository::RepositoryError;

/// 用户实体
///
/// 表示系统中注册的一名用户。用户是训练记录的归属主体，
/// 其唯一标识由存储层在首次持久化时分配，新建实体的标识
/// 必须为空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符，由存储层分配，未持久化时为空
    pub id: Option<i64>,
    /// 名字
    pub first_name: String,
    /// 姓氏
    pub last_name: String,
    /// 出生日期
    pub birthdate: NaiveDate,
    /// 电子邮箱，在系统内唯一
    pub email: String,
}

/// 领域错误类型
///
/// 表示在领域层可能发生的各种错误情况，包括实体状态不合法、
/// 引用的用户不存在以及底层存储错误。
#[derive(Error, Debug)]
pub enum DomainError {
    /// 实体状态不合法，当创建或更新操作违反标识分配规则时发生
    #[error("{0}")]
    InvalidState(String),

    /// 用户不存在，当按标识解析用户引用失败时发生
    #[error("User with ID={0} was not found")]
    UserNotFound(i64),

    /// 存储错误，由底层仓库操作失败引起
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl User {
    /// 创建一个新的用户
    ///
    /// 新建用户不携带标识，标识在持久化时由存储层分配。
    ///
    /// # 参数
    ///
    /// * `first_name` - 名字
    /// * `last_name` - 姓氏
    /// * `birthdate` - 出生日期
    /// * `email` - 电子邮箱
    ///
    /// # 返回值
    ///
    /// 返回新创建的用户实例
    pub fn new(first_name: String, last_name: String, birthdate: NaiveDate, email: String) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            birthdate,
            email,
        }
    }
}
