// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{DomainError, User};
use crate::domain::repositories::user_repository::UserRepository;
use chrono::NaiveDate;
use std::sync::Arc;

/// 用户服务
///
/// 处理用户相关的业务逻辑，包括用户的创建、更新、删除
/// 以及各类查询。条件查询基于仓库的全量快照在内存中过滤，
/// 过滤谓词即为查询语义的唯一定义。
pub struct UserService {
    /// 用户仓库
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// 创建新的用户服务实例
    ///
    /// # 参数
    ///
    /// * `users` - 用户仓库实例
    ///
    /// # 返回值
    ///
    /// 返回新的用户服务实例
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// 根据ID获取用户
    ///
    /// # 参数
    ///
    /// * `id` - 用户ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(User))` - 找到的用户
    /// * `Ok(None)` - 用户不存在
    /// * `Err(DomainError)` - 存储层错误
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// 根据邮箱精确查找用户
    ///
    /// 匹配区分大小写，要求完全相等。
    ///
    /// # 参数
    ///
    /// * `email` - 电子邮箱
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(User))` - 找到的用户
    /// * `Ok(None)` - 无匹配用户
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().find(|user| user.email == email))
    }

    /// 按邮箱片段模糊查找用户
    ///
    /// 匹配不区分大小写，片段出现在邮箱任意位置即命中。
    /// 空片段匹配所有用户。
    ///
    /// # 参数
    ///
    /// * `email` - 邮箱片段
    ///
    /// # 返回值
    ///
    /// 返回所有命中的用户列表
    pub async fn find_users_by_email_like(&self, email: &str) -> Result<Vec<User>, DomainError> {
        let fragment = email.to_lowercase();
        let users = self.users.find_all().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.email.to_lowercase().contains(&fragment))
            .collect())
    }

    /// 查找出生日期早于指定日期的用户
    ///
    /// 比较为严格早于，出生日期恰好等于指定日期的用户不命中。
    ///
    /// # 参数
    ///
    /// * `date` - 日期阈值
    ///
    /// # 返回值
    ///
    /// 返回所有命中的用户列表
    pub async fn find_users_older_than(&self, date: NaiveDate) -> Result<Vec<User>, DomainError> {
        let users = self.users.find_all().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.birthdate < date)
            .collect())
    }

    /// 获取全部用户
    pub async fn find_all_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.find_all().await?)
    }

    /// 创建新用户
    ///
    /// 输入实体不得携带标识，标识由存储层在持久化时分配。
    ///
    /// # 参数
    ///
    /// * `user` - 待创建的用户
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 携带已分配标识的用户
    /// * `Err(DomainError)` - 输入已携带标识或存储层错误
    pub async fn create_user(&self, user: User) -> Result<User, DomainError> {
        tracing::info!("Creating User {:?}", user);
        if user.id.is_some() {
            return Err(DomainError::InvalidState(
                "User has already DB ID, create is not permitted!".to_string(),
            ));
        }
        Ok(self.users.save(&user).await?)
    }

    /// 更新用户
    ///
    /// 目标标识强制写入实体，实体内嵌的标识被覆盖。
    ///
    /// # 参数
    ///
    /// * `id` - 目标用户ID
    /// * `user` - 待写入的用户数据
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 更新后的用户
    /// * `Err(DomainError)` - 目标标识为空或存储层错误
    pub async fn update_user(&self, id: Option<i64>, mut user: User) -> Result<User, DomainError> {
        tracing::info!("Updating User id: {:?} with data: {:?}", id, user);
        if id.is_none() {
            return Err(DomainError::InvalidState(
                "User does not exist, update is not permitted!".to_string(),
            ));
        }
        user.id = id;
        Ok(self.users.save(&user).await?)
    }

    /// 根据ID删除用户
    ///
    /// 删除不存在的用户不视为错误。
    ///
    /// # 参数
    ///
    /// * `id` - 用户ID
    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        Ok(self.users.delete_by_id(id).await?)
    }
}

#[cfg(test)]
#[path = "user_service_test.rs"]
mod tests;
