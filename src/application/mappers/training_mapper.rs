// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use crate::application::dto::training_dto::TrainingForm;
use crate::domain::models::training::Training;
use crate::domain::models::user::DomainError;
use crate::domain::services::user_service::UserService;

/// 训练映射器
///
/// 将训练表单转换为领域实体。表单通过用户ID引用归属用户，
/// 转换时经由用户服务解析为完整用户，解析失败即为错误。
pub struct TrainingMapper {
    /// 用户服务
    users: Arc<UserService>,
}

impl TrainingMapper {
    /// 创建新的训练映射器实例
    ///
    /// # 参数
    ///
    /// * `users` - 用户服务实例
    ///
    /// # 返回值
    ///
    /// 返回新的训练映射器实例
    pub fn new(users: Arc<UserService>) -> Self {
        Self { users }
    }

    /// 将训练表单转换为领域实体
    ///
    /// # 参数
    ///
    /// * `form` - 训练表单
    ///
    /// # 返回值
    ///
    /// * `Ok(Training)` - 携带已解析用户的训练实体
    /// * `Err(DomainError)` - 引用的用户不存在或存储层错误
    pub async fn to_entity(&self, form: &TrainingForm) -> Result<Training, DomainError> {
        let user = self
            .users
            .get_user(form.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(form.user_id))?;

        Ok(Training::new(
            user,
            form.start_time,
            form.end_time,
            form.activity_type,
            form.distance,
            form.average_speed,
        ))
    }
}
