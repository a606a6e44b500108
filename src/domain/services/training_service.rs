// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::training::{ActivityType, Training};
use crate::domain::models::user::DomainError;
use crate::domain::repositories::training_repository::TrainingRepository;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

/// 训练服务
///
/// 处理训练记录相关的业务逻辑，包括训练的创建、更新
/// 以及各类查询。条件查询基于仓库的全量快照在内存中过滤，
/// 过滤谓词即为查询语义的唯一定义。训练不提供删除操作。
pub struct TrainingService {
    /// 训练仓库
    trainings: Arc<dyn TrainingRepository>,
}

impl TrainingService {
    /// 创建新的训练服务实例
    ///
    /// # 参数
    ///
    /// * `trainings` - 训练仓库实例
    ///
    /// # 返回值
    ///
    /// 返回新的训练服务实例
    pub fn new(trainings: Arc<dyn TrainingRepository>) -> Self {
        Self { trainings }
    }

    /// 根据ID获取训练
    ///
    /// # 参数
    ///
    /// * `id` - 训练ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Training))` - 找到的训练
    /// * `Ok(None)` - 训练不存在
    /// * `Err(DomainError)` - 存储层错误
    pub async fn get_training(&self, id: i64) -> Result<Option<Training>, DomainError> {
        Ok(self.trainings.find_by_id(id).await?)
    }

    /// 获取全部训练
    pub async fn find_all_trainings(&self) -> Result<Vec<Training>, DomainError> {
        Ok(self.trainings.find_all().await?)
    }

    /// 查找结束时间晚于指定时刻的训练
    ///
    /// 比较为严格晚于，结束时间恰好等于指定时刻的训练不命中。
    ///
    /// # 参数
    ///
    /// * `time` - 时间阈值
    ///
    /// # 返回值
    ///
    /// 返回所有命中的训练列表
    pub async fn find_trainings_finished_after(
        &self,
        time: DateTime<FixedOffset>,
    ) -> Result<Vec<Training>, DomainError> {
        let trainings = self.trainings.find_all().await?;
        Ok(trainings
            .into_iter()
            .filter(|training| training.end_time > time)
            .collect())
    }

    /// 按运动类型查找训练
    ///
    /// # 参数
    ///
    /// * `activity_type` - 运动类型
    ///
    /// # 返回值
    ///
    /// 返回所有命中的训练列表
    pub async fn find_trainings_by_activity_type(
        &self,
        activity_type: ActivityType,
    ) -> Result<Vec<Training>, DomainError> {
        let trainings = self.trainings.find_all().await?;
        Ok(trainings
            .into_iter()
            .filter(|training| training.activity_type == activity_type)
            .collect())
    }

    /// 按归属用户查找训练
    ///
    /// 用户引用无法解析的训练一律不命中，不会因引用缺失报错。
    ///
    /// # 参数
    ///
    /// * `user_id` - 用户ID
    ///
    /// # 返回值
    ///
    /// 返回所有命中的训练列表
    pub async fn find_trainings_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Vec<Training>, DomainError> {
        let trainings = self.trainings.find_all().await?;
        Ok(trainings
            .into_iter()
            .filter(|training| {
                training
                    .user
                    .as_ref()
                    .and_then(|user| user.id)
                    .is_some_and(|id| id == user_id)
            })
            .collect())
    }

    /// 创建新训练
    ///
    /// 输入实体不得携带标识，标识由存储层在持久化时分配。
    ///
    /// # 参数
    ///
    /// * `training` - 待创建的训练
    ///
    /// # 返回值
    ///
    /// * `Ok(Training)` - 携带已分配标识的训练
    /// * `Err(DomainError)` - 输入已携带标识或存储层错误
    pub async fn create_training(&self, training: Training) -> Result<Training, DomainError> {
        tracing::info!("Creating training {:?}", training);
        if training.id.is_some() {
            return Err(DomainError::InvalidState(
                "Training has already DB ID, create is not permitted!".to_string(),
            ));
        }
        Ok(self.trainings.save(&training).await?)
    }

    /// 更新训练
    ///
    /// 目标标识强制写入实体，实体内嵌的标识被覆盖。
    ///
    /// # 参数
    ///
    /// * `id` - 目标训练ID
    /// * `training` - 待写入的训练数据
    ///
    /// # 返回值
    ///
    /// * `Ok(Training)` - 更新后的训练
    /// * `Err(DomainError)` - 目标标识为空或存储层错误
    pub async fn update_training(
        &self,
        id: Option<i64>,
        mut training: Training,
    ) -> Result<Training, DomainError> {
        tracing::info!("Updating Training id: {:?} with data: {:?}", id, training);
        if id.is_none() {
            return Err(DomainError::InvalidState(
                "Training does not exist, update is not permitted!".to_string(),
            ));
        }
        training.id = id;
        Ok(self.trainings.save(&training).await?)
    }
}

#[cfg(test)]
#[path = "training_service_test.rs"]
mod tests;
