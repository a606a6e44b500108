// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::training::Training;
use crate::domain::repositories::training_repository::TrainingRepository;
use crate::domain::repositories::user_repository::RepositoryError;
use crate::infrastructure::database::entities::training as training_entity;
use crate::infrastructure::database::entities::user as user_entity;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

/// 训练仓库实现
///
/// 基于SeaORM实现的训练数据访问层。读取时联表解析归属用户，
/// 外键为空或指向已删除用户时归属字段为空。
#[derive(Clone)]
pub struct TrainingRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TrainingRepositoryImpl {
    /// 创建新的训练仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的训练仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<Training> for training_entity::ActiveModel {
    fn from(training: Training) -> Self {
        Self {
            // 标识为空时留给存储层分配
            id: match training.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            user_id: Set(training.user.as_ref().and_then(|user| user.id)),
            start_time: Set(training.start_time),
            end_time: Set(training.end_time),
            activity_type: Set(training.activity_type.to_string()),
            distance: Set(training.distance),
            average_speed: Set(training.average_speed),
        }
    }
}

fn into_training(model: training_entity::Model, user: Option<user_entity::Model>) -> Training {
    Training {
        id: Some(model.id),
        user: user.map(Into::into),
        start_time: model.start_time,
        end_time: model.end_time,
        activity_type: model.activity_type.parse().unwrap_or_default(),
        distance: model.distance,
        average_speed: model.average_speed,
    }
}

#[async_trait]
impl TrainingRepository for TrainingRepositoryImpl {
    async fn save(&self, training: &Training) -> Result<Training, RepositoryError> {
        let model: training_entity::ActiveModel = training.clone().into();

        let saved = match training.id {
            None => model.insert(self.db.as_ref()).await?,
            Some(id) => {
                let exists = training_entity::Entity::find_by_id(id)
                    .one(self.db.as_ref())
                    .await?
                    .is_some();
                if exists {
                    // 行在存在性检查与更新之间被并发删除时按未找到处理
                    model.update(self.db.as_ref()).await.map_err(|err| match err {
                        DbErr::RecordNotUpdated => RepositoryError::NotFound,
                        other => RepositoryError::Database(other),
                    })?
                } else {
                    model.insert(self.db.as_ref()).await?
                }
            }
        };

        // 返回实体沿用输入的用户引用
        let mut stored = into_training(saved, None);
        stored.user = training.user.clone();
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Training>, RepositoryError> {
        let result = training_entity::Entity::find_by_id(id)
            .find_also_related(user_entity::Entity)
            .one(self.db.as_ref())
            .await?;

        Ok(result.map(|(model, user)| into_training(model, user)))
    }

    async fn find_all(&self) -> Result<Vec<Training>, RepositoryError> {
        let rows = training_entity::Entity::find()
            .find_also_related(user_entity::Entity)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, user)| into_training(model, user))
            .collect())
    }
}
