// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::{RepositoryError, UserRepository};
use crate::infrastructure::database::entities::user as user_entity;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};
use std::sync::Arc;

/// 用户仓库实现
///
/// 基于SeaORM实现的用户数据访问层
#[derive(Clone)]
pub struct UserRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的用户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<user_entity::Model> for User {
    fn from(model: user_entity::Model) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            birthdate: model.birthdate,
            email: model.email,
        }
    }
}

impl From<User> for user_entity::ActiveModel {
    fn from(user: User) -> Self {
        Self {
            // 标识为空时留给存储层分配
            id: match user.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            birthdate: Set(user.birthdate),
            email: Set(user.email),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let model: user_entity::ActiveModel = user.clone().into();

        let saved = match user.id {
            None => model.insert(self.db.as_ref()).await?,
            Some(id) => {
                let exists = user_entity::Entity::find_by_id(id)
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

        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let models = user_entity::Entity::find().all(self.db.as_ref()).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        user_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }
}
