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

use crate::application::dto::training_dto::{TrainingDto, TrainingForm};
use crate::application::mappers::training_mapper::TrainingMapper;
use crate::domain::models::training::ActivityType;
use crate::domain::services::training_service::TrainingService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use metrics::counter;
use serde::Deserialize;
use std::sync::Arc;

/// 运动类型查询参数
#[derive(Debug, Deserialize)]
pub struct ActivityTypeQuery {
    /// 运动类型
    #[serde(rename = "activityType")]
    pub activity_type: ActivityType,
}

/// 获取全部训练
pub async fn get_all_trainings(
    Extension(training_service): Extension<Arc<TrainingService>>,
) -> Result<Json<Vec<TrainingDto>>, AppError> {
    let trainings = training_service.find_all_trainings().await?;

    Ok(Json(trainings.iter().map(TrainingDto::from).collect()))
}

/// 查找在指定日期之后结束的训练
///
/// 路径中的日期按UTC当日零点换算为时间阈值
pub async fn get_trainings_finished_after(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Path(after_time): Path<NaiveDate>,
) -> Result<Json<Vec<TrainingDto>>, AppError> {
    let threshold = after_time.and_time(NaiveTime::MIN).and_utc().fixed_offset();
    let trainings = training_service
        .find_trainings_finished_after(threshold)
        .await?;

    Ok(Json(trainings.iter().map(TrainingDto::from).collect()))
}

/// 按运动类型查找训练
pub async fn get_trainings_by_activity_type(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Query(query): Query<ActivityTypeQuery>,
) -> Result<Json<Vec<TrainingDto>>, AppError> {
    let trainings = training_service
        .find_trainings_by_activity_type(query.activity_type)
        .await?;

    Ok(Json(trainings.iter().map(TrainingDto::from).collect()))
}

/// 按归属用户查找训练
pub async fn get_trainings_by_user_id(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<TrainingDto>>, AppError> {
    let trainings = training_service.find_trainings_by_user_id(user_id).await?;

    Ok(Json(trainings.iter().map(TrainingDto::from).collect()))
}

/// 创建新训练
///
/// # 参数
///
/// * `payload` - 训练表单
///
/// # 返回值
///
/// * `Ok((StatusCode, Json<TrainingDto>))` - 201与创建的训练
/// * `Err(AppError)` - 引用的用户不存在时返回404
pub async fn add_training(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Extension(training_mapper): Extension<Arc<TrainingMapper>>,
    Json(payload): Json<TrainingForm>,
) -> Result<(StatusCode, Json<TrainingDto>), AppError> {
    let training = training_mapper.to_entity(&payload).await?;
    let created = training_service.create_training(training).await?;
    counter!("trainings_created_total").increment(1);

    Ok((StatusCode::CREATED, Json(TrainingDto::from(&created))))
}

/// 更新训练
///
/// 路径中的ID决定更新目标，表单中的用户引用重新解析
pub async fn update_training(
    Extension(training_service): Extension<Arc<TrainingService>>,
    Extension(training_mapper): Extension<Arc<TrainingMapper>>,
    Path(training_id): Path<i64>,
    Json(payload): Json<TrainingForm>,
) -> Result<Json<TrainingDto>, AppError> {
    let training = training_mapper.to_entity(&payload).await?;
    let updated = training_service
        .update_training(Some(training_id), training)
        .await?;
    counter!("trainings_updated_total").increment(1);

    Ok(Json(TrainingDto::from(&updated)))
}
