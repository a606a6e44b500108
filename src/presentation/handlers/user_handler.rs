// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::user_dto::{EmailUserDto, SimpleUserDto, UserDto};
use crate::domain::models::user::DomainError;
use crate::domain::services::user_service::UserService;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use metrics::counter;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// 邮箱模糊查询参数
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// 邮箱片段
    pub email: String,
}

/// 获取全部用户
pub async fn get_all_users(
    Extension(user_service): Extension<Arc<UserService>>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = user_service.find_all_users().await?;

    Ok(Json(users.iter().map(UserDto::from).collect()))
}

/// 获取全部用户的简要信息
pub async fn get_all_simple_users(
    Extension(user_service): Extension<Arc<UserService>>,
) -> Result<Json<Vec<SimpleUserDto>>, AppError> {
    let users = user_service.find_all_users().await?;

    Ok(Json(users.iter().map(SimpleUserDto::from).collect()))
}

/// 根据ID获取用户详情
///
/// # 参数
///
/// * `id` - 用户ID
///
/// # 返回值
///
/// * `Ok(Json<UserDto>)` - 用户详情
/// * `Err(AppError)` - 用户不存在时返回404
pub async fn get_user_by_id(
    Extension(user_service): Extension<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, AppError> {
    let user = user_service
        .get_user(id)
        .await?
        .ok_or(DomainError::UserNotFound(id))?;

    Ok(Json(UserDto::from(&user)))
}

/// 按邮箱片段查找用户
///
/// 匹配不区分大小写，返回仅含标识与邮箱的精简投影
pub async fn find_users_by_email(
    Extension(user_service): Extension<Arc<UserService>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<EmailUserDto>>, AppError> {
    let users = user_service.find_users_by_email_like(&query.email).await?;

    Ok(Json(users.iter().map(EmailUserDto::from).collect()))
}

/// 查找出生日期早于指定日期的用户
pub async fn find_users_older_than(
    Extension(user_service): Extension<Arc<UserService>>,
    Path(time): Path<NaiveDate>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = user_service.find_users_older_than(time).await?;

    Ok(Json(users.iter().map(UserDto::from).collect()))
}

/// 创建新用户
///
/// # 参数
///
/// * `payload` - 用户数据
///
/// # 返回值
///
/// * `Ok((StatusCode, Json<UserDto>))` - 201与创建的用户
/// * `Err(AppError)` - 校验失败或存储层错误
pub async fn add_user(
    Extension(user_service): Extension<Arc<UserService>>,
    Json(payload): Json<UserDto>,
) -> Result<(StatusCode, Json<UserDto>), AppError> {
    payload.validate()?;

    let created = user_service.create_user(payload.to_entity()).await?;
    counter!("users_created_total").increment(1);

    Ok((StatusCode::CREATED, Json(UserDto::from(&created))))
}

/// 更新用户
///
/// 路径中的ID决定更新目标，请求体中的ID不被采用
pub async fn update_user(
    Extension(user_service): Extension<Arc<UserService>>,
    Path(id): Path<i64>,
    Json(payload): Json<UserDto>,
) -> Result<Json<UserDto>, AppError> {
    payload.validate()?;

    let updated = user_service.update_user(Some(id), payload.to_entity()).await?;
    counter!("users_updated_total").increment(1);

    Ok(Json(UserDto::from(&updated)))
}

/// 根据ID删除用户
pub async fn delete_user(
    Extension(user_service): Extension<Arc<UserService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    user_service.delete_user(id).await?;
    counter!("users_deleted_total").increment(1);

    Ok(StatusCode::NO_CONTENT)
}
