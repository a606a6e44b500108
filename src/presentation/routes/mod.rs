// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{training_handler, user_handler};
use axum::{routing::get, Router};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let user_routes = Router::new()
        .route(
            "/v1/users",
            get(user_handler::get_all_users).post(user_handler::add_user),
        )
        .route("/v1/users/simple", get(user_handler::get_all_simple_users))
        .route("/v1/users/email", get(user_handler::find_users_by_email))
        .route(
            "/v1/users/older/{time}",
            get(user_handler::find_users_older_than),
        )
        .route(
            "/v1/users/{id}",
            get(user_handler::get_user_by_id)
                .put(user_handler::update_user)
                .delete(user_handler::delete_user),
        );

    // GET按归属用户查询，PUT按训练ID更新，两者共用同一路径形态
    let training_routes = Router::new()
        .route(
            "/v1/trainings",
            get(training_handler::get_all_trainings).post(training_handler::add_training),
        )
        .route(
            "/v1/trainings/finished/{after_time}",
            get(training_handler::get_trainings_finished_after),
        )
        .route(
            "/v1/trainings/activityType",
            get(training_handler::get_trainings_by_activity_type),
        )
        .route(
            "/v1/trainings/{id}",
            get(training_handler::get_trainings_by_user_id)
                .put(training_handler::update_training),
        );

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(training_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
