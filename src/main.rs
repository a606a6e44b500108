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

use std::sync::Arc;

use axum::Extension;
use migration::{Migrator, MigratorTrait};
use tower_http::trace::TraceLayer;
use tracing::info;

use fittrackrs::application::mappers::training_mapper::TrainingMapper;
use fittrackrs::config::settings::Settings;
use fittrackrs::domain::services::training_service::TrainingService;
use fittrackrs::domain::services::user_service::UserService;
use fittrackrs::infrastructure::database::connection;
use fittrackrs::infrastructure::metrics;
use fittrackrs::infrastructure::repositories::training_repo_impl::TrainingRepositoryImpl;
use fittrackrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use fittrackrs::presentation::routes;
use fittrackrs::utils::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 初始化遥测系统
    telemetry::init_telemetry();
    info!("Starting fittrackrs...");

    // 2. 初始化指标导出器
    metrics::init_metrics();

    // 3. 加载配置
    let settings = Settings::new()?;

    // 4. 建立数据库连接池并执行迁移
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    Migrator::up(db.as_ref(), None).await?;

    // 5. 装配仓库与服务
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let training_repo = Arc::new(TrainingRepositoryImpl::new(db.clone()));
    let user_service = Arc::new(UserService::new(user_repo));
    let training_service = Arc::new(TrainingService::new(training_repo));
    let training_mapper = Arc::new(TrainingMapper::new(user_service.clone()));

    // 6. 构建路由
    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(Extension(user_service))
        .layer(Extension(training_service))
        .layer(Extension(training_mapper));

    // 7. 启动HTTP服务器
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
