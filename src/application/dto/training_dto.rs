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

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::application::dto::user_dto::UserDto;
use crate::domain::models::training::{ActivityType, Training};

/// 训练数据传输对象
///
/// 训练记录的对外表示，内嵌归属用户的完整资料。
/// 用户引用无法解析时该字段为空，而不是整条记录出错。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDto {
    /// 训练ID
    pub id: Option<i64>,
    /// 归属用户
    pub user: Option<UserDto>,
    /// 开始时间
    pub start_time: DateTime<FixedOffset>,
    /// 结束时间
    pub end_time: DateTime<FixedOffset>,
    /// 运动类型
    pub activity_type: ActivityType,
    /// 距离
    pub distance: f64,
    /// 平均速度
    pub average_speed: f64,
}

/// 训练表单数据传输对象
///
/// 创建和更新训练的请求载体，通过用户ID引用归属用户。
/// 数值字段不做范围校验，越界值原样接受。
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingForm {
    /// 归属用户ID
    pub user_id: i64,
    /// 开始时间
    pub start_time: DateTime<FixedOffset>,
    /// 结束时间
    pub end_time: DateTime<FixedOffset>,
    /// 运动类型
    pub activity_type: ActivityType,
    /// 距离
    pub distance: f64,
    /// 平均速度
    pub average_speed: f64,
}

impl From<&Training> for TrainingDto {
    fn from(training: &Training) -> Self {
        Self {
            id: training.id,
            user: training.user.as_ref().map(UserDto::from),
            start_time: training.start_time,
            end_time: training.end_time,
            activity_type: training.activity_type,
            distance: training.distance,
            average_speed: training.average_speed,
        }
    }
}
