// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::models::user::User;

/// 训练实体
///
/// 表示一名用户完成的一次训练记录，包含起止时间、运动类型、
/// 距离和平均速度。训练通过用户引用归属于某个用户，该引用
/// 在存储层为可空外键，历史数据中可能指向已不存在的用户。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Training {
    /// 训练唯一标识符，由存储层分配，未持久化时为空
    pub id: Option<i64>,
    /// 归属用户，引用无法解析时为空
    pub user: Option<User>,
    /// 开始时间
    pub start_time: DateTime<FixedOffset>,
    /// 结束时间
    pub end_time: DateTime<FixedOffset>,
    /// 运动类型
    pub activity_type: ActivityType,
    /// 距离，单位为公里
    pub distance: f64,
    /// 平均速度，单位为公里每小时
    pub average_speed: f64,
}

/// 运动类型枚举
///
/// 定义了训练记录支持的运动类型，用于按类型筛选训练。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    /// 跑步
    #[default]
    Running,
    /// 骑行
    Cycling,
    /// 步行
    Walking,
    /// 游泳
    Swimming,
    /// 网球
    Tennis,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActivityType::Running => write!(f, "running"),
            ActivityType::Cycling => write!(f, "cycling"),
            ActivityType::Walking => write!(f, "walking"),
            ActivityType::Swimming => write!(f, "swimming"),
            ActivityType::Tennis => write!(f, "tennis"),
        }
    }
}

impl FromStr for ActivityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(ActivityType::Running),
            "cycling" => Ok(ActivityType::Cycling),
            "walking" => Ok(ActivityType::Walking),
            "swimming" => Ok(ActivityType::Swimming),
            "tennis" => Ok(ActivityType::Tennis),
            _ => Err(()),
        }
    }
}

impl Training {
    /// 创建一条新的训练记录
    ///
    /// 新建训练不携带标识，标识在持久化时由存储层分配。
    ///
    /// # 参数
    ///
    /// * `user` - 归属用户
    /// * `start_time` - 开始时间
    /// * `end_time` - 结束时间
    /// * `activity_type` - 运动类型
    /// * `distance` - 距离
    /// * `average_speed` - 平均速度
    ///
    /// # 返回值
    ///
    /// 返回新创建的训练实例
    pub fn new(
        user: User,
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
        activity_type: ActivityType,
        distance: f64,
        average_speed: f64,
    ) -> Self {
        Self {
            id: None,
            user: Some(user),
            start_time,
            end_time,
            activity_type,
            distance,
            average_speed,
        }
    }
}
