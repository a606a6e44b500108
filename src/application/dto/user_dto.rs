// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::user::User;

/// 用户数据传输对象
///
/// 用户资源的完整对外表示，同时作为创建和更新请求的载体。
/// 入站时其中的标识不被采用，实体标识始终由服务端决定。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// 用户ID
    pub id: Option<i64>,
    /// 名字
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    /// 姓氏
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
    /// 出生日期
    pub birthdate: NaiveDate,
    /// 电子邮箱
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
}

/// 用户简要数据传输对象
///
/// 仅包含标识与姓名的精简投影
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleUserDto {
    /// 用户ID
    pub id: Option<i64>,
    /// 名字
    pub first_name: String,
    /// 姓氏
    pub last_name: String,
}

/// 用户邮箱数据传输对象
///
/// 仅包含标识与邮箱的精简投影
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailUserDto {
    /// 用户ID
    pub id: Option<i64>,
    /// 电子邮箱
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            birthdate: user.birthdate,
            email: user.email.clone(),
        }
    }
}

impl From<&User> for SimpleUserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<&User> for EmailUserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

impl UserDto {
    /// 转换为领域实体
    ///
    /// 传输对象中的标识被丢弃，得到的实体不携带标识。
    ///
    /// # 返回值
    ///
    /// 返回新的用户实体
    pub fn to_entity(&self) -> User {
        User::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.birthdate,
            self.email.clone(),
        )
    }
}
