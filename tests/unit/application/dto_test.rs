// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDate};
use serde_json::json;
use validator::Validate;

use fittrackrs::application::dto::training_dto::{TrainingDto, TrainingForm};
use fittrackrs::application::dto::user_dto::UserDto;
use fittrackrs::domain::models::training::{ActivityType, Training};
use fittrackrs::domain::models::user::User;

fn sample_user() -> User {
    let mut user = User::new(
        "Alice".to_string(),
        "Smith".to_string(),
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        "alice@example.com".to_string(),
    );
    user.id = Some(3);
    user
}

#[test]
fn test_user_dto_uses_camel_case_keys() {
    // Given: 已持久化的用户
    let dto = UserDto::from(&sample_user());

    // When: 序列化为JSON
    let value = serde_json::to_value(&dto).unwrap();

    // Then: 字段名为驼峰形式
    assert_eq!(value["id"], 3);
    assert_eq!(value["firstName"], "Alice");
    assert_eq!(value["lastName"], "Smith");
    assert_eq!(value["birthdate"], "1990-06-15");
    assert_eq!(value["email"], "alice@example.com");
    assert!(value.get("first_name").is_none());
}

#[test]
fn test_user_dto_to_entity_drops_id() {
    // Given: 携带标识的传输对象
    let dto: UserDto = serde_json::from_value(json!({
        "id": 42,
        "firstName": "Bob",
        "lastName": "Jones",
        "birthdate": "1985-03-01",
        "email": "bob@example.com"
    }))
    .unwrap();

    // When: 转换为领域实体
    let user = dto.to_entity();

    // Then: 标识被丢弃，由服务端决定
    assert!(user.id.is_none());
    assert_eq!(user.first_name, "Bob");
    assert_eq!(user.email, "bob@example.com");
}

#[test]
fn test_user_dto_validation_rules() {
    // Given: 姓名为空且邮箱非法的传输对象
    let dto: UserDto = serde_json::from_value(json!({
        "firstName": "",
        "lastName": "",
        "birthdate": "1985-03-01",
        "email": "not-an-email"
    }))
    .unwrap();

    // When: 执行校验
    let result = dto.validate();

    // Then: 三项规则全部失败
    let errors = result.unwrap_err();
    assert!(errors.field_errors().contains_key("first_name"));
    assert!(errors.field_errors().contains_key("last_name"));
    assert!(errors.field_errors().contains_key("email"));
}

#[test]
fn test_training_form_accepts_out_of_range_values() {
    // Given: 数值越界的表单
    let form: TrainingForm = serde_json::from_value(json!({
        "userId": 1,
        "startTime": "2024-05-09T07:00:00Z",
        "endTime": "2024-05-09T08:30:00Z",
        "activityType": "RUNNING",
        "distance": -12.0,
        "averageSpeed": -8.0
    }))
    .unwrap();

    // Then: 数值字段不做范围校验，越界值原样接受
    assert_eq!(form.distance, -12.0);
    assert_eq!(form.average_speed, -8.0);
    assert_eq!(form.user_id, 1);
    assert_eq!(form.activity_type, ActivityType::Running);
}

#[test]
fn test_training_dto_embeds_resolved_user() {
    // Given: 归属用户已解析的训练
    let start = DateTime::parse_from_rfc3339("2024-05-09T07:00:00Z").unwrap();
    let end = DateTime::parse_from_rfc3339("2024-05-09T08:30:00Z").unwrap();
    let mut training = Training::new(sample_user(), start, end, ActivityType::Tennis, 0.0, 0.0);
    training.id = Some(11);

    // When: 序列化为JSON
    let value = serde_json::to_value(TrainingDto::from(&training)).unwrap();

    // Then: 内嵌用户资料，类型为传输格式
    assert_eq!(value["id"], 11);
    assert_eq!(value["user"]["firstName"], "Alice");
    assert_eq!(value["activityType"], "TENNIS");
    assert!(value.get("averageSpeed").is_some());
    assert!(value.get("average_speed").is_none());
}

#[test]
fn test_training_dto_serializes_missing_user_as_null() {
    // Given: 归属用户无法解析的训练
    let start = DateTime::parse_from_rfc3339("2024-05-09T07:00:00Z").unwrap();
    let end = DateTime::parse_from_rfc3339("2024-05-09T08:30:00Z").unwrap();
    let mut training = Training::new(sample_user(), start, end, ActivityType::Running, 5.0, 5.0);
    training.user = None;

    // When: 序列化为JSON
    let value = serde_json::to_value(TrainingDto::from(&training)).unwrap();

    // Then: 用户字段为空而不是整条记录出错
    assert!(value["user"].is_null());
}
