// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{create_test_app, seed_user};

#[tokio::test]
async fn test_create_user_assigns_id() {
    let app = create_test_app().await;

    // When: 创建新用户
    let response = app
        .server
        .post("/v1/users")
        .json(&json!({
            "firstName": "Alice",
            "lastName": "Smith",
            "birthdate": "1990-06-15",
            "email": "alice.smith@example.com"
        }))
        .await;

    // Then: 返回201，存储层分配ID
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["firstName"], "Alice");
    assert_eq!(body["lastName"], "Smith");
    assert_eq!(body["birthdate"], "1990-06-15");
    assert_eq!(body["email"], "alice.smith@example.com");

    // Then: 创建的用户可按ID读取
    let id = body["id"].as_i64().unwrap();
    let response = app.server.get(&format!("/v1/users/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: serde_json::Value = response.json();
    assert_eq!(fetched["email"], "alice.smith@example.com");
}

#[tokio::test]
async fn test_create_user_ignores_client_supplied_id() {
    let app = create_test_app().await;

    // Given: 请求体携带ID
    let response = app
        .server
        .post("/v1/users")
        .json(&json!({
            "id": 777,
            "firstName": "Bob",
            "lastName": "Jones",
            "birthdate": "1985-03-01",
            "email": "bob.jones@example.com"
        }))
        .await;

    // Then: 传输对象中的ID被丢弃，创建仍然成功且使用分配的ID
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_ne!(body["id"].as_i64().unwrap(), 777);
}

#[tokio::test]
async fn test_create_user_rejects_invalid_payload() {
    let app = create_test_app().await;

    // When: 姓名为空且邮箱格式非法
    let response = app
        .server
        .post("/v1/users")
        .json(&json!({
            "firstName": "",
            "lastName": "Smith",
            "birthdate": "1990-06-15",
            "email": "not-an-email"
        }))
        .await;

    // Then: 校验失败返回400
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("First name cannot be empty"));
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_email() {
    let app = create_test_app().await;

    // Given: 已占用该邮箱的用户
    seed_user(&app.server, "Jan", "Kowalski", "jan.kowalski@example.com").await;

    // When: 用相同邮箱再次创建用户
    let response = app
        .server
        .post("/v1/users")
        .json(&json!({
            "firstName": "Janina",
            "lastName": "Kowalska",
            "birthdate": "1991-03-02",
            "email": "jan.kowalski@example.com"
        }))
        .await;

    // Then: 唯一索引拒绝写入，存储错误以500返回
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("UNIQUE constraint failed: users.email"));

    // Then: 重复的用户未落库
    let response = app.server.get("/v1/users").await;
    let all: serde_json::Value = response.json();
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_user_by_id_not_found() {
    let app = create_test_app().await;

    // When: 查询不存在的用户
    let response = app.server.get("/v1/users/999").await;

    // Then: 返回404与未找到消息
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User with ID=999 was not found");
}

#[tokio::test]
async fn test_update_user_overrides_body_id() {
    let app = create_test_app().await;

    // Given: 已存在的用户
    let id = seed_user(&app.server, "Carol", "White", "carol.white@example.com").await;

    // When: 更新时请求体携带另一个ID
    let response = app
        .server
        .put(&format!("/v1/users/{}", id))
        .json(&json!({
            "id": 9999,
            "firstName": "Carol",
            "lastName": "Green",
            "birthdate": "1990-06-15",
            "email": "carol.green@example.com"
        }))
        .await;

    // Then: 路径中的ID决定更新目标
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["lastName"], "Green");

    // Then: 原记录被覆盖，未产生新记录
    let response = app.server.get("/v1/users").await;
    let all: serde_json::Value = response.json();
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["email"], "carol.green@example.com");
}

#[tokio::test]
async fn test_update_user_inserts_when_absent() {
    let app = create_test_app().await;

    // When: 对不存在的ID执行更新
    let response = app
        .server
        .put("/v1/users/42")
        .json(&json!({
            "firstName": "Dave",
            "lastName": "Brown",
            "birthdate": "1982-11-20",
            "email": "dave.brown@example.com"
        }))
        .await;

    // Then: 保存操作按给定ID落库
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), 42);

    let stored = app.user_service.get_user(42).await.unwrap();
    assert_eq!(stored.unwrap().email, "dave.brown@example.com");
}

#[tokio::test]
async fn test_update_user_rejects_taken_email() {
    let app = create_test_app().await;

    // Given: 两个邮箱各异的用户
    seed_user(&app.server, "Jan", "Kowalski", "jan.kowalski@example.com").await;
    let id = seed_user(&app.server, "Anna", "Nowak", "anna.nowak@example.com").await;

    // When: 更新第二个用户，改用第一个用户的邮箱
    let response = app
        .server
        .put(&format!("/v1/users/{}", id))
        .json(&json!({
            "firstName": "Anna",
            "lastName": "Nowak",
            "birthdate": "1990-06-15",
            "email": "jan.kowalski@example.com"
        }))
        .await;

    // Then: 唯一索引拒绝改写，存储错误以500返回
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("UNIQUE constraint failed: users.email"));

    // Then: 原邮箱保持不变
    let stored = app.user_service.get_user(id).await.unwrap();
    assert_eq!(stored.unwrap().email, "anna.nowak@example.com");
}

#[tokio::test]
async fn test_delete_user() {
    let app = create_test_app().await;

    // Given: 已存在的用户
    let id = seed_user(&app.server, "Erin", "Black", "erin.black@example.com").await;

    // When: 删除该用户
    let response = app.server.delete(&format!("/v1/users/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    // Then: 用户不再可读
    let response = app.server.get(&format!("/v1/users/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Then: 重复删除不报错
    let response = app.server.delete(&format!("/v1/users/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_find_users_by_email_fragment() {
    let app = create_test_app().await;

    // Given: 多个用户
    seed_user(&app.server, "Alice", "Smith", "alice@example.com").await;
    seed_user(&app.server, "Bob", "Jones", "bob@example.com").await;
    seed_user(&app.server, "Alan", "Walker", "alan@sample.org").await;

    // When: 按大写片段查询
    let response = app.server.get("/v1/users/email?email=EXAMPLE").await;

    // Then: 匹配不区分大小写，返回仅含标识与邮箱的投影
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0].get("firstName").is_none());
    assert!(users[0]["email"].as_str().is_some());
    assert!(users[0]["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_find_users_older_than_excludes_boundary() {
    let app = create_test_app().await;

    // Given: 出生日期在阈值前、当天与之后的用户
    for (name, birthdate, email) in [
        ("Old", "1989-12-31", "old@example.com"),
        ("Edge", "1990-06-15", "edge@example.com"),
        ("Young", "1992-01-01", "young@example.com"),
    ] {
        let response = app
            .server
            .post("/v1/users")
            .json(&json!({
                "firstName": name,
                "lastName": "Tester",
                "birthdate": birthdate,
                "email": email
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    // When: 查询早于1990-06-15出生的用户
    let response = app.server.get("/v1/users/older/1990-06-15").await;

    // Then: 严格早于，阈值当天不命中
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["firstName"], "Old");
}

#[tokio::test]
async fn test_get_all_simple_users_projection() {
    let app = create_test_app().await;

    // Given: 已存在的用户
    seed_user(&app.server, "Fay", "Gray", "fay.gray@example.com").await;

    // When: 查询简要列表
    let response = app.server.get("/v1/users/simple").await;

    // Then: 投影仅含标识与姓名
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["firstName"], "Fay");
    assert_eq!(users[0]["lastName"], "Gray");
    assert!(users[0].get("email").is_none());
    assert!(users[0].get("birthdate").is_none());
}
