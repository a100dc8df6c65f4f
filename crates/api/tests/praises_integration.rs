//! Integration tests for the praise endpoints.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use domain::services::MockInquiryNotifier;
use sqlx::PgPool;

async fn listed_ids(app: &axum::Router, marker: &str) -> Vec<i64> {
    body_json(send(app, get_request("/api/v1/praises")).await)
        .await
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["message"].as_str().unwrap().contains(marker))
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

async fn insert_at(pool: &PgPool, message: &str, created_at: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO praises (message, created_at) VALUES ($1, $2::timestamptz) RETURNING id",
    )
    .bind(message)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("Failed to insert praise")
}

#[tokio::test]
async fn test_create_list_and_retrieve_praise() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let app = create_test_app(pool, MockInquiryNotifier::new());
    let marker = unique_marker();

    let mut created = Vec::new();
    for n in 0..2 {
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/praises",
                serde_json::json!({ "message": format!("  친절한 상담 {} {}  ", n, marker) }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert!(!json["message"].as_str().unwrap().ends_with(' '));
        created.push(json["id"].as_i64().unwrap());
    }

    let response = send(&app, get_request(&format!("/api/v1/praises/{}", created[0]))).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(listed_ids(&app, &marker).await, vec![created[1], created[0]]);
}

#[tokio::test]
async fn test_praises_listed_newest_first() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let app = create_test_app(pool.clone(), MockInquiryNotifier::new());
    let marker = unique_marker();

    let older = insert_at(&pool, &format!("빠른 대응 {}", marker), "2024-01-10T00:00:00Z").await;
    let newer = insert_at(&pool, &format!("꼼꼼한 설명 {}", marker), "2024-06-10T00:00:00Z").await;

    assert_eq!(listed_ids(&app, &marker).await, vec![newer, older]);
}

#[tokio::test]
async fn test_praises_with_equal_timestamps_keep_insertion_order() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let app = create_test_app(pool.clone(), MockInquiryNotifier::new());
    let marker = unique_marker();

    let mut inserted = Vec::new();
    for n in 0..3 {
        inserted.push(insert_at(&pool, &format!("감사 {} {}", n, marker), "2024-07-07T00:00:00Z").await);
    }

    assert_eq!(listed_ids(&app, &marker).await, inserted);
}

#[tokio::test]
async fn test_existing_praise_cannot_be_changed() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let app = create_test_app(pool.clone(), MockInquiryNotifier::new());
    let admin_key = create_admin_key(&pool).await;

    let response = send(
        &app,
        json_request("POST", "/api/v1/praises", serde_json::json!({"message": "감사합니다"})),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();
    let uri = format!("/api/v1/praises/{}", id);

    for method in ["PUT", "PATCH", "DELETE"] {
        let request = json_request(method, &uri, serde_json::json!({"message": "변경"}));
        let response = send(&app, with_admin_key(request, &admin_key)).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    let response = send(&app, get_request(&uri)).await;
    assert_eq!(body_json(response).await["message"], "감사합니다");

    // Moderation goes through the admin console
    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/admin/praises/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = send(&app, with_admin_key(delete, &admin_key)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_length_limit_checks_trimmed_message() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let app = create_test_app(pool, MockInquiryNotifier::new());

    let message = "고".repeat(280);
    let response = send(
        &app,
        json_request(
            "POST",
            "/api/v1/praises",
            serde_json::json!({ "message": format!("   {}   ", message) }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["message"], message);
}

#[tokio::test]
async fn test_unknown_praise_is_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };
    let app = create_test_app(pool, MockInquiryNotifier::new());

    let response = send(&app, get_request("/api/v1/praises/9223372036854775807")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
