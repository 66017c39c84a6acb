//! HTTP-level integration tests for `/api/product-sales-summaries`.
//!
//! Requests go straight into the router via `tower::ServiceExt`, backed by
//! the in-memory repository.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, delete, get, header, post_json, put_json, TestApp};
use serde_json::{json, Value};

const BASE: &str = "/api/product-sales-summaries";

fn summary(name: &str, units: i64) -> Value {
    json!({
        "productName": name,
        "region": "EMEA",
        "periodStart": "2024-01-01",
        "periodEnd": "2024-03-31",
        "unitsSold": units,
        "revenueCents": units * 250
    })
}

async fn create(app: &TestApp, body: Value) -> Value {
    let response = post_json(app, BASE, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_location_and_alert() {
    let app = common::build_test_app();
    let response = post_json(&app, BASE, summary("Aspirin", 10)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = header(&response, "location").to_string();
    let alert = header(&response, "x-salesboardapp-alert").to_string();
    let json = body_json(response).await;

    let id = json["id"].as_i64().unwrap();
    assert_eq!(location, format!("{BASE}/{id}"));
    assert_eq!(
        alert,
        format!("A new productSalesSummary is created with identifier {id}")
    );
    assert_eq!(json["productName"], "Aspirin");
    assert_eq!(json["unitsSold"], 10);
}

#[tokio::test]
async fn created_record_is_retrievable_by_returned_id() {
    let app = common::build_test_app();
    let created = create(&app, summary("Retrieve Me", 3)).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn create_with_id_returns_400_and_persists_nothing() {
    let app = common::build_test_app();
    let mut body = summary("Has Id", 1);
    body["id"] = json!(5);

    let response = post_json(&app, BASE, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(header(&response, "x-salesboardapp-error"), "error.idexists");
    assert_eq!(
        header(&response, "x-salesboardapp-params"),
        "productSalesSummary"
    );
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn create_with_invalid_fields_returns_400() {
    let app = common::build_test_app();
    let response = post_json(&app, BASE, summary("", 1)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn create_with_negative_units_returns_400() {
    let app = common::build_test_app();
    let response = post_json(&app, BASE, summary("Negative", -4)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.repo.is_empty().await);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_without_id_behaves_like_create() {
    let app = common::build_test_app();
    let response = put_json(&app, BASE, summary("Via Put", 8)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = header(&response, "location").to_string();
    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(location, format!("{BASE}/{id}"));

    let fetched = body_json(get(&app, &format!("{BASE}/{id}")).await).await;
    assert_eq!(fetched["productName"], "Via Put");
}

#[tokio::test]
async fn update_with_id_returns_200_and_persists_fields() {
    let app = common::build_test_app();
    let created = create(&app, summary("Original", 1)).await;
    let id = created["id"].as_i64().unwrap();

    let mut changed = summary("Renamed", 99);
    changed["id"] = json!(id);
    changed["region"] = Value::Null;

    let response = put_json(&app, BASE, changed.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header(&response, "x-salesboardapp-alert"),
        format!("A productSalesSummary is updated with identifier {id}")
    );
    assert_eq!(body_json(response).await, changed);

    let fetched = body_json(get(&app, &format!("{BASE}/{id}")).await).await;
    assert_eq!(fetched, changed);
}

#[tokio::test]
async fn update_with_unknown_id_saves_under_that_id() {
    let app = common::build_test_app();
    let mut body = summary("Never Created", 2);
    body["id"] = json!(777);

    let response = put_json(&app, BASE, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, &format!("{BASE}/777")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_with_invalid_fields_returns_400() {
    let app = common::build_test_app();
    let created = create(&app, summary("Valid", 1)).await;

    let mut body = summary("", 1);
    body["id"] = created["id"].clone();
    let response = put_json(&app, BASE, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Get / Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_unknown_id_returns_404_with_empty_body() {
    let app = common::build_test_app();
    let response = get(&app, &format!("{BASE}/999999")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn delete_existing_then_get_returns_404() {
    let app = common::build_test_app();
    let created = create(&app, summary("Delete Me", 1)).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header(&response, "x-salesboardapp-alert"),
        format!("A productSalesSummary is deleted with identifier {id}")
    );
    assert!(body_bytes(response).await.is_empty());

    let response = get(&app, &format!("{BASE}/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_returns_200_with_alert() {
    let app = common::build_test_app();
    let response = delete(&app, &format!("{BASE}/424242")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-salesboardapp-params"), "424242");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_empty_collection() {
    let app = common::build_test_app();
    let response = get(&app, BASE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-total-count"), "0");
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn list_returns_min_of_page_size_and_total() {
    let app = common::build_test_app();
    for i in 0..5 {
        create(&app, summary(&format!("P{i}"), i)).await;
    }

    let response = get(&app, &format!("{BASE}?page=0&size=2")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-total-count"), "5");
    let link = header(&response, "link").to_string();
    assert!(link.contains(&format!("<{BASE}?page=1&size=2>; rel=\"next\"")));
    assert!(link.contains(&format!("<{BASE}?page=2&size=2>; rel=\"last\"")));
    assert!(!link.contains("rel=\"prev\""));
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = get(&app, &format!("{BASE}?page=2&size=2")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(&app, &format!("{BASE}?size=10")).await;
    assert_eq!(header(&response, "x-total-count"), "5");
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn list_sorts_by_requested_property() {
    let app = common::build_test_app();
    create(&app, summary("low", 1)).await;
    create(&app, summary("high", 50)).await;
    create(&app, summary("mid", 10)).await;

    let response = get(&app, &format!("{BASE}?sort=unitsSold,desc")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["productName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["high", "mid", "low"]);
}

#[tokio::test]
async fn list_with_unknown_sort_property_returns_400() {
    let app = common::build_test_app();
    let response = get(&app, &format!("{BASE}?sort=password,asc")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn list_with_largest_page_index_returns_empty_page() {
    let app = common::build_test_app();
    create(&app, summary("Only", 1)).await;

    let response = get(&app, &format!("{BASE}?page={}&size=1", i64::MAX)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-total-count"), "1");
    let link = header(&response, "link").to_string();
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains(&format!("<{BASE}?page=0&size=1>; rel=\"last\"")));
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_with_id_and_invalid_fields_reports_validation_only() {
    let app = common::build_test_app();
    let mut body = summary("", 1);
    body["id"] = json!(5);

    let response = post_json(&app, BASE, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get("x-salesboardapp-error").is_none());
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(app.repo.is_empty().await);
}

#[tokio::test]
async fn create_after_largest_explicit_id_fails_without_overwriting() {
    let app = common::build_test_app();
    let mut body = summary("Top", 1);
    body["id"] = json!(i64::MAX);
    let response = put_json(&app, BASE, body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json(&app, BASE, summary("Overflow", 2)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");

    let fetched = body_json(get(&app, &format!("{BASE}/{}", i64::MAX)).await).await;
    assert_eq!(fetched, body);
    assert_eq!(app.repo.len().await, 1);
}
