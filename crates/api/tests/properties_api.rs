//! HTTP-level integration tests for catalog browsing.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

async fn listed_ids(uri: &str) -> Vec<i64> {
    let response = get(build_test_app(), uri).await;
    assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
    body_json(response).await["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn unfiltered_listing_returns_whole_catalog() {
    assert_eq!(listed_ids("/api/properties").await, (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn category_maps_to_property_type() {
    assert_eq!(listed_ids("/api/properties?category=cabins").await, vec![3, 7]);
}

#[tokio::test]
async fn combined_query_applies_all_predicates() {
    let ids = listed_ids(
        "/api/properties?propertyType=House,Cabin&minPrice=150&maxPrice=300&amenities=Free%20parking&instantBook=true",
    )
    .await;
    assert_eq!(ids, vec![3, 8]);
}

#[tokio::test]
async fn empty_result_is_ok() {
    assert!(listed_ids("/api/properties?propertyType=Mountain").await.is_empty());
}

#[tokio::test]
async fn unknown_category_returns_400() {
    let response = get(build_test_app(), "/api/properties?category=castles").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_numeric_price_returns_400() {
    let response = get(build_test_app(), "/api/properties?minPrice=cheap").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn get_property_by_id() {
    let response = get(build_test_app(), "/api/properties/9").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["property"]["title"], "Ski-in/Ski-out Mountain Condo");
    assert_eq!(json["property"]["propertyType"], "Condo");
    assert_eq!(json["property"]["instantBook"], true);
}

#[tokio::test]
async fn unknown_property_returns_404() {
    let response = get(build_test_app(), "/api/properties/404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Property with id 404 not found");
}

#[tokio::test]
async fn non_numeric_property_id_returns_json_400() {
    let response = get(build_test_app(), "/api/properties/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("abc"));
}
