//! HTTP-level integration tests for the `/shows` endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::{
    artist_payload, body_json, create_artist, create_show, create_venue, get, post_json,
    venue_payload,
};
use gigboard_db::repositories::ShowRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_show_returns_listing(pool: PgPool) {
    let artist_id =
        create_artist(&pool, artist_payload("Guns N Petals", "San Francisco", "CA")).await;
    let venue_id = create_venue(&pool, venue_payload("The Grand Hall", "Austin", "TX")).await;
    let start = Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap();

    let response = post_json(
        common::build_test_app(pool),
        "/shows/create",
        serde_json::json!({
            "artist_id": artist_id,
            "venue_id": venue_id,
            "start_time": start,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["artist_id"], artist_id);
    assert_eq!(data["artist_name"], "Guns N Petals");
    assert_eq!(data["venue_id"], venue_id);
    assert_eq!(data["venue_name"], "The Grand Hall");
    let stored: chrono::DateTime<Utc> = data["start_time"].as_str().unwrap().parse().unwrap();
    assert_eq!(stored, start);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_start_time_defaults_to_now(pool: PgPool) {
    let artist_id =
        create_artist(&pool, artist_payload("Guns N Petals", "San Francisco", "CA")).await;
    let venue_id = create_venue(&pool, venue_payload("The Grand Hall", "Austin", "TX")).await;
    let before = Utc::now();

    let response = post_json(
        common::build_test_app(pool),
        "/shows/create",
        serde_json::json!({ "artist_id": artist_id, "venue_id": venue_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    let stored: chrono::DateTime<Utc> = data["start_time"].as_str().unwrap().parse().unwrap();
    assert!(stored >= before - Duration::seconds(1));
    assert!(stored <= Utc::now() + Duration::seconds(1));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_ids_are_field_errors(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/shows/create",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["artist_id", "venue_id"]);
    assert!(ShowRepo::list_listings(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_string_id_is_a_json_bad_request(pool: PgPool) {
    let venue_id = create_venue(&pool, venue_payload("The Grand Hall", "Austin", "TX")).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/shows/create",
        serde_json::json!({ "artist_id": "3", "venue_id": venue_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
    assert!(ShowRepo::list_listings(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_venue_is_rejected(pool: PgPool) {
    let artist_id =
        create_artist(&pool, artist_payload("Guns N Petals", "San Francisco", "CA")).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/shows/create",
        serde_json::json!({ "artist_id": artist_id, "venue_id": 424242 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "venue_id");
    assert_eq!(json["fields"][0]["message"], "Venue not found.");
    assert!(ShowRepo::list_listings(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_shows_soonest_first(pool: PgPool) {
    let artist_id =
        create_artist(&pool, artist_payload("Guns N Petals", "San Francisco", "CA")).await;
    let grand_hall = create_venue(&pool, venue_payload("The Grand Hall", "Austin", "TX")).await;
    let mohawk = create_venue(&pool, venue_payload("Mohawk", "Austin", "TX")).await;

    let now = Utc::now();
    create_show(&pool, artist_id, grand_hall, now + Duration::days(5)).await;
    create_show(&pool, artist_id, mohawk, now - Duration::days(5)).await;

    let response = get(common::build_test_app(pool), "/shows").await;
    assert_eq!(response.status(), StatusCode::OK);

    let shows = body_json(response).await["data"].as_array().unwrap().clone();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0]["venue_name"], "Mohawk");
    assert_eq!(shows[1]["venue_name"], "The Grand Hall");
    assert_eq!(shows[1]["artist_image_link"], "https://img.example.com/artist.jpg");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_prefills_start_time(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/shows/create").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = body_json(response).await["data"].clone();
    assert!(data["form"]["start_time"].is_string());
    assert!(data["form"]["artist_id"].is_null());
    assert!(data.get("choices").is_none());
}
