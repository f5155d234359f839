//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use rivalrank_core::Coordinate;
use rivalrank_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn center() -> Coordinate {
    Coordinate {
        lat: 45.07,
        lng: 7.69,
    }
}

#[tokio::test]
async fn predict_returns_parsed_predictions() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "predictions": [
            {
                "place_id": "pl-1",
                "description": "Luigi's Pizzeria, Via Roma, Turin",
                "structured_formatting": {
                    "main_text": "Luigi's Pizzeria",
                    "secondary_text": "Via Roma, Turin"
                }
            },
            {
                "place_id": "pl-2",
                "structured_formatting": {
                    "main_text": "Luigi's Trattoria"
                }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .and(query_param("input", "luigi"))
        .and(query_param("language", "en"))
        .and(query_param("types", "establishment"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let predictions = client
        .predict("luigi", "en")
        .await
        .expect("should parse predictions");

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].place_id, "pl-1");
    assert_eq!(predictions[0].structured_formatting.main_text, "Luigi's Pizzeria");
    assert_eq!(
        predictions[0].structured_formatting.secondary_text,
        "Via Roma, Turin"
    );
    // secondary_text is optional on the wire
    assert_eq!(predictions[1].structured_formatting.secondary_text, "");
}

#[tokio::test]
async fn predict_zero_results_is_empty_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ZERO_RESULTS",
                "predictions": []
            })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let predictions = client.predict("zzzzz", "en").await.expect("should be Ok");
    assert!(predictions.is_empty());
}

#[tokio::test]
async fn get_details_returns_parsed_place() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "place_id": "pl-1",
            "name": "Luigi's Pizzeria",
            "formatted_address": "Via Roma 1, Turin",
            "rating": 4.5,
            "user_ratings_total": 120,
            "geometry": { "location": { "lat": 45.07, "lng": 7.69 } },
            "types": ["restaurant", "food", "point_of_interest"]
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "pl-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let record = client.get_details("pl-1").await.expect("should parse details");

    assert_eq!(record.place_id, "pl-1");
    assert_eq!(record.name, "Luigi's Pizzeria");
    assert_eq!(record.rating, Some(4.5));
    assert_eq!(record.user_ratings_total, Some(120));
    assert_eq!(record.types.len(), 3);
}

#[tokio::test]
async fn get_details_not_found_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "NOT_FOUND" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.get_details("gone").await;
    assert!(matches!(result, Err(PlacesError::ApiError(_))));
}

#[tokio::test]
async fn search_nearby_parses_partial_records() {
    let server = MockServer::start().await;

    // Second record has no rating, review count, or geometry.
    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "pl-2",
                "name": "Mario's",
                "rating": 4.8,
                "user_ratings_total": 50,
                "geometry": { "location": { "lat": 45.08, "lng": 7.68 } },
                "vicinity": "Corso Francia 10",
                "types": ["restaurant"]
            },
            {
                "place_id": "pl-3",
                "name": "New Place"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("type", "restaurant"))
        .and(query_param("keyword", "pizzeria"))
        .and(query_param("radius", "2500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search_nearby(center(), 2500, "restaurant", Some("pizzeria"))
        .await
        .expect("should parse search results");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].place_id, "pl-2");
    assert_eq!(records[1].rating, None);
    assert_eq!(records[1].user_ratings_total, None);
    assert!(records[1].geometry.is_none());
}

#[tokio::test]
async fn search_nearby_zero_results_is_empty_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search_nearby(center(), 2500, "restaurant", None)
        .await
        .expect("ZERO_RESULTS should not be an error");
    assert!(records.is_empty());
}

#[tokio::test]
async fn search_by_text_sends_composed_query() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "pl-4",
                "name": "Pizza Pazza",
                "rating": 4.1,
                "user_ratings_total": 33,
                "formatted_address": "Via Po 5, Turin"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "pizzeria restaurant"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client
        .search_by_text(center(), 2500, "pizzeria restaurant")
        .await
        .expect("should parse text search results");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Pizza Pazza");
}

#[tokio::test]
async fn over_query_limit_maps_to_quota_exceeded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OVER_QUERY_LIMIT",
            "error_message": "You have exceeded your daily request quota"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_nearby(center(), 2500, "restaurant", None).await;
    assert!(
        matches!(result, Err(PlacesError::QuotaExceeded(ref m)) if m.contains("daily request quota")),
        "expected QuotaExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn request_denied_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_nearby(center(), 2500, "restaurant", None).await;
    let err = result.expect_err("REQUEST_DENIED should be an error");
    assert!(
        err.to_string().contains("API key is invalid"),
        "expected error message passthrough, got: {err}"
    );
}

#[tokio::test]
async fn http_500_maps_to_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_nearby(center(), 2500, "restaurant", None).await;
    assert!(matches!(result, Err(PlacesError::Http(_))));
}
