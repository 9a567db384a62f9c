//! Integration tests for the PokeApiClient using mockito for HTTP mocking.

use pokedex::{AsyncPokeApiClient, AsyncPokeApiClientImpl, PokeApiClient, PokeApiError};

const LISTING_BODY: &str = r#"{
    "count": 1054,
    "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
    "previous": null,
    "results": [{"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}]
}"#;

#[test]
fn test_fetch_returns_raw_body() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/location-area/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LISTING_BODY)
        .create();

    let client = PokeApiClient::with_base_url(server.url());
    let body = client.fetch(&client.location_areas_url()).unwrap();

    mock.assert();
    assert_eq!(body, LISTING_BODY.as_bytes());
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_fetch_pagination_url_with_query() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/location-area/")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("offset".into(), "20".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create();

    let client = PokeApiClient::with_base_url(server.url());
    let url = format!("{}/location-area/?offset=20&limit=20", server.url());
    let body = client.fetch(&url).unwrap();

    mock.assert();
    assert_eq!(body, b"{}");
}

#[test]
fn test_fetch_not_found() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/location-area/nowhere/")
        .with_status(404)
        .with_body("Not Found")
        .create();

    let client = PokeApiClient::with_base_url(server.url());
    let result = client.fetch(&client.location_area_url("nowhere"));

    mock.assert();
    match result {
        Err(PokeApiError::NotFound(message)) => assert_eq!(message, "Not Found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_fetch_server_error() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/location-area/")
        .with_status(500)
        .with_body("boom")
        .create();

    let client = PokeApiClient::with_base_url(server.url());
    let result = client.fetch(&client.location_areas_url());

    mock.assert();
    assert!(matches!(
        result,
        Err(PokeApiError::ApiError { status: 500, .. })
    ));
}

#[test]
fn test_fetch_non_200_success_is_error() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/location-area/")
        .with_status(204)
        .create();

    let client = PokeApiClient::with_base_url(server.url());
    let result = client.fetch(&client.location_areas_url());

    mock.assert();
    assert!(matches!(
        result,
        Err(PokeApiError::ApiError { status: 204, .. })
    ));
}

#[test]
fn test_fetch_connection_refused() {
    // Nothing listens on port 1
    let client = PokeApiClient::with_base_url("http://127.0.0.1:1".to_string());
    let result = client.fetch(&client.location_areas_url());

    assert!(matches!(
        result,
        Err(PokeApiError::HttpError(_)) | Err(PokeApiError::Timeout)
    ));
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[tokio::test]
async fn test_async_fetch() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/location-area/pastoria-city-area/")
        .with_status(200)
        .with_body(r#"{"name": "pastoria-city-area", "pokemon_encounters": []}"#)
        .create_async()
        .await;

    let client = AsyncPokeApiClientImpl::new(PokeApiClient::with_base_url(server.url()));
    let url = client.location_area_url("pastoria-city-area");
    let body = client.fetch(&url).await.unwrap();

    mock.assert_async().await;
    let detail = pokedex::LocationAreaDetail::from_slice(&body).unwrap();
    assert_eq!(detail.name, "pastoria-city-area");
    assert_eq!(client.inner().metrics().http_requests_total(), 1);
}
