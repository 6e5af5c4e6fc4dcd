//! HTTP contract of the Open Library client against a mock server

mod common;

use common::fixtures::{hobbit_search_response, load_response_fixture};
use httpmock::prelude::*;
use libris_core::{
    Catalog, CatalogConfig, CatalogError, EnrichmentUnavailable, OpenLibraryClient, SearchField,
};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &MockServer) -> OpenLibraryClient {
    OpenLibraryClient::new(CatalogConfig::with_base_url(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_search_sends_field_query_and_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search.json")
                .query_param("author", "J.R.R. Tolkien")
                .query_param("limit", "24");
            then.status(200).json_body(hobbit_search_response(24));
        })
        .await;

    let items = client_for(&server)
        .search("J.R.R. Tolkien", SearchField::Author)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 24);
    assert_eq!(items[0].author_names, vec!["J.R.R. Tolkien"]);
}

#[tokio::test]
async fn test_search_without_docs_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/search.json");
            then.status(200).json_body(json!({ "numFound": 0 }));
        })
        .await;

    let items = client_for(&server)
        .search("nothing", SearchField::Subject)
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_search_server_error_is_service_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search.json");
            then.status(500).body("internal error");
        })
        .await;

    let err = client_for(&server)
        .search("Hobbit", SearchField::Title)
        .await
        .unwrap_err();

    assert_eq!(err, CatalogError::Service { status: 500 });
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_search_unreachable_is_transport_error() {
    let client =
        OpenLibraryClient::new(CatalogConfig::with_base_url("http://127.0.0.1:1")).unwrap();

    let err = client.search("Hobbit", SearchField::Title).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_search_timeout_is_transport_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search.json");
            then.status(200)
                .json_body(hobbit_search_response(1))
                .delay(Duration::from_secs(3));
        })
        .await;

    let config = CatalogConfig {
        timeout_secs: 1,
        ..CatalogConfig::with_base_url(server.base_url())
    };
    let err = OpenLibraryClient::new(config)
        .unwrap()
        .search("Hobbit", SearchField::Title)
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_search_limit_ignores_page_size_in_config_file() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search.json")
                .query_param("title", "Hobbit")
                .query_param("limit", "24");
            then.status(200).json_body(hobbit_search_response(3));
        })
        .await;

    let config = CatalogConfig::from_toml(&format!(
        "base_url = \"{}\"\npage_size = 10\n",
        server.base_url()
    ))
    .unwrap();
    let items = OpenLibraryClient::new(config)
        .unwrap()
        .search("Hobbit", SearchField::Title)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn test_search_rejects_blank_query_locally() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/search.json");
            then.status(200).json_body(json!({ "docs": [] }));
        })
        .await;

    let err = client_for(&server)
        .search("   ", SearchField::Title)
        .await
        .unwrap_err();

    assert_eq!(err, CatalogError::InvalidQuery);
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_fetch_detail_reads_work_resource() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/works/OL27484W.json");
            then.status(200)
                .json_body(load_response_fixture("hobbit_work.json"));
        })
        .await;

    let raw = client_for(&server).fetch_detail("/works/OL27484W").await;

    mock.assert_async().await;
    let raw = raw.unwrap();
    assert_eq!(raw["title"], "The Hobbit (3)");
}

#[tokio::test]
async fn test_fetch_detail_not_found_is_absent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/works/OL0W.json");
            then.status(404).json_body(json!({ "error": "notfound" }));
        })
        .await;

    let client = client_for(&server);
    assert!(client.fetch_detail("/works/OL0W").await.is_none());
    assert_eq!(
        client.try_fetch_detail("/works/OL0W").await.unwrap_err(),
        EnrichmentUnavailable::Status(404)
    );
}

#[tokio::test]
async fn test_fetch_detail_non_json_is_absent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/works/OL9W.json");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = client_for(&server);
    assert!(client.fetch_detail("/works/OL9W").await.is_none());
    assert!(matches!(
        client.try_fetch_detail("/works/OL9W").await,
        Err(EnrichmentUnavailable::Malformed(_))
    ));
}

#[tokio::test]
async fn test_fetch_detail_unreachable_is_absent() {
    let client =
        OpenLibraryClient::new(CatalogConfig::with_base_url("http://127.0.0.1:1")).unwrap();
    assert!(client.fetch_detail("/works/OL1W").await.is_none());
}
