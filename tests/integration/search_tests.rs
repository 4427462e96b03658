//! Integration tests for ESearch requests using mocked HTTP responses
//!
//! These tests verify the query parameters sent to NCBI and how search
//! responses and failures are surfaced, without making real API calls.

#[path = "common/mod.rs"]
mod common;

use common::{create_mock_client, esearch_json_response};
use pubmed_trials::{DateRange, MonthDate, PubMedError, build_query};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[traced_test]
async fn test_search_sends_query_window_and_identity() {
    let mock_server = MockServer::start().await;
    let query = build_query("ibuprofen", "headache");

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", query.as_str()))
        .and(query_param("retmax", "1000"))
        .and(query_param("mindate", "2000/01"))
        .and(query_param("maxdate", "2020/08"))
        .and(query_param("retmode", "json"))
        .and(query_param("email", "test@example.com"))
        .and(query_param("tool", "pubmed-trials-tests"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(esearch_json_response(&["222", "111", "333"])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client
        .search_articles(&query, &DateRange::default(), 1000)
        .await
        .unwrap();

    // Order comes from the service and is not re-sorted
    assert_eq!(pmids, vec!["222", "111", "333"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_custom_window_and_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "25"))
        .and(query_param("mindate", "2010/03"))
        .and(query_param("maxdate", "2011/11"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json_response(&["5"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let range = DateRange::new(
        MonthDate::new(2010, 3).unwrap(),
        MonthDate::new(2011, 11).unwrap(),
    );
    let pmids = client.search_articles("x[SUBS]", &range, 25).await.unwrap();

    assert_eq!(pmids, vec!["5"]);
}

#[tokio::test]
#[traced_test]
async fn test_search_with_no_matches_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(esearch_json_response(&[])))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let pmids = client
        .search_articles("nothing[SUBS]", &DateRange::default(), 1000)
        .await
        .unwrap();

    assert!(pmids.is_empty());
}

#[tokio::test]
#[traced_test]
async fn test_search_server_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client
        .search_articles("x[SUBS]", &DateRange::default(), 10)
        .await;

    assert!(matches!(result, Err(PubMedError::ApiError { status: 503, .. })));
}

#[tokio::test]
#[traced_test]
async fn test_search_client_error_is_not_recovered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client
        .search_articles("x[SUBS]", &DateRange::default(), 10)
        .await;

    assert!(matches!(result, Err(PubMedError::ApiError { status: 429, .. })));
}

#[tokio::test]
#[traced_test]
async fn test_search_rejected_query_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"esearchresult": {"ERROR": "Search Backend failed"}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client
        .search_articles("x[SUBS]", &DateRange::default(), 10)
        .await;

    match result {
        Err(PubMedError::ApiError { message, .. }) => {
            assert_eq!(message, "Search Backend failed");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_search_undecodable_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let result = client
        .search_articles("x[SUBS]", &DateRange::default(), 10)
        .await;

    assert!(matches!(result, Err(PubMedError::JsonError(_))));
}
