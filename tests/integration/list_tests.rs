use crate::common::{create_service_with_timeout, create_test_service, mount_xml, sitemap_index, urlset};
use sitemap_frontier::service::ListInput;
use sitemap_frontier::ErrorCode;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn list_input(sitemap_url: String, limit: Option<usize>, cursor: Option<String>) -> ListInput {
    ListInput {
        sitemap_url,
        limit,
        cursor,
    }
}

#[tokio::test]
async fn test_list_paginates_150_entries() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let locs: Vec<String> = (0..150).map(|i| format!("{}/page/{}", base_url, i)).collect();
    mount_xml(&mock_server, "/sitemap.xml", urlset(&locs)).await;

    let service = create_test_service();
    let sitemap_url = format!("{}/sitemap.xml", base_url);

    let first = service
        .list_sitemap_urls(list_input(sitemap_url.clone(), Some(100), None))
        .await;
    let page = first.data().expect("expected first page");
    assert_eq!(page.total_in_page, 100);
    assert!(!page.is_index);
    assert_eq!(page.entries[0].last_modified.as_deref(), Some("2024-01-01"));

    let next_cursor = first
        .meta()
        .unwrap()
        .pagination
        .as_ref()
        .and_then(|p| p.next_cursor.clone())
        .expect("expected a next cursor");

    let second = service
        .list_sitemap_urls(list_input(sitemap_url, Some(100), Some(next_cursor)))
        .await;
    let page = second.data().expect("expected second page");
    assert_eq!(page.total_in_page, 50);
    assert_eq!(page.entries[0].location, format!("{}/page/100", base_url));
    assert_eq!(
        second.meta().unwrap().pagination.as_ref().unwrap().next_cursor,
        None
    );

    let json = serde_json::to_value(&second).unwrap();
    assert_eq!(json["meta"]["pagination"]["next_cursor"], serde_json::Value::Null);
    assert_eq!(json["data"]["urls"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_list_index_document() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_xml(
        &mock_server,
        "/sitemap_index.xml",
        sitemap_index(&[
            format!("{}/a.xml", base_url),
            format!("{}/b.xml", base_url),
        ]),
    )
    .await;

    let service = create_test_service();
    let envelope = service
        .list_sitemap_urls(list_input(
            format!("{}/sitemap_index.xml", base_url),
            None,
            None,
        ))
        .await;

    let page = envelope.data().unwrap();
    assert!(page.is_index);
    assert_eq!(page.total_in_page, 2);
    assert_eq!(page.entries[1].location, format!("{}/b.xml", base_url));
}

#[tokio::test]
async fn test_list_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let service = create_test_service();
    let envelope = service
        .list_sitemap_urls(list_input(
            format!("{}/sitemap.xml", mock_server.uri()),
            None,
            None,
        ))
        .await;

    let error = envelope.error().expect("expected an error");
    assert_eq!(error.code, ErrorCode::UpstreamError);
    assert_eq!(error.details.as_ref().unwrap()["status"], 503);
}

#[tokio::test]
async fn test_list_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let service = create_test_service();
    let envelope = service
        .list_sitemap_urls(list_input(
            format!("{}/sitemap.xml", mock_server.uri()),
            None,
            None,
        ))
        .await;

    assert_eq!(envelope.error().unwrap().code, ErrorCode::RateLimited);
}

#[tokio::test]
async fn test_list_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(urlset(&[]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let service = create_service_with_timeout(200);
    let envelope = service
        .list_sitemap_urls(list_input(
            format!("{}/slow.xml", mock_server.uri()),
            None,
            None,
        ))
        .await;

    assert_eq!(envelope.error().unwrap().code, ErrorCode::Timeout);
}

#[tokio::test]
async fn test_list_connection_refused_is_timeout() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let sitemap_url = format!("http://127.0.0.1:{}/sitemap.xml", port);
    let service = create_test_service();
    let envelope = service
        .list_sitemap_urls(list_input(sitemap_url.clone(), None, None))
        .await;

    let error = envelope.error().expect("expected an error");
    assert_eq!(error.code, ErrorCode::Timeout);
    assert_eq!(error.details.as_ref().unwrap()["url"], sitemap_url.as_str());
}

#[tokio::test]
async fn test_list_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Not a sitemap</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let service = create_test_service();
    let envelope = service
        .list_sitemap_urls(list_input(
            format!("{}/sitemap.xml", mock_server.uri()),
            None,
            None,
        ))
        .await;

    assert_eq!(envelope.error().unwrap().code, ErrorCode::ParseError);
}

#[tokio::test]
async fn test_list_invalid_cursor() {
    let service = create_test_service();
    let envelope = service
        .list_sitemap_urls(list_input(
            "https://example.com/sitemap.xml".to_string(),
            None,
            Some("invalid".to_string()),
        ))
        .await;

    let error = envelope.error().unwrap();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.to_lowercase().contains("cursor"));
}
