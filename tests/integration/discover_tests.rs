use crate::common::{create_test_service, mount_xml, sitemap_index, urlset};
use sitemap_frontier::service::DiscoverInput;
use sitemap_frontier::sitemap::{DiscoverySource, SitemapKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_discover_standard_robots_and_index() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_xml(
        &mock_server,
        "/sitemap.xml",
        sitemap_index(&[format!("{}/sitemap-posts.xml", base_url)]),
    )
    .await;
    mount_xml(
        &mock_server,
        "/sitemap-posts.xml",
        urlset(&[format!("{}/post-1", base_url)]),
    )
    .await;
    mount_xml(
        &mock_server,
        "/news-sitemap.xml",
        urlset(&[format!("{}/news-1", base_url)]),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "User-agent: *\nDisallow: /admin\nSitemap: {}/news-sitemap.xml\n",
            base_url
        )))
        .mount(&mock_server)
        .await;

    let service = create_test_service();
    let envelope = service
        .discover_sitemaps(DiscoverInput {
            url: base_url.clone(),
        })
        .await;

    assert!(envelope.is_ok());
    let discovery = envelope.data().expect("expected data");
    assert_eq!(discovery.domain, base_url);
    assert!(discovery.robots_txt_found);

    let found: Vec<_> = discovery
        .sitemaps
        .iter()
        .map(|s| (s.url.clone(), s.kind, s.discovered_from))
        .collect();
    assert_eq!(
        found,
        vec![
            (
                format!("{}/sitemap.xml", base_url),
                SitemapKind::SitemapIndex,
                DiscoverySource::StandardLocation
            ),
            (
                format!("{}/sitemap-posts.xml", base_url),
                SitemapKind::Sitemap,
                DiscoverySource::SitemapIndex
            ),
            (
                format!("{}/news-sitemap.xml", base_url),
                SitemapKind::Sitemap,
                DiscoverySource::RobotsTxt
            ),
        ]
    );
    assert!(envelope.meta().unwrap().warnings.is_empty());
}

#[tokio::test]
async fn test_discover_gzipped_alternative() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(urlset(&[format!("{}/zipped", base_url)]).as_bytes())
        .unwrap();
    let compressed = encoder.finish().unwrap();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml.gz"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(compressed)
                .insert_header("content-type", "application/x-gzip"),
        )
        .mount(&mock_server)
        .await;

    let service = create_test_service();
    let envelope = service
        .discover_sitemaps(DiscoverInput {
            url: base_url.clone(),
        })
        .await;

    let discovery = envelope.data().expect("expected data");
    assert_eq!(discovery.sitemaps.len(), 1);
    assert_eq!(
        discovery.sitemaps[0].url,
        format!("{}/sitemap.xml.gz", base_url)
    );
    assert_eq!(discovery.sitemaps[0].kind, SitemapKind::Sitemap);
}

#[tokio::test]
async fn test_discover_nothing_found() {
    let mock_server = MockServer::start().await;

    let service = create_test_service();
    let envelope = service
        .discover_sitemaps(DiscoverInput {
            url: mock_server.uri(),
        })
        .await;

    assert!(envelope.is_ok());
    let discovery = envelope.data().unwrap();
    assert!(discovery.sitemaps.is_empty());
    assert!(!discovery.robots_txt_found);
    assert_eq!(
        envelope.meta().unwrap().warnings,
        vec!["No sitemaps found for this domain".to_string()]
    );

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["sitemaps"], serde_json::json!([]));
    assert_eq!(json["data"]["robots_txt_found"], false);
}

#[tokio::test]
async fn test_discover_cycle_fetches_each_document_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_index(&[format!("{}/b.xml", base_url)])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_index(&[format!("{}/sitemap.xml", base_url)])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = create_test_service();
    let envelope = service
        .discover_sitemaps(DiscoverInput { url: base_url })
        .await;

    assert_eq!(envelope.data().unwrap().sitemaps.len(), 2);
}

#[tokio::test]
async fn test_discover_invalid_input() {
    let service = create_test_service();
    let envelope = service
        .discover_sitemaps(DiscoverInput {
            url: "   ".to_string(),
        })
        .await;

    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "INVALID_INPUT");
}
