//! HTTP fetch contract tests against a mock server.

use std::time::{Duration, Instant};

use mediaferry_core::{DownloadLimiter, HttpFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_writes_exact_body_bytes() {
    let mock_server = MockServer::start().await;
    let body: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();

    Mock::given(method("GET"))
        .and(path("/files/dummy.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::with(DownloadLimiter::new(5), dir.path());

    let url = format!("{}/files/dummy.pdf", mock_server.uri());
    let result = fetcher.fetch(&url, "sample_pdf", "pdf").await;

    let file_path = result.expect("200 response should produce a file");
    assert_eq!(file_path, dir.path().join("sample_pdf.pdf"));
    assert_eq!(std::fs::read(&file_path).unwrap(), body);
}

#[tokio::test]
async fn test_non_200_returns_sentinel_and_creates_no_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/files/gone.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::with(DownloadLimiter::new(5), dir.path());

    let url = format!("{}/files/gone.pdf", mock_server.uri());
    let result = fetcher.fetch(&url, "gone", "pdf").await;

    assert!(result.is_none());
    assert!(!dir.path().join("gone.pdf").exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_transport_failure_returns_sentinel() {
    // Nothing listens on this port.
    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::with(DownloadLimiter::new(5), dir.path());

    let result = fetcher.fetch("http://127.0.0.1:9/file.pdf", "unreachable", "pdf").await;

    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_invalid_url_returns_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::with(DownloadLimiter::new(5), dir.path());

    let result = fetcher.fetch("not a url", "bad", "pdf").await;

    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// Timing-based companion to the deterministic limiter unit test: with a
// single slot, two delayed downloads cannot overlap, so the total wall
// time is at least two response delays. Margins are generous to stay
// stable on slow CI machines.
#[tokio::test]
async fn test_capacity_one_serializes_downloads() {
    let mock_server = MockServer::start().await;
    let delay = Duration::from_millis(200);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"x".to_vec()).set_delay(delay))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = HttpFetcher::with(DownloadLimiter::new(1), dir.path());

    let url_a = format!("{}/a.bin", mock_server.uri());
    let url_b = format!("{}/b.bin", mock_server.uri());

    let started = Instant::now();
    let (a, b) = tokio::join!(fetcher.fetch(&url_a, "a", "bin"), fetcher.fetch(&url_b, "b", "bin"));
    let elapsed = started.elapsed();

    assert!(a.is_some());
    assert!(b.is_some());
    assert!(
        elapsed >= Duration::from_millis(350),
        "downloads overlapped despite capacity 1: {:?}",
        elapsed
    );
}
