use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

struct Scripted {
    calls: AtomicUsize,
    delay: Duration,
    result: fn() -> ReportResult<PreviewMeta>,
}

impl Scripted {
    fn new(delay: Duration, result: fn() -> ReportResult<PreviewMeta>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay,
            result,
        }
    }
}

#[async_trait::async_trait]
impl PreviewFetcher for Scripted {
    async fn fetch(&self, _url: &str) -> ReportResult<PreviewMeta> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        (self.result)()
    }
}

fn titled() -> ReportResult<PreviewMeta> {
    Ok(PreviewMeta {
        title: Some("USGS".to_owned()),
        ..PreviewMeta::default()
    })
}

fn failing() -> ReportResult<PreviewMeta> {
    Err(ReportError::preview("connection reset"))
}

const URL: &str = "https://example.org/quake";

#[tokio::test(start_paused = true)]
async fn second_lookup_hits_the_cache() {
    let cache = PreviewCache::new(Scripted::new(Duration::from_millis(10), titled));
    let first = cache.get(URL).await;
    let second = cache.get(URL).await;
    assert_eq!(first, second);
    assert!(matches!(first, PreviewState::Ready(ref m) if m.title.as_deref() == Some("USGS")));
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn concurrent_lookups_share_one_fetch() {
    let cache = PreviewCache::new(Scripted::new(Duration::from_millis(50), titled));
    let (a, b) = futures::join!(cache.get(URL), cache.get(URL));
    assert_eq!(a, b);
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn slow_fetch_times_out_softly() {
    let cache = PreviewCache::with_timeout(
        Scripted::new(Duration::from_secs(30), titled),
        Duration::from_secs(1),
    );
    assert_eq!(cache.get(URL).await, PreviewState::Unavailable);
    assert_eq!(cache.peek(URL).await, Some(PreviewState::Unavailable));
}

#[tokio::test(start_paused = true)]
async fn fetch_error_is_unavailable_until_invalidated() {
    let cache = PreviewCache::new(Scripted::new(Duration::ZERO, failing));
    assert_eq!(cache.get(URL).await, PreviewState::Unavailable);
    assert_eq!(cache.get(URL).await, PreviewState::Unavailable);
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 1);

    assert!(cache.invalidate(URL).await);
    assert_eq!(cache.peek(URL).await, None);
    cache.get(URL).await;
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn invalidate_during_fetch_drops_the_result() {
    let cache = PreviewCache::new(Scripted::new(Duration::from_millis(50), titled));
    let (state, removed) = futures::join!(cache.get(URL), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        cache.invalidate(URL).await
    });
    assert!(removed);
    assert!(matches!(state, PreviewState::Ready(_)));
    assert_eq!(cache.peek(URL).await, None);

    cache.get(URL).await;
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 2);
    assert!(cache.peek(URL).await.is_some());
}

#[tokio::test(start_paused = true)]
async fn stale_fetch_does_not_overwrite_a_newer_one() {
    let cache = PreviewCache::new(Scripted::new(Duration::from_millis(50), titled));
    let (_, _) = futures::join!(cache.get(URL), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        cache.invalidate(URL).await;
        cache.get(URL).await
    });
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 2);
    assert!(cache.peek(URL).await.is_some());
}

#[tokio::test]
async fn non_http_links_are_never_fetched() {
    let cache = PreviewCache::new(Scripted::new(Duration::ZERO, titled));
    assert_eq!(cache.get("mailto:press@example.org").await, PreviewState::Unavailable);
    assert_eq!(cache.fetcher.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_metadata_is_unavailable() {
    let cache = PreviewCache::new(Scripted::new(Duration::ZERO, || Ok(PreviewMeta::default())));
    assert_eq!(cache.get(URL).await, PreviewState::Unavailable);
}

#[test]
fn parser_prefers_open_graph() {
    let html = r#"<html><head>
        <title>Fallback title</title>
        <meta name="description" content="plain description">
        <meta property="og:title" content="Fault &amp; Fracture" />
        <meta content='https://img.example.org/a.png' property='og:image'>
        <meta property="og:site_name" content="Example">
    </head></html>"#;
    let meta = OpenGraphParser::new().unwrap().parse(html);
    assert_eq!(meta.title.as_deref(), Some("Fault & Fracture"));
    assert_eq!(meta.description.as_deref(), Some("plain description"));
    assert_eq!(meta.image.as_deref(), Some("https://img.example.org/a.png"));
    assert_eq!(meta.site_name.as_deref(), Some("Example"));
}

#[test]
fn parser_falls_back_to_title_tag() {
    let meta = OpenGraphParser::new()
        .unwrap()
        .parse("<html><title>\n  Only a title  </title></html>");
    assert_eq!(meta.title.as_deref(), Some("Only a title"));
    assert!(meta.image.is_none());
}

#[test]
fn parser_ignores_pages_without_metadata() {
    let meta = OpenGraphParser::new().unwrap().parse("<p>hello</p>");
    assert!(meta.is_empty());
}
