//! Link previews for shift source links.
//!
//! Previews are fetched lazily, cached per URL, and never fail loudly: anything that goes wrong
//! (timeout, transport error, unparsable page) resolves to [`PreviewState::Unavailable`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use regex::Regex;
use tokio::sync::Mutex;

use crate::foundation::error::{ReportError, ReportResult};

/// Default upper bound on one preview fetch.
pub const DEFAULT_PREVIEW_TIMEOUT: Duration = Duration::from_secs(5);

/// Metadata shown on a link card.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreviewMeta {
    /// Page title (`og:title`, falling back to `<title>`).
    pub title: Option<String>,
    /// Short description (`og:description` or `description`).
    pub description: Option<String>,
    /// Image URL (`og:image`).
    pub image: Option<String>,
    /// Publisher name (`og:site_name`).
    pub site_name: Option<String>,
}

impl PreviewMeta {
    /// No field was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.site_name.is_none()
    }
}

/// Outcome of a preview lookup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", content = "meta", rename_all = "snake_case")]
pub enum PreviewState {
    /// Metadata is available.
    Ready(PreviewMeta),
    /// The link renders without a preview.
    Unavailable,
}

/// Source of preview metadata.
#[async_trait::async_trait]
pub trait PreviewFetcher: Send + Sync {
    /// Fetch metadata for `url`.
    async fn fetch(&self, url: &str) -> ReportResult<PreviewMeta>;
}

type PendingPreview = Shared<BoxFuture<'static, PreviewState>>;

enum Entry {
    Pending(PendingPreview),
    Done(PreviewState),
}

/// Per-URL preview cache with in-flight de-duplication.
///
/// Concurrent lookups of the same URL share one fetch. Results, including
/// [`PreviewState::Unavailable`], stay cached until [`PreviewCache::invalidate`].
pub struct PreviewCache<F> {
    fetcher: Arc<F>,
    timeout: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl<F: PreviewFetcher + 'static> PreviewCache<F> {
    /// Cache with [`DEFAULT_PREVIEW_TIMEOUT`].
    pub fn new(fetcher: F) -> Self {
        Self::with_timeout(fetcher, DEFAULT_PREVIEW_TIMEOUT)
    }

    /// Cache whose fetches give up after `timeout`.
    pub fn with_timeout(fetcher: F, timeout: Duration) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            timeout,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Preview for `url`, fetching it on first use.
    pub async fn get(&self, url: &str) -> PreviewState {
        let pending = {
            let mut entries = self.entries.lock().await;
            match entries.get(url) {
                Some(Entry::Done(state)) => return state.clone(),
                Some(Entry::Pending(fut)) => fut.clone(),
                None => {
                    let fut = fetch_bounded(Arc::clone(&self.fetcher), url.to_owned(), self.timeout)
                        .boxed()
                        .shared();
                    entries.insert(url.to_owned(), Entry::Pending(fut.clone()));
                    fut
                }
            }
        };

        let state = pending.clone().await;
        let mut entries = self.entries.lock().await;
        // Only settle our own fetch; the entry may have been invalidated or replaced meanwhile.
        if matches!(entries.get(url), Some(Entry::Pending(current)) if current.ptr_eq(&pending)) {
            entries.insert(url.to_owned(), Entry::Done(state.clone()));
        }
        state
    }

    /// Cached result for `url`, without fetching.
    pub async fn peek(&self, url: &str) -> Option<PreviewState> {
        match self.entries.lock().await.get(url) {
            Some(Entry::Done(state)) => Some(state.clone()),
            _ => None,
        }
    }

    /// Forget `url` so the next lookup fetches again.
    pub async fn invalidate(&self, url: &str) -> bool {
        self.entries.lock().await.remove(url).is_some()
    }
}

async fn fetch_bounded<F: PreviewFetcher>(
    fetcher: Arc<F>,
    url: String,
    timeout: Duration,
) -> PreviewState {
    if !is_http_url(&url) {
        tracing::warn!(url = %url, "preview skipped for non-http link");
        return PreviewState::Unavailable;
    }
    match tokio::time::timeout(timeout, fetcher.fetch(&url)).await {
        Ok(Ok(meta)) if !meta.is_empty() => PreviewState::Ready(meta),
        Ok(Ok(_)) => {
            tracing::debug!(url = %url, "page carries no preview metadata");
            PreviewState::Unavailable
        }
        Ok(Err(err)) => {
            tracing::warn!(url = %url, %err, "preview fetch failed");
            PreviewState::Unavailable
        }
        Err(_) => {
            tracing::warn!(
                url = %url,
                timeout_ms = timeout.as_millis() as u64,
                "preview fetch timed out"
            );
            PreviewState::Unavailable
        }
    }
}

fn is_http_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Extracts Open Graph and basic HTML metadata from a page.
#[derive(Clone, Debug)]
pub struct OpenGraphParser {
    meta_tag: Regex,
    attr: Regex,
    title: Regex,
}

impl OpenGraphParser {
    /// Compile the parser's patterns.
    pub fn new() -> ReportResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| ReportError::preview(format!("bad pattern: {e}")))
        };
        Ok(Self {
            meta_tag: compile(r"(?is)<meta\b[^>]*>")?,
            attr: compile(r#"(?is)([a-z:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?,
            title: compile(r"(?is)<title[^>]*>(.*?)</title>")?,
        })
    }

    /// Parse `html`. Open Graph fields win over plain `<title>` / `description`.
    pub fn parse(&self, html: &str) -> PreviewMeta {
        let mut meta = PreviewMeta::default();
        let mut plain_description = None;

        for tag in self.meta_tag.find_iter(html) {
            let mut key = None;
            let mut content = None;
            for cap in self.attr.captures_iter(tag.as_str()) {
                let value = cap.get(2).or_else(|| cap.get(3)).map(|m| m.as_str());
                match cap[1].to_ascii_lowercase().as_str() {
                    "property" | "name" => key = value.map(str::to_ascii_lowercase),
                    "content" => content = value.map(decode_entities),
                    _ => {}
                }
            }
            let (Some(key), Some(content)) = (key, content) else {
                continue;
            };
            if content.is_empty() {
                continue;
            }
            let slot = match key.as_str() {
                "og:title" => &mut meta.title,
                "og:description" => &mut meta.description,
                "og:image" => &mut meta.image,
                "og:site_name" => &mut meta.site_name,
                "description" => &mut plain_description,
                _ => continue,
            };
            slot.get_or_insert(content);
        }

        if meta.description.is_none() {
            meta.description = plain_description;
        }
        if meta.title.is_none() {
            meta.title = self
                .title
                .captures(html)
                .map(|c| decode_entities(c[1].trim()))
                .filter(|t| !t.is_empty());
        }
        meta
    }
}

fn decode_entities(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Fetches pages over HTTP and reads their Open Graph tags.
#[cfg(feature = "http-preview")]
#[derive(Clone, Debug)]
pub struct HttpPreviewFetcher {
    client: reqwest::Client,
    parser: OpenGraphParser,
}

#[cfg(feature = "http-preview")]
impl HttpPreviewFetcher {
    /// Build a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> ReportResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::preview(format!("http client: {e}")))?;
        Ok(Self {
            client,
            parser: OpenGraphParser::new()?,
        })
    }
}

#[cfg(feature = "http-preview")]
#[async_trait::async_trait]
impl PreviewFetcher for HttpPreviewFetcher {
    async fn fetch(&self, url: &str) -> ReportResult<PreviewMeta> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::preview(format!("request {url}: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ReportError::preview(format!("{url} answered {status}")));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| ReportError::preview(format!("body of {url}: {e}")))?;
        Ok(self.parser.parse(&body))
    }
}

#[cfg(test)]
#[path = "../tests/unit/preview/preview.rs"]
mod tests;
