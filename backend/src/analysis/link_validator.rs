//! Link Validation
//!
//! Checks whether an externally supplied learning link is reachable.
//! Outcomes are memoized per literal URL string in a [`LinkValidationCache`]
//! that the integrator creates and shares; it is never a hidden global.

use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

// ============================================================
// CACHE
// ============================================================

/// URL -> validity. Grows for its whole lifetime; no eviction.
#[derive(Debug, Default)]
pub struct LinkValidationCache {
    entries: Mutex<HashMap<String, bool>>,
}

impl LinkValidationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<bool> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(url).copied()
    }

    /// Concurrent writes for the same URL store the same outcome
    pub fn insert(&self, url: &str, valid: bool) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(url.to_string(), valid);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================
// PROBE
// ============================================================

/// Existence check for a syntactically valid http(s) URL
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// True when the target answered with a status in [200, 400)
    async fn probe(&self, url: &Url) -> bool;
}

/// HEAD request through reqwest, redirects followed
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpProbe {
    async fn probe(&self, url: &Url) -> bool {
        match self.client.head(url.clone()).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                (200..400).contains(&status)
            }
            Err(e) => {
                warn!("Link validation failed for {}: {}", url, e);
                false
            }
        }
    }
}

// ============================================================
// VALIDATOR
// ============================================================

pub struct LinkValidator {
    cache: Arc<LinkValidationCache>,
    probe: Arc<dyn ReachabilityProbe>,
    timeout: Duration,
}

impl LinkValidator {
    pub fn new(cache: Arc<LinkValidationCache>, probe: Arc<dyn ReachabilityProbe>) -> Self {
        Self {
            cache,
            probe,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache(&self) -> &Arc<LinkValidationCache> {
        &self.cache
    }

    /// Never fails: malformed URLs, timeouts and transport errors are all
    /// just "invalid".
    pub async fn is_valid(&self, url: &str) -> bool {
        if let Some(valid) = self.cache.get(url) {
            debug!("Link cache hit for {}: {}", url, valid);
            return valid;
        }

        let valid = match parse_http_url(url) {
            Some(parsed) => match tokio::time::timeout(self.timeout, self.probe.probe(&parsed)).await {
                Ok(valid) => valid,
                Err(_) => {
                    warn!("Link validation timed out for {}", url);
                    false
                }
            },
            None => false,
        };

        self.cache.insert(url, valid);
        valid
    }
}

/// Absolute URL with an http or https scheme
pub fn parse_http_url(raw: &str) -> Option<Url> {
    let parsed = Url::parse(raw).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(parsed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Answers a fixed outcome and counts calls
    struct CountingProbe {
        outcome: bool,
        calls: AtomicUsize,
    }

    impl CountingProbe {
        fn new(outcome: bool) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReachabilityProbe for CountingProbe {
        async fn probe(&self, _url: &Url) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome
        }
    }

    struct HangingProbe;

    #[async_trait]
    impl ReachabilityProbe for HangingProbe {
        async fn probe(&self, _url: &Url) -> bool {
            tokio::time::sleep(Duration::from_secs(60)).await;
            true
        }
    }

    #[tokio::test]
    async fn test_second_call_uses_cache() {
        let probe = CountingProbe::new(true);
        let validator = LinkValidator::new(Arc::new(LinkValidationCache::new()), probe.clone());

        assert!(validator.is_valid("https://example.com/a").await);
        assert!(validator.is_valid("https://example.com/a").await);
        assert_eq!(probe.calls(), 1);
        assert_eq!(validator.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_and_non_http_skip_probe() {
        let probe = CountingProbe::new(true);
        let validator = LinkValidator::new(Arc::new(LinkValidationCache::new()), probe.clone());

        assert!(!validator.is_valid("not a url").await);
        assert!(!validator.is_valid("ftp://example.com/file").await);
        assert!(!validator.is_valid("/relative/path").await);
        assert!(!validator.is_valid("").await);
        assert_eq!(probe.calls(), 0);
    }

    #[tokio::test]
    async fn test_cache_keys_are_literal() {
        let probe = CountingProbe::new(false);
        let validator = LinkValidator::new(Arc::new(LinkValidationCache::new()), probe.clone());

        assert!(!validator.is_valid("https://example.com/docs").await);
        assert!(!validator.is_valid("https://example.com/docs/").await);
        assert_eq!(probe.calls(), 2);
    }

    #[tokio::test]
    async fn test_shared_cache_across_validators() {
        let cache = Arc::new(LinkValidationCache::new());
        let first = CountingProbe::new(true);
        let second = CountingProbe::new(false);

        let a = LinkValidator::new(cache.clone(), first.clone());
        let b = LinkValidator::new(cache.clone(), second.clone());

        assert!(a.is_valid("https://example.com").await);
        assert!(b.is_valid("https://example.com").await);
        assert_eq!(second.calls(), 0);
    }

    #[tokio::test]
    async fn test_probe_timeout_is_invalid() {
        let validator = LinkValidator::new(Arc::new(LinkValidationCache::new()), Arc::new(HangingProbe))
            .with_timeout(Duration::from_millis(50));

        assert!(!validator.is_valid("https://slow.example.com").await);
        assert_eq!(validator.cache().get("https://slow.example.com"), Some(false));
    }

    #[tokio::test]
    async fn test_http_probe_statuses() {
        let server = MockServer::start().await;

        Mock::given(method("HEAD"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/moved"))
            .respond_with(ResponseTemplate::new(304))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let probe = HttpProbe::new(DEFAULT_PROBE_TIMEOUT).unwrap();
        let url = |p: &str| Url::parse(&format!("{}{}", server.uri(), p)).unwrap();

        assert!(probe.probe(&url("/ok")).await);
        assert!(probe.probe(&url("/moved")).await);
        assert!(!probe.probe(&url("/gone")).await);
        assert!(!probe.probe(&url("/unmatched")).await);
    }

    #[tokio::test]
    async fn test_http_probe_connection_refused() {
        let probe = HttpProbe::new(Duration::from_secs(1)).unwrap();
        let url = Url::parse("http://127.0.0.1:9/unreachable").unwrap();
        assert!(!probe.probe(&url).await);
    }
}
