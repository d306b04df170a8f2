use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::Method;
use url::Url;

use super::error::SmsCenterError;
use crate::transport::{JsonObject, parse_object};

pub(crate) const DEFAULT_BASE_URL: &str = "https://smscenter.gr/api/";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_BACKOFF_FACTOR: f64 = 0.5;
const MAX_BACKOFF_SECS: f64 = 120.0;
const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Boxed `Send` future used at the object-safe seams of the crate.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn request<'a>(
        &'a self,
        method: Method,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn request<'a>(
        &'a self,
        method: Method,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.request(method, url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Retry policy for transient HTTP statuses.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RetryConfig {
    max_retries: u32,
    backoff_factor: f64,
    retryable_statuses: &'static [u16],
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new(0, DEFAULT_BACKOFF_FACTOR)
    }
}

impl RetryConfig {
    pub(crate) fn new(max_retries: u32, backoff_factor: f64) -> Self {
        let backoff_factor = if backoff_factor.is_finite() && backoff_factor > 0.0 {
            backoff_factor
        } else {
            0.0
        };
        Self {
            max_retries,
            backoff_factor,
            retryable_statuses: &RETRYABLE_STATUSES,
        }
    }

    fn should_retry(&self, status: u16, retries_done: u32) -> bool {
        retries_done < self.max_retries && self.retryable_statuses.contains(&status)
    }

    /// Delay before retry number `retry` (1-based).
    fn delay(&self, retry: u32) -> Duration {
        let exponent = i32::try_from(retry.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.backoff_factor * 2f64.powi(exponent);
        let secs = if secs.is_finite() {
            secs.min(MAX_BACKOFF_SECS)
        } else {
            MAX_BACKOFF_SECS
        };
        Duration::from_secs_f64(secs)
    }
}

/// HTTP settings shared by [`SmsCenterClientBuilder`](crate::SmsCenterClientBuilder)
/// and [`KeyClientBuilder`](crate::KeyClientBuilder).
#[derive(Debug, Clone)]
pub(crate) struct HttpSettings {
    pub(crate) base_url: String,
    pub(crate) connect_timeout: Duration,
    pub(crate) read_timeout: Duration,
    pub(crate) max_retries: u32,
    pub(crate) backoff_factor: f64,
    pub(crate) user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            max_retries: 0,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            user_agent: None,
        }
    }
}

impl HttpSettings {
    pub(crate) fn connect(self) -> Result<Connection, SmsCenterError> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| SmsCenterError::Transport(Box::new(err)))?;

        Ok(Connection::new(
            base_url,
            RetryConfig::new(self.max_retries, self.backoff_factor),
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

/// Endpoints are joined onto the base URL, so it must end with `/`.
fn parse_base_url(value: &str) -> Result<Url, SmsCenterError> {
    let mut value = value.trim().to_owned();
    if !value.ends_with('/') {
        value.push('/');
    }
    Url::parse(&value).map_err(|err| SmsCenterError::Transport(Box::new(err)))
}

/// A closable HTTP connection bound to one base URL.
pub(crate) struct Connection {
    base_url: Url,
    retry: RetryConfig,
    transport: RwLock<Option<Arc<dyn HttpTransport>>>,
}

impl Connection {
    pub(crate) fn new(base_url: Url, retry: RetryConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url,
            retry,
            transport: RwLock::new(Some(transport)),
        }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Releases the transport. Calling it again does nothing.
    pub(crate) fn close(&self) {
        let released = self
            .transport
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            tracing::debug!("SMSCenter connection closed");
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn transport(&self) -> Result<Arc<dyn HttpTransport>, SmsCenterError> {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(SmsCenterError::Closed)
    }

    fn url(&self, endpoint: &str, params: &[(String, String)]) -> Result<Url, SmsCenterError> {
        let mut url = self
            .base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|err| SmsCenterError::Transport(Box::new(err)))?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter());
        }
        Ok(url)
    }

    /// Sends one request with retries and parses the body as a JSON object.
    ///
    /// The gateway `status` envelope is not inspected here.
    pub(crate) async fn fetch(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<JsonObject, SmsCenterError> {
        let transport = self.transport()?;
        let url = self.url(endpoint, params)?;

        let mut retries_done = 0;
        let response = loop {
            tracing::debug!(%method, endpoint, attempt = retries_done + 1, "sending SMSCenter request");
            let response = transport
                .request(method.clone(), url.clone())
                .await
                .map_err(SmsCenterError::Transport)?;

            if !self.retry.should_retry(response.status, retries_done) {
                break response;
            }
            retries_done += 1;
            let delay = self.retry.delay(retries_done);
            tracing::warn!(
                endpoint,
                status = response.status,
                retry = retries_done,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "retrying SMSCenter request"
            );
            tokio::time::sleep(delay).await;
        };

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SmsCenterError::HttpStatus {
                status: response.status,
                body,
            });
        }

        parse_object(&response.body).map_err(|err| SmsCenterError::Parse(Box::new(err)))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Replays queued responses and records every requested URL.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug, Default)]
    struct FakeTransportState {
        requests: Vec<(Method, Url)>,
        responses: VecDeque<HttpResponse>,
    }

    impl FakeTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn respond(self, status: u16, body: impl Into<String>) -> Self {
            self.state
                .lock()
                .unwrap()
                .responses
                .push_back(HttpResponse {
                    status,
                    body: body.into(),
                });
            self
        }

        pub(crate) fn requests(&self) -> Vec<(Method, Url)> {
            self.state.lock().unwrap().requests.clone()
        }

        pub(crate) fn last_params(&self) -> Vec<(String, String)> {
            let state = self.state.lock().unwrap();
            let (_, url) = state.requests.last().expect("no request recorded");
            url.query_pairs().into_owned().collect()
        }
    }

    impl HttpTransport for FakeTransport {
        fn request<'a>(
            &'a self,
            method: Method,
            url: Url,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.requests.push((method, url));
                state
                    .responses
                    .pop_front()
                    .ok_or_else(|| Box::<dyn StdError + Send + Sync>::from("no response queued"))
            })
        }
    }

    pub(crate) fn connection(transport: FakeTransport, retry: RetryConfig) -> Connection {
        Connection::new(
            Url::parse("https://example.invalid/api/").unwrap(),
            retry,
            Arc::new(transport),
        )
    }

    pub(crate) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{FakeTransport, assert_param, connection};
    use super::*;

    #[test]
    fn backoff_doubles_and_is_capped() {
        let retry = RetryConfig::new(5, 0.5);
        assert_eq!(retry.delay(1), Duration::from_millis(500));
        assert_eq!(retry.delay(2), Duration::from_secs(1));
        assert_eq!(retry.delay(3), Duration::from_secs(2));

        let retry = RetryConfig::new(5, 100.0);
        assert_eq!(retry.delay(2), Duration::from_secs(120));
    }

    #[test]
    fn invalid_backoff_factor_means_no_delay() {
        assert_eq!(RetryConfig::new(1, -1.0).delay(1), Duration::ZERO);
        assert_eq!(RetryConfig::new(1, f64::NAN).delay(1), Duration::ZERO);
    }

    #[test]
    fn only_transient_statuses_are_retried() {
        let retry = RetryConfig::new(2, 0.0);
        for status in [429, 500, 502, 503, 504] {
            assert!(retry.should_retry(status, 0), "{status}");
        }
        assert!(!retry.should_retry(400, 0));
        assert!(!retry.should_retry(404, 0));
        assert!(!retry.should_retry(503, 2));
        assert!(!RetryConfig::default().should_retry(503, 0));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let url = parse_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
        assert_eq!(url.join("me/balance").unwrap().path(), "/api/me/balance");
    }

    #[tokio::test]
    async fn fetch_encodes_query_and_parses_object() {
        let transport = FakeTransport::new().respond(200, r#"{"status": "1"}"#);
        let conn = connection(transport.clone(), RetryConfig::default());

        let params = vec![
            ("mobile".to_owned(), "30 691".to_owned()),
            ("type".to_owned(), "json".to_owned()),
        ];
        let object = conn.fetch(Method::GET, "mobile/check", &params).await.unwrap();
        assert_eq!(object.get("status").and_then(|it| it.as_str()), Some("1"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, Method::GET);
        assert_eq!(requests[0].1.path(), "/api/mobile/check");
        assert_param(&transport.last_params(), "mobile", "30 691");
    }

    #[tokio::test]
    async fn fetch_retries_transient_statuses() {
        let transport = FakeTransport::new()
            .respond(503, "")
            .respond(429, "")
            .respond(200, r#"{"status": "1"}"#);
        let conn = connection(transport.clone(), RetryConfig::new(3, 0.0));

        conn.fetch(Method::GET, "me/balance", &[]).await.unwrap();
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn fetch_gives_up_after_max_retries() {
        let transport = FakeTransport::new()
            .respond(500, "boom")
            .respond(500, "boom")
            .respond(200, r#"{"status": "1"}"#);
        let conn = connection(transport.clone(), RetryConfig::new(1, 0.0));

        let err = conn.fetch(Method::GET, "me/balance", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            SmsCenterError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn fetch_does_not_retry_client_errors() {
        let transport = FakeTransport::new().respond(404, "  ");
        let conn = connection(transport.clone(), RetryConfig::new(3, 0.0));

        let err = conn.fetch(Method::GET, "me/balance", &[]).await.unwrap_err();
        assert!(matches!(
            err,
            SmsCenterError::HttpStatus {
                status: 404,
                body: None
            }
        ));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn fetch_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new().respond(200, "{ not json }");
        let conn = connection(transport, RetryConfig::default());

        let err = conn.fetch(Method::GET, "me/balance", &[]).await.unwrap_err();
        assert!(matches!(err, SmsCenterError::Parse(_)));
    }

    #[tokio::test]
    async fn transport_failures_are_not_retried() {
        let transport = FakeTransport::new();
        let conn = connection(transport.clone(), RetryConfig::new(3, 0.0));

        let err = conn.fetch(Method::GET, "me/balance", &[]).await.unwrap_err();
        assert!(matches!(err, SmsCenterError::Transport(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn closed_connection_refuses_requests() {
        let transport = FakeTransport::new().respond(200, r#"{"status": "1"}"#);
        let conn = connection(transport.clone(), RetryConfig::default());

        assert!(!conn.is_closed());
        conn.close();
        conn.close();
        assert!(conn.is_closed());

        let err = conn.fetch(Method::GET, "me/balance", &[]).await.unwrap_err();
        assert!(matches!(err, SmsCenterError::Closed));
        assert!(transport.requests().is_empty());
    }
}
