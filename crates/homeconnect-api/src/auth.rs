// Authenticated transport.
//
// Every request gets a freshly obtained bearer token from the configured
// `TokenProvider`, so providers that refresh tokens behind the scenes work
// without the client noticing. Paths are relative to `{host}/api`.

use std::sync::Arc;
use std::time::Duration;

use eventsource_stream::Eventsource;
use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;
use futures_util::{FutureExt, StreamExt};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, HeaderValue, RETRY_AFTER};
use reqwest::{Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};
use url::Url;

use crate::error::Error;
use crate::model::{Language, content_type};
use crate::stream::{DataLineFill, Frame};
use crate::transport::TransportConfig;

/// Production API host.
pub const DEFAULT_HOST: &str = "https://api.home-connect.com";

/// Appliance simulator host.
pub const SIMULATOR_HOST: &str = "https://simulator.home-connect.com";

// ── Token providers ──────────────────────────────────────────────────

/// Source of OAuth access tokens.
///
/// Called once per request and once per stream connection.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self) -> BoxFuture<'_, Result<SecretString, Error>>;
}

/// A fixed access token.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: SecretString,
}

impl StaticToken {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> BoxFuture<'_, Result<SecretString, Error>> {
        futures_util::future::ready(Ok(self.token.clone())).boxed()
    }
}

// ── Event source capability ──────────────────────────────────────────

/// Raw frames of one open event stream, in arrival order.
pub type FrameStream = BoxStream<'static, Result<Frame, Error>>;

/// Opens authenticated server-sent-event connections.
///
/// The stream engine only depends on this trait; [`Auth`] is the HTTP
/// implementation.
pub trait EventSource: Send + Sync {
    /// Open the stream at `path` (relative to `{host}/api`).
    ///
    /// Fails with the mapped status error if the server rejects the request.
    fn connect<'a>(
        &'a self,
        path: &'a str,
        language: Option<Language>,
    ) -> BoxFuture<'a, Result<FrameStream, Error>>;
}

// ── Auth ─────────────────────────────────────────────────────────────

/// Bearer-token HTTP transport bound to one API host.
#[derive(Clone)]
pub struct Auth {
    http: reqwest::Client,
    host: Url,
    tokens: Arc<dyn TokenProvider>,
    timeout: Duration,
}

impl Auth {
    /// Create an auth transport with a client built from `transport`.
    pub fn new(
        host: Url,
        tokens: Arc<dyn TokenProvider>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, host, tokens, transport.timeout))
    }

    /// Create an auth transport around a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        host: Url,
        tokens: Arc<dyn TokenProvider>,
        timeout: Duration,
    ) -> Self {
        Self {
            http,
            host,
            tokens,
            timeout,
        }
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Build `{host}/api{path}`. `path` must start with a slash.
    pub fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!("{}/api{path}", self.host.as_str().trim_end_matches('/'));
        Ok(Url::parse(&full)?)
    }

    /// Start an authenticated request with a fresh bearer token.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        language: Option<Language>,
    ) -> Result<RequestBuilder, Error> {
        let url = self.api_url(path)?;
        debug!("{method} {url}");

        let mut builder = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.bearer().await?);
        if let Some(language) = language {
            builder = builder.header(ACCEPT_LANGUAGE, language.as_str());
        }
        Ok(builder)
    }

    /// Send a request with the REST timeout, mapping non-success statuses.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        check_status(builder.timeout(self.timeout).send().await?).await
    }

    async fn bearer(&self) -> Result<HeaderValue, Error> {
        let token = self.tokens.access_token().await?;
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Token {
                message: format!("access token is not a valid header value: {e}"),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("host", &self.host.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl EventSource for Auth {
    fn connect<'a>(
        &'a self,
        path: &'a str,
        language: Option<Language>,
    ) -> BoxFuture<'a, Result<FrameStream, Error>> {
        async move {
            let request = self
                .request(Method::GET, path, language)
                .await?
                .header(ACCEPT, content_type::EVENT_STREAM);

            info!(path, "Opening event stream");
            let response = check_status(request.send().await?).await?;
            info!(path, "Event stream open");

            let mut fill = DataLineFill::default();
            let frames = response
                .bytes_stream()
                .map(move |chunk| chunk.map(|bytes| fill.feed(&bytes)))
                .eventsource()
                .map(|item| match item {
                    Ok(event) => Ok(Frame::from(event)),
                    Err(e) => Err(Error::Stream(e.to_string())),
                });
            Ok(frames.boxed())
        }
        .boxed()
    }
}

/// Pass a success response through, or turn the failure into an [`Error`].
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), body = %body, "Request rejected");

    Err(Error::from_status(status, retry_after, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(host: &str) -> Auth {
        let tokens = Arc::new(StaticToken::new(SecretString::from("t0k3n")));
        Auth::new(Url::parse(host).unwrap(), tokens, &TransportConfig::default()).unwrap()
    }

    #[test]
    fn api_url_appends_api_prefix() {
        let url = auth("https://api.home-connect.com")
            .api_url("/homeappliances/events")
            .unwrap();
        assert_eq!(url.as_str(), "https://api.home-connect.com/api/homeappliances/events");
    }

    #[test]
    fn api_url_tolerates_trailing_slash_in_host() {
        let url = auth("http://127.0.0.1:8080/").api_url("/homeappliances").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/homeappliances");
    }

    #[tokio::test]
    async fn bearer_header_is_sensitive() {
        let value = auth(DEFAULT_HOST).bearer().await.unwrap();
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().unwrap(), "Bearer t0k3n");
    }
}
