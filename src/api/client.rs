//! The API mutator: one entry point for every dashboard request.
//!
//! [`ApiClient::execute`] resolves a [`RequestConfig`] against the base URL,
//! attaches the bearer token, sends it through an [`HttpClient`] and turns the
//! outcome into a typed value or a classified [`DashError`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::adapters::{ReqwestHttpClient, StaticCredentials};
use crate::config::ApiConfig;
use crate::error::{AuthError, DashError, DashResult, NetworkError};
use crate::request::{CancelToken, RequestConfig};
use crate::traits::{CredentialsProvider, HttpClient, HttpError, HttpRequest, Response};

/// Typed client for the dashboard REST API.
///
/// Cloning is cheap when `C` and `P` are: clones share the connection pool
/// and the credentials store.
#[derive(Debug, Clone)]
pub struct ApiClient<C, P> {
    http: C,
    credentials: P,
    base_url: String,
}

impl<C, P> ApiClient<C, P>
where
    C: HttpClient,
    P: CredentialsProvider,
{
    pub fn new(http: C, credentials: P, base_url: impl Into<String>) -> Self {
        Self {
            http,
            credentials,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    pub fn credentials(&self) -> &P {
        &self.credentials
    }

    /// Send `config` and decode the 2xx body into `T`.
    ///
    /// An empty body decodes as JSON `null`, so `()` and `Option<_>` work for
    /// `204 No Content`.
    pub async fn execute<T: DeserializeOwned>(&self, config: RequestConfig) -> DashResult<T> {
        let method = config.method;
        let url = config.resolve_url(&self.base_url);

        let result = self.execute_inner(config, &url).await;
        if let Err(err) = &result {
            warn!(
                method = %method,
                url = %url,
                code = err.error_code(),
                "Request failed: {}",
                err
            );
        }
        result
    }

    async fn execute_inner<T: DeserializeOwned>(
        &self,
        config: RequestConfig,
        url: &str,
    ) -> DashResult<T> {
        let request = self.build_request(&config, url).await?;
        debug!(method = %request.method, url = %request.url, "Sending request");

        let response = match &config.cancel {
            Some(token) => send_cancellable(&self.http, request, token).await,
            None => self.http.send(request).await,
        }
        .map_err(|e| NetworkError::from_http_error(e, url))?;

        debug!(status = response.status, url = %url, "Received response");

        if !response.is_success() {
            return Err(classify_status(&response, url));
        }
        decode_body(&response)
    }

    async fn build_request(&self, config: &RequestConfig, url: &str) -> DashResult<HttpRequest> {
        let mut request = HttpRequest::new(config.method, url);
        request.headers = config.headers.clone();

        if !config.has_header("accept") {
            request
                .headers
                .insert("Accept".to_string(), "application/json".to_string());
        }

        if !config.has_header("authorization") {
            let creds = self.credentials.load().await?;
            if let Some(token) = creds.as_ref().and_then(|c| c.bearer_token()) {
                request
                    .headers
                    .insert("Authorization".to_string(), format!("Bearer {}", token));
            }
        }

        if let Some(body) = &config.body {
            request.body = Some(body.to_string());
            if !config.has_header("content-type") {
                request
                    .headers
                    .insert("Content-Type".to_string(), "application/json".to_string());
            }
        }

        Ok(request)
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> DashResult<T> {
        self.execute(RequestConfig::get(url)).await
    }

    pub async fn post<B, T>(&self, url: &str, body: &B) -> DashResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(RequestConfig::post(url).with_json(body)?).await
    }

    pub async fn put<B, T>(&self, url: &str, body: &B) -> DashResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(RequestConfig::put(url).with_json(body)?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> DashResult<T> {
        self.execute(RequestConfig::delete(url)).await
    }
}

impl ApiClient<ReqwestHttpClient, StaticCredentials> {
    /// Production client: reqwest with the configured timeout and the
    /// configured token, if any.
    pub fn from_config(config: &ApiConfig) -> DashResult<Self> {
        config.validate()?;
        let http = ReqwestHttpClient::with_timeout(config.timeout())
            .map_err(|e| NetworkError::from_http_error(e, &config.base_url))?;
        let credentials = StaticCredentials::from_token(config.access_token.as_deref());
        Ok(Self::new(http, credentials, config.base_url.as_str()))
    }
}

async fn send_cancellable<C: HttpClient>(
    http: &C,
    request: HttpRequest,
    token: &CancelToken,
) -> Result<Response, HttpError> {
    if token.is_cancelled() {
        return Err(HttpError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(HttpError::Cancelled),
        result = http.send(request) => result,
    }
}

/// Map a non-2xx response onto the error taxonomy.
fn classify_status(response: &Response, url: &str) -> DashError {
    let message = error_message(response);
    match response.status {
        401 => AuthError::Unauthorized { message }.into(),
        403 => AuthError::AccessDenied {
            resource: Some(path_of(url).to_string()),
        }
        .into(),
        429 => NetworkError::RateLimited {
            retry_after_secs: response
                .header("retry-after")
                .and_then(|v| v.trim().parse().ok()),
        }
        .into(),
        status => NetworkError::HttpStatus { status, message }.into(),
    }
}

/// Pull a human-readable message out of an error body.
///
/// JSON bodies are searched for `message`, `error` and `detail`; other bodies
/// are used verbatim.
fn error_message(response: &Response) -> String {
    let text = response.text().unwrap_or_default();
    let text = text.trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        for key in ["message", "error", "detail"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    text.to_string()
}

fn decode_body<T: DeserializeOwned>(response: &Response) -> DashResult<T> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| {
        NetworkError::InvalidResponse {
            message: e.to_string(),
        }
        .into()
    })
}

/// Path component of `url` without scheme, host or query.
fn path_of(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = without_scheme
        .find('/')
        .map_or("/", |idx| &without_scheme[idx..]);
    path.split(['?', '#']).next().unwrap_or(path)
}
