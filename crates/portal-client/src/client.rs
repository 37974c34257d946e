//! Core HTTP plumbing: base URL, envelope decoding, error mapping.

use std::time::Duration;

use portal_core::traits::ConfigProvider;
use portal_core::{Error, Result};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Base URL used when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8101/api";

/// Default per-request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Envelope wrapping every backend response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// `0` on success, a business error code otherwise.
    pub code: i64,
    /// Payload; absent or null for void endpoints and errors.
    pub data: Option<T>,
    /// Human-readable status message.
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the payload, turning a non-zero code into [`Error::Api`].
    ///
    /// # Example
    ///
    /// ```
    /// use portal_client::ApiResponse;
    ///
    /// let ok: ApiResponse<u32> = serde_json::from_str(r#"{"code":0,"data":7,"message":"ok"}"#).unwrap();
    /// assert_eq!(ok.into_data().unwrap(), Some(7));
    ///
    /// let err: ApiResponse<u32> = serde_json::from_str(r#"{"code":40100,"data":null,"message":"not logged in"}"#).unwrap();
    /// assert!(err.into_data().is_err());
    /// ```
    pub fn into_data(self) -> Result<Option<T>> {
        if self.code != 0 {
            let message = self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Error".to_string());
            return Err(Error::api(self.code, message));
        }
        Ok(self.data)
    }
}

/// Client for the platform backend.
///
/// Keeps a cookie store so the session cookie set by `login` is sent on
/// every later call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client from configuration.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(config.api_base_url()?, config.request_timeout())
    }

    /// Creates a client with an explicit timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::config(format!("Invalid API base URL {base_url:?}: {e}")))?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { base_url, http })
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path such as `/user/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(path))
    }

    /// Sends a request and returns the envelope's payload, which must be present.
    pub(crate) async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.envelope::<T>(request)
            .await?
            .into_data()?
            .ok_or_else(|| Error::invalid_data("Response envelope has no data"))
    }

    /// Sends a request whose payload is irrelevant.
    pub(crate) async fn call_unit(&self, request: RequestBuilder) -> Result<()> {
        self.envelope::<serde_json::Value>(request)
            .await?
            .into_data()
            .map(|_| ())
    }

    async fn envelope<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<ApiResponse<T>> {
        let response = request.send().await.map_err(|e| {
            log::warn!("Network error: {e}");
            Error::http(format!("network error: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(format!("HTTP {status} from {}", response.url())));
        }

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::http(format!("Failed to decode response: {e}")))?;
        if envelope.code != 0 {
            log::warn!(
                "API rejected request: code={} message={:?}",
                envelope.code,
                envelope.message
            );
        }
        Ok(envelope)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_endpoint_joining() {
        let client = ApiClient::new("http://localhost:8101/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8101/api");
        assert_eq!(
            client.endpoint("/user/login"),
            "http://localhost:8101/api/user/login"
        );
        assert_eq!(
            client.endpoint("user/login"),
            "http://localhost:8101/api/user/login"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_envelope_error_uses_fallback_message() {
        let env: ApiResponse<u32> =
            serde_json::from_str(r#"{"code":50000,"message":""}"#).unwrap();
        let err = env.into_data().unwrap_err();
        assert!(
            matches!(&err, Error::Api { code: 50000, message } if message == "Error"),
            "got: {err:?}"
        );
    }

    #[test]
    fn test_envelope_missing_data_is_none() {
        let env: ApiResponse<u32> = serde_json::from_str(r#"{"code":0}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), None);
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/get/login"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let err = client
            .call::<serde_json::Value>(client.request(Method::GET, "/user/get/login"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.to_string().contains("502"));
    }

    #[tokio::test]
    async fn test_missing_data_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/thing"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "code": 0, "data": null, "message": "ok" })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let err = client
            .call::<u64>(client.request(Method::GET, "/thing"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
