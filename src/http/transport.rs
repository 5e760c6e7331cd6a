use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::Config,
    errors::{ApiError, ApiResult},
    http::form::FormPayload,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Form(FormPayload),
}

/// One outbound call, relative to the backend base URL.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<SecretString>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            bearer: None,
        }
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer.as_ref().map(|token| token.expose_secret())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Empty bodies become `Null`, non-JSON bodies are kept as a string.
    pub fn parse_body(raw: &[u8]) -> Value {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Value::Null;
        }
        serde_json::from_slice(raw)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(raw).into_owned()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_body(self) -> ApiResult<Value> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ApiError::from_response(self.status, self.body))
        }
    }

    pub fn into_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        let status = self.status;
        let body = self.into_body()?;
        serde_json::from_value(body.clone()).map_err(|e| ApiError::Backend {
            status,
            body: Some(body),
            message: format!("Malformed response body: {}", e),
        })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns whatever the backend answered, success
    /// or not. Only failures to get a response are errors here.
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        Url::parse(base_url).map_err(|e| {
            ApiError::construction(format!("Invalid base URL '{}': {}", base_url, e))
        })?;

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url_for(&request.path);
        let mut builder = self.client.request(request.method.clone(), &url);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token.expose_secret());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(form) => builder.multipart(form.into_multipart()?),
        };

        let response = builder.send().await.map_err(|e| {
            log::error!("{} {} failed: {}", request.method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status().as_u16();
        // The status line already arrived, so a broken body is the backend's fault.
        let raw = response.bytes().await.map_err(|e| {
            log::error!("{} {} -> {} with unreadable body: {}", request.method, url, status, e);
            ApiError::Backend {
                status,
                body: None,
                message: format!("Could not read response body: {}", e),
            }
        })?;
        log::debug!("{} {} -> {}", request.method, url, status);

        Ok(ApiResponse::new(status, ApiResponse::parse_body(&raw)))
    }
}
