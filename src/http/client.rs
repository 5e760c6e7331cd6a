use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    auth::authorize,
    errors::{ApiError, ApiResult},
    http::{
        form::FormPayload,
        transport::{ApiRequest, ApiResponse, RequestBody, Transport},
    },
    session::SessionStore,
};

/// Fails with a construction error when a required identifier is empty.
pub fn require_id<'a>(label: &str, id: &'a str) -> ApiResult<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::construction(format!("{} is required", label)));
    }
    Ok(id)
}

/// Shared entry point of every resource client: authorizes each request from
/// the session, sends it, and turns non-success statuses into
/// [`ApiError::Backend`]. No retries, no caching.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: SessionStore) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn dispatch(
        &self,
        method: Method,
        path: impl Into<String>,
        body: RequestBody,
    ) -> ApiResult<ApiResponse> {
        let request = authorize(ApiRequest::new(method, path, body), &self.session);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("Backend answered with status {}", response.status);
        }
        Ok(response)
    }

    pub async fn request(
        &self,
        method: Method,
        path: impl Into<String>,
        body: RequestBody,
    ) -> ApiResult<Value> {
        self.dispatch(method, path, body).await?.into_body()
    }

    pub async fn request_as<T: DeserializeOwned>(
        &self,
        method: Method,
        path: impl Into<String>,
        body: RequestBody,
    ) -> ApiResult<T> {
        self.dispatch(method, path, body).await?.into_json()
    }

    pub async fn get(&self, path: impl Into<String>) -> ApiResult<Value> {
        self.request(Method::GET, path, RequestBody::Empty).await
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        payload: &B,
    ) -> ApiResult<Value> {
        self.request(Method::POST, path, json_body(payload)?).await
    }

    pub async fn post_json_as<B, T>(&self, path: impl Into<String>, payload: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_as(Method::POST, path, json_body(payload)?).await
    }

    pub async fn post_form(&self, path: impl Into<String>, form: FormPayload) -> ApiResult<Value> {
        self.request(Method::POST, path, RequestBody::Form(form)).await
    }

    pub async fn post_empty(&self, path: impl Into<String>) -> ApiResult<Value> {
        self.request(Method::POST, path, RequestBody::Empty).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: impl Into<String>,
        payload: &B,
    ) -> ApiResult<Value> {
        self.request(Method::PUT, path, json_body(payload)?).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> ApiResult<Value> {
        self.request(Method::DELETE, path, RequestBody::Empty).await
    }
}

fn json_body<B: Serialize + ?Sized>(payload: &B) -> ApiResult<RequestBody> {
    Ok(RequestBody::Json(serde_json::to_value(payload)?))
}
