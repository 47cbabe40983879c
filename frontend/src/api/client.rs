use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{extract_detail, ApiError},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn url(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path).await;
        self.send(self.client.get(url)).await?.json()
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_with_query(path, &[], body).await
    }

    pub async fn post_with_query<B, T>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path).await;
        let mut request = self.client.post(url).json(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await?.json()
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path).await;
        self.send(self.client.delete(url)).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<HttpReply, ApiError> {
        let result = self
            .dispatch(request)
            .await
            .and_then(HttpReply::error_for_status);
        if let Err(err) = &result {
            log::error!("API Error: {} (code={}, status={:?})", err, err.code, err.status);
        }
        result
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<HttpReply, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if let Some(reply) = mocked_reply(&request) {
            return reply;
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        Ok(HttpReply { status, body })
    }
}

#[derive(Debug, Clone)]
struct HttpReply {
    status: u16,
    body: String,
}

impl HttpReply {
    fn error_for_status(self) -> Result<Self, ApiError> {
        if (200..300).contains(&self.status) {
            Ok(self)
        } else {
            Err(ApiError::http(self.status, extract_detail(&self.body)))
        }
    }

    fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_reply(_request: &reqwest::Request) -> Option<Result<HttpReply, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_reply(request: &reqwest::Request) -> Option<Result<HttpReply, ApiError>> {
    let responder = find_mock(request.url().as_str())?;
    Some(responder.respond(request).map(|mock| HttpReply {
        status: mock.status,
        body: mock.body,
    }))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use self::mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use self::mock_registry::find_mock;
