use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::session::TokenStore;

/// Raw successful reply: status plus body text.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP binding for the backend REST API.
///
/// Constructed once by the composition root and cloned into each
/// repository; clones share the connection pool and the token store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let base = config
            .base()
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, base, tokens })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Resolve a path relative to the base URL (`"candidatos/"` → `<base>/candidatos/`).
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Attach the bearer token when one is stored; otherwise send as is.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.access_token() {
            Some(token) if !token.is_empty() => builder.bearer_auth(token.expose()),
            _ => builder,
        }
    }

    /// Send a request and collect the body. Non-2xx replies become
    /// [`ApiError::Status`] with the raw error body.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<ApiReply, ApiError> {
        let span = tracing::debug_span!(
            "api_request",
            request_id = %Uuid::new_v4(),
            method = %method,
            path = %url.path(),
        );

        async move {
            let mut builder = self.authorize(self.http.request(method, url));
            if let Some(body) = body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| {
                tracing::warn!(error = %e, "request failed before a response arrived");
                ApiError::Transport(e)
            })?;

            let status = response.status();
            let body = response.text().await?;

            if status.is_success() {
                tracing::debug!(status = status.as_u16(), bytes = body.len(), "request completed");
                Ok(ApiReply { status, body })
            } else {
                tracing::warn!(status = status.as_u16(), "backend rejected request");
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
        .instrument(span)
        .await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let reply = self.send::<()>(Method::GET, url, None).await?;
        decode(&reply)
    }

    /// Like [`get_json`](Self::get_json), but an empty 2xx body yields `T::default()`.
    pub async fn get_json_or_default<T: DeserializeOwned + Default>(
        &self,
        url: Url,
    ) -> Result<T, ApiError> {
        let reply = self.send::<()>(Method::GET, url, None).await?;
        if reply.body.trim().is_empty() {
            return Ok(T::default());
        }
        decode(&reply)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, ApiError> {
        let reply = self.send(Method::POST, url, Some(body)).await?;
        decode(&reply)
    }
}

fn decode<T: DeserializeOwned>(reply: &ApiReply) -> Result<T, ApiError> {
    if reply.body.trim().is_empty() {
        return Err(ApiError::EmptyBody);
    }
    Ok(serde_json::from_str(&reply.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    fn client(base_url: &str) -> ApiClient {
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        ApiClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap()
    }

    #[test]
    fn test_endpoint_joins_below_api_prefix() {
        let client = client("http://localhost:8000/api");
        let url = client.endpoint("usuarios/login/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/usuarios/login/");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        let result = ApiClient::new(&config, Arc::new(MemoryTokenStore::new()));
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_decode_empty_body() {
        let reply = ApiReply {
            status: StatusCode::OK,
            body: "  ".to_string(),
        };
        let result: Result<serde_json::Value, _> = decode(&reply);
        assert!(matches!(result, Err(ApiError::EmptyBody)));
    }
}
