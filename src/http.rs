//! HTTP Client Wrapper
//!
//! Single outbound request path for every domain module. Two cross-cutting
//! behaviors live here:
//!
//! - **Outbound**: the persisted access token, when present, is attached as
//!   `Authorization: Bearer <token>` on every request. Absent a token the
//!   request proceeds unauthenticated.
//! - **Inbound**: success passes through parsed; a 401 becomes the tagged
//!   [`ApiError::Unauthorized`] outcome. The transport layer never clears
//!   state or navigates – that decision belongs to the session coordinator.
//!
//! No retries, no queueing, no automatic refresh: an expired access token
//! always degrades to forced re-login.

use crate::config::Config;
use crate::error::{ApiError, ErrorDetail};
use crate::tokens::TokenStore;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Configured request client with bearer attachment and status mapping
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base: Url,
    tokens: Arc<TokenStore>,
}

impl HttpClient {
    /// Build a client against the configured base URL. The token store is
    /// injected so tests can substitute an isolated one.
    pub fn new(config: &Config, tokens: Arc<TokenStore>) -> Self {
        Self {
            client: Client::new(),
            base: config.base_url.clone(),
            tokens,
        }
    }

    /// Resolve a request URL against the base
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the cached access token, if any
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(builder).send().await?;
        Self::check(response).await
    }

    /// Parse a successful response body
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Map the response status: pass through on success, tag 401, surface the
    /// backend's detail body on anything else.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            detail: ErrorDetail::from_body(&body),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!("GET {}", path);
        let response = self.send(self.client.get(self.endpoint(path))).await?;
        Self::parse(response).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        debug!("GET {}", path);
        let response = self
            .send(self.client.get(self.endpoint(path)).query(query))
            .await?;
        Self::parse(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let response = self
            .send(self.client.post(self.endpoint(path)).json(body))
            .await?;
        Self::parse(response).await
    }

    /// POST with a body, discarding any response body
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {}", path);
        self.send(self.client.post(self.endpoint(path)).json(body))
            .await?;
        Ok(())
    }

    /// POST without a body, discarding any response body
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        debug!("POST {}", path);
        self.send(self.client.post(self.endpoint(path))).await?;
        Ok(())
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PATCH {}", path);
        let response = self
            .send(self.client.patch(self.endpoint(path)).json(body))
            .await?;
        Self::parse(response).await
    }

    /// PATCH carrying query parameters only, for 204 endpoints
    pub async fn patch_query_unit<Q>(&self, path: &str, query: &Q) -> Result<(), ApiError>
    where
        Q: Serialize + ?Sized,
    {
        debug!("PATCH {}", path);
        self.send(self.client.patch(self.endpoint(path)).query(query))
            .await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("PUT {}", path);
        let response = self
            .send(self.client.put(self.endpoint(path)).json(body))
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        debug!("DELETE {}", path);
        self.send(self.client.delete(self.endpoint(path))).await?;
        Ok(())
    }

    /// Direct binary PUT to an absolute (pre-signed) URL.
    ///
    /// Bypasses base resolution and the bearer interceptor: the signature in
    /// the URL is the only credential the storage service accepts.
    pub async fn put_binary(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ApiError> {
        debug!("PUT (direct) {} bytes", bytes.len());
        let response = self
            .client
            .put(url)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn client_with_base(base: &str) -> HttpClient {
        let dir = tempfile::tempdir().unwrap();
        let tokens = Arc::new(TokenStore::open(dir.path().join("tokens.json")).unwrap());
        let config = Config::new(Url::parse(base).unwrap(), PathBuf::from("unused"));
        HttpClient::new(&config, tokens)
    }

    #[test]
    fn test_endpoint_joins_without_doubled_slashes() {
        let client = client_with_base("http://localhost:8000");
        assert_eq!(
            client.endpoint("/auth/login"),
            "http://localhost:8000/auth/login"
        );
        assert_eq!(
            client.endpoint("profiles/me"),
            "http://localhost:8000/profiles/me"
        );
    }

    #[test]
    fn test_endpoint_respects_base_path_prefix() {
        let client = client_with_base("https://example.org/api/");
        assert_eq!(
            client.endpoint("/admin/tenants/"),
            "https://example.org/api/admin/tenants/"
        );
    }
}
