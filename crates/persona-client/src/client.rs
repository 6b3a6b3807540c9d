use crate::api::{
    AuthApi, AvatarsApi, ChatApi, ConversationsApi, KnowledgeApi, UsersApi, VoicesApi,
};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;

/// HTTP client for the Persona backend.
///
/// The client is the session context: it owns the bearer token, which is
/// set on login/restore and cleared on logout. Every request-issuing
/// operation goes through it, so there is no ambient global credential.
pub struct ApiClient {
    http: reqwest::Client,
    api_root: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.api.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            token: RwLock::new(None),
        })
    }

    /// Shortcut for tests and small tools: client against a base URL
    /// with default settings.
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let config = ClientConfig {
            api: crate::config::ApiConfig {
                base_url,
                timeout_ms: 30_000,
            },
            logging: Default::default(),
        };
        Self::new(&config)
    }

    /// Install the bearer token for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    /// Drop the credential. Subsequent authenticated calls fail with
    /// [`ApiError::NotAuthenticated`].
    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.read().map(|t| t.is_some()).unwrap_or(false)
    }

    fn bearer(&self) -> Result<String> {
        self.token
            .read()
            .ok()
            .and_then(|slot| slot.clone())
            .map(|token| format!("Bearer {}", token))
            .ok_or(ApiError::NotAuthenticated)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
                .unwrap_or(body);
            tracing::debug!("request rejected with status {}: {}", status, detail);
            Err(ApiError::Status {
                code: status.as_u16(),
                detail,
            })
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.url(path))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .header("Authorization", self.bearer()?)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST with query parameters, used by `/chat/send?conversation_id=`.
    pub(crate) async fn post_with_query<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .post(self.url(path))
            .header("Authorization", self.bearer()?)
            .query(query)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http
            .put(self.url(path))
            .header("Authorization", self.bearer()?)
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST without a bearer token: registration and login.
    pub(crate) async fn post_anonymous<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(path))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                code: status.as_u16(),
                detail,
            })
        }
    }

    /// Multipart upload of a single file part named `file`.
    pub(crate) async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(|e| ApiError::Internal(format!("invalid mime type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url(path))
            .header("Authorization", self.bearer()?)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn conversations(&self) -> ConversationsApi<'_> {
        ConversationsApi::new(self)
    }

    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi::new(self)
    }

    pub fn knowledge(&self) -> KnowledgeApi<'_> {
        KnowledgeApi::new(self)
    }

    pub fn avatars(&self) -> AvatarsApi<'_> {
        AvatarsApi::new(self)
    }

    pub fn voices(&self) -> VoicesApi<'_> {
        VoicesApi::new(self)
    }
}
