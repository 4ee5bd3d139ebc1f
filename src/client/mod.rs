//! HTTP client for the AssetHub REST backend

pub mod token;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;
use validator::Validate;

use crate::{
    backend::Backend,
    config::ApiConfig,
    error::{AppError, AppResult},
    models::{account::TokenResponse, AccountProfile, Collection, LoginForm, SignupRequest},
};

pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};

/// Thin wrapper over `reqwest` that carries the bearer credential
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a credential is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.tokens.load().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> AppResult<Value> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> AppResult<Value> {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> AppResult<Value> {
        self.execute(self.http.patch(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<Value> {
        self.execute(self.http.delete(self.url(path))).await
    }

    /// Exchange credentials for a bearer token and store it
    pub async fn login(&self, form: &LoginForm) -> AppResult<()> {
        form.validate()?;

        let body = self
            .execute(self.http.post(self.url("/login")).form(form))
            .await
            .map_err(|e| match e {
                // Wrong credentials, not an expired session
                AppError::Unauthorized(message) => AppError::api(401, Some(message)),
                other => other,
            })?;

        let token: TokenResponse = serde_json::from_value(body)?;
        self.tokens.save(&token.access_token)?;
        tracing::info!("Logged in as {}", form.username);
        Ok(())
    }

    pub async fn signup(&self, request: &SignupRequest) -> AppResult<()> {
        request.validate()?;
        self.post("/signup", &serde_json::to_value(request)?).await?;
        tracing::info!("Created account for {}", request.email);
        Ok(())
    }

    pub fn logout(&self) -> AppResult<()> {
        self.tokens.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Profile of the logged-in account
    pub async fn me(&self) -> AppResult<AccountProfile> {
        let body = self.get("/users/me").await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn execute(&self, request: RequestBuilder) -> AppResult<Value> {
        let request = match self.tokens.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => value,
                Err(e) if status.is_success() => return Err(e.into()),
                Err(_) => Value::Null,
            }
        };

        if status == StatusCode::UNAUTHORIZED {
            self.tokens.clear()?;
            tracing::warn!("Backend rejected the stored credential; session cleared");
            let message = error_message(&body).unwrap_or_else(|| "Not authenticated".to_string());
            return Err(AppError::Unauthorized(message));
        }

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(
                "Backend request failed with {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(match status {
                StatusCode::NOT_FOUND => AppError::NotFound(
                    message.unwrap_or_else(|| "Resource not found".to_string()),
                ),
                _ => AppError::api(status.as_u16(), message),
            });
        }

        Ok(body)
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"detail": "..."}`, validation lists of the form
/// `{"detail": [{"msg": "..."}]}`, and `{"message": "..."}`.
pub fn error_message(body: &Value) -> Option<String> {
    match body.get("detail") {
        Some(Value::String(detail)) => return Some(detail.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl Backend for ApiClient {
    async fn list(&self, collection: Collection) -> AppResult<Vec<Value>> {
        match self.get(collection.path()).await? {
            Value::Array(rows) => Ok(rows),
            other => Err(AppError::Internal(format!(
                "Expected a list from {}, got {}",
                collection.path(),
                json_type(&other)
            ))),
        }
    }

    async fn create(&self, collection: Collection, payload: Value) -> AppResult<Value> {
        self.post(collection.path(), &payload).await
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> AppResult<Value> {
        self.patch(&record_path(collection, id), &patch).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> AppResult<()> {
        ApiClient::delete(self, &record_path(collection, id)).await?;
        Ok(())
    }

    async fn summary(&self) -> AppResult<Value> {
        self.get("/report/summary").await
    }
}

/// Escape free text so it stays one URL path segment
pub fn path_segment(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

fn record_path(collection: Collection, id: &str) -> String {
    format!("{}/{}", collection.path(), path_segment(id))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
