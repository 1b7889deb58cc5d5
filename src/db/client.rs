use reqwest::{RequestBuilder, Response};
use serde_json::Value;

use crate::{config::Config, errors::AppError};

/// HTTP client for the hosted backend (PostgREST data API + GoTrue auth API).
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.with_api_key(self.http.post(url), &self.anon_key)
    }

    /// GET on behalf of a signed-in user.
    pub(crate) fn get_as(&self, url: &str, access_token: &str) -> RequestBuilder {
        self.with_api_key(self.http.get(url), access_token)
    }

    /// POST on behalf of a signed-in user.
    pub(crate) fn post_as(&self, url: &str, access_token: &str) -> RequestBuilder {
        self.with_api_key(self.http.post(url), access_token)
    }

    fn with_api_key(&self, builder: RequestBuilder, bearer: &str) -> RequestBuilder {
        builder.header("apikey", &self.anon_key).bearer_auth(bearer)
    }
}

/// Turns a non-2xx backend response into `AppError::Remote` with the
/// backend's own message.
pub(crate) async fn check_status(res: Response) -> Result<Response, AppError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    });

    tracing::error!("Backend request failed with {}: {}", status, message);
    Err(AppError::Remote(message))
}

/// PostgREST reports `message`; GoTrue uses `error_description`, `msg` or `error`.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    ["message", "error_description", "msg", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
