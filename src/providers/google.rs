//! Google web translation endpoint
//!
//! Uses the unauthenticated `gtx` client endpoint. The response is a
//! positional JSON array; the translated text sits at `[0][0][0]`.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::providers::TranslationProvider;
use crate::service::Service;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

pub struct GoogleProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Provider pointed at a different host, used by tests
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Store the credential for this provider
    ///
    /// Stored but not sent; the gtx endpoint is unauthenticated.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    /// Stored credential; an empty key counts as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for GoogleProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GoogleProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for GoogleProvider {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> TranslateResult<String> {
        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", from.code()),
                ("tl", to.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::ServiceUnavailable {
                service: Service::Google,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TranslateError::ServiceUnavailable {
                service: Service::Google,
                reason: format!("HTTP {}", response.status()),
            });
        }

        let data: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| TranslateError::UnexpectedResponse {
                    service: Service::Google,
                    detail: e.to_string(),
                })?;

        data.get(0)
            .and_then(|v| v.get(0))
            .and_then(|v| v.get(0))
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| TranslateError::UnexpectedResponse {
                service: Service::Google,
                detail: "missing translation at [0][0][0]".to_string(),
            })
    }

    fn name(&self) -> &str {
        "Google"
    }
}
