//! Microsoft translator endpoint
//!
//! Uses the legacy ajax endpoint, which takes the text and language pair
//! as query parameters and answers with the translation as a JSON-quoted
//! string in the response body.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::providers::TranslationProvider;
use crate::service::Service;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://api.microsofttranslator.com";

pub struct MicrosoftProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MicrosoftProvider {
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
    /// Sent as the `appId` query parameter when present; the endpoint
    /// also answers with an empty `appId`.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    /// Stored credential; an empty key counts as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for MicrosoftProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MicrosoftProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MicrosoftProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Remove one pair of wrapping double quotes, if present
///
/// The endpoint returns the translated text as a JSON string literal;
/// a body without the quotes is passed through unchanged.
fn strip_wrapping_quotes(body: &str) -> &str {
    body.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(body)
}

#[async_trait]
impl TranslationProvider for MicrosoftProvider {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> TranslateResult<String> {
        let url = format!("{}/v2/ajax.svc/Translate", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("appId", self.api_key().unwrap_or("")),
                ("text", text),
                ("from", from.code()),
                ("to", to.code()),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::ServiceUnavailable {
                service: Service::Microsoft,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TranslateError::ServiceUnavailable {
                service: Service::Microsoft,
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::ServiceUnavailable {
                service: Service::Microsoft,
                reason: e.to_string(),
            })?;

        Ok(strip_wrapping_quotes(&body).to_string())
    }

    fn name(&self) -> &str {
        "Microsoft"
    }
}
