//! DeepL API endpoint
//!
//! The only provider that needs a stored credential. Requests go to the
//! free-tier API host as a form-encoded POST with a `DeepL-Auth-Key`
//! authorization header; a missing key fails fast without touching the
//! network.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::providers::TranslationProvider;
use crate::service::Service;
use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://api-free.deepl.com";

pub struct DeepLProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslationsResponse {
    translations: Vec<TranslationEntry>,
}

#[derive(Debug, Deserialize)]
struct TranslationEntry {
    text: String,
}

impl DeepLProvider {
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

    /// Store the credential sent in the authorization header
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    /// Stored credential; an empty key counts as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

impl Default for DeepLProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DeepLProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeepLProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for DeepLProvider {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> TranslateResult<String> {
        let key = self
            .api_key()
            .ok_or(TranslateError::MissingApiKey(Service::DeepL))?;

        let url = format!("{}/v2/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("DeepL-Auth-Key {}", key))
            .form(&[
                ("text", text),
                ("source_lang", from.code()),
                ("target_lang", to.code()),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::ServiceUnavailable {
                service: Service::DeepL,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TranslateError::ServiceUnavailable {
                service: Service::DeepL,
                reason: format!("HTTP {}", response.status()),
            });
        }

        let body: TranslationsResponse =
            response
                .json()
                .await
                .map_err(|e| TranslateError::UnexpectedResponse {
                    service: Service::DeepL,
                    detail: e.to_string(),
                })?;

        body.translations
            .into_iter()
            .next()
            .map(|entry| entry.text)
            .ok_or_else(|| TranslateError::UnexpectedResponse {
                service: Service::DeepL,
                detail: "empty translations list".to_string(),
            })
    }

    fn name(&self) -> &str {
        "DeepL"
    }
}
