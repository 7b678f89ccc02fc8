//! Youdao web translation endpoint
//!
//! The web endpoint auto-detects the language pair (`type=AUTO`); the
//! requested pair is not forwarded. The same endpoint backs the
//! detect-language block: its `type` field has the form `"xx2yy"`, and
//! the source language is the part before the separator.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::providers::TranslationProvider;
use crate::service::Service;
use async_trait::async_trait;

const DEFAULT_BASE_URL: &str = "https://fanyi.youdao.com";

pub struct YoudaoProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl YoudaoProvider {
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
    /// Stored but not sent; the web endpoint is unauthenticated.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = Some(key.into());
    }

    /// Stored credential; an empty key counts as unset
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    async fn fetch(&self, text: &str) -> TranslateResult<serde_json::Value> {
        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("doctype", "json"), ("type", "AUTO"), ("i", text)])
            .send()
            .await
            .map_err(|e| TranslateError::ServiceUnavailable {
                service: Service::Youdao,
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TranslateError::ServiceUnavailable {
                service: Service::Youdao,
                reason: format!("HTTP {}", response.status()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::UnexpectedResponse {
                service: Service::Youdao,
                detail: e.to_string(),
            })
    }

    /// Detect the language of `text`
    ///
    /// Extracts the `type` field (`"en2zh-CHS"` → `"en"`). All failures
    /// collapse into `DetectionFailed`; the detect block renders a single
    /// fixed message regardless of cause.
    pub async fn detect(&self, text: &str) -> TranslateResult<String> {
        let data = self
            .fetch(text)
            .await
            .map_err(|e| TranslateError::DetectionFailed(e.to_string()))?;

        let pair = data
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or_else(|| TranslateError::DetectionFailed("missing type field".to_string()))?;

        let detected = pair.split_once('2').map(|(from, _)| from).unwrap_or(pair);
        Ok(detected.to_string())
    }
}

impl Default for YoudaoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for YoudaoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoudaoProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for YoudaoProvider {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        _to: Language,
    ) -> TranslateResult<String> {
        let data = self.fetch(text).await?;

        data.get("translateResult")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("tgt"))
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| TranslateError::UnexpectedResponse {
                service: Service::Youdao,
                detail: "missing translateResult[0][0].tgt".to_string(),
            })
    }

    fn name(&self) -> &str {
        "Youdao"
    }
}
