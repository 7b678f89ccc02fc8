//! The extension: dispatch and host boundary
//!
//! `BetterTranslate` owns the four provider strategies and the message
//! catalog. Host-facing operations never fail: typed errors are carried
//! internally and rendered into the display strings the host shows the
//! user by a single boundary adapter.

use crate::descriptor::{self, ExtensionInfo};
use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::messages::MessageCatalog;
use crate::providers::{
    DeepLProvider, GoogleProvider, MicrosoftProvider, TranslationProvider, YoudaoProvider,
};
use crate::service::Service;
use serde::Deserialize;
use tracing::{debug, warn};

/// Arguments of the translate block
#[derive(Debug, Clone, Deserialize)]
pub struct TranslateArgs {
    #[serde(rename = "SERVICE")]
    pub service: String,
    #[serde(rename = "TEXT")]
    pub text: String,
    #[serde(rename = "FROM")]
    pub from: String,
    #[serde(rename = "TO")]
    pub to: String,
}

/// Arguments of the set-API-key block
#[derive(Debug, Clone, Deserialize)]
pub struct SetApiKeyArgs {
    #[serde(rename = "SERVICE")]
    pub service: String,
    #[serde(rename = "KEY")]
    pub key: String,
}

/// Arguments of the detect-language block
#[derive(Debug, Clone, Deserialize)]
pub struct DetectLanguageArgs {
    #[serde(rename = "TEXT")]
    pub text: String,
}

pub struct BetterTranslate {
    catalog: MessageCatalog,
    microsoft: MicrosoftProvider,
    deepl: DeepLProvider,
    google: GoogleProvider,
    youdao: YoudaoProvider,
}

impl BetterTranslate {
    /// Extension with the given label catalog and default provider hosts
    pub fn new(catalog: MessageCatalog) -> Self {
        Self::with_providers(
            catalog,
            MicrosoftProvider::new(),
            DeepLProvider::new(),
            GoogleProvider::new(),
            YoudaoProvider::new(),
        )
    }

    /// Extension with the built-in catalog at `locale`
    pub fn with_locale(locale: &str) -> Self {
        let mut catalog = MessageCatalog::new();
        catalog.with_locale(locale);
        Self::new(catalog)
    }

    /// Extension over explicit provider instances
    ///
    /// Hosts and tests use this to point providers at proxies or mock
    /// servers.
    pub fn with_providers(
        catalog: MessageCatalog,
        microsoft: MicrosoftProvider,
        deepl: DeepLProvider,
        google: GoogleProvider,
        youdao: YoudaoProvider,
    ) -> Self {
        Self {
            catalog,
            microsoft,
            deepl,
            google,
            youdao,
        }
    }

    /// The descriptor the host renders the UI from
    pub fn get_info(&self) -> ExtensionInfo {
        descriptor::extension_info(&self.catalog)
    }

    /// Resolve a label through the catalog
    pub fn format_message(&self, id: &str) -> String {
        self.catalog.format_message(id)
    }

    /// Translate block: always returns a displayable string
    pub async fn translate(&self, args: &TranslateArgs) -> String {
        match self.try_translate(args).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "translate block failed");
                render_error(&err)
            }
        }
    }

    async fn try_translate(&self, args: &TranslateArgs) -> TranslateResult<String> {
        let service = Service::from_menu_name(&args.service)
            .ok_or_else(|| TranslateError::UnsupportedService(args.service.clone()))?;
        let from = Language::from_menu_name(&args.from)
            .ok_or_else(|| TranslateError::UnknownLanguage(args.from.clone()))?;
        let to = Language::from_menu_name(&args.to)
            .ok_or_else(|| TranslateError::UnknownLanguage(args.to.clone()))?;

        debug!(service = %service, from = from.code(), to = to.code(), "dispatching translate request");

        match service {
            Service::Microsoft => self.microsoft.translate(&args.text, from, to).await,
            Service::DeepL => self.deepl.translate(&args.text, from, to).await,
            Service::Google => self.google.translate(&args.text, from, to).await,
            Service::Youdao => self.youdao.translate(&args.text, from, to).await,
        }
    }

    /// Set-API-key block: true when the service name is one of the four
    ///
    /// Lookup ignores case. Unknown names mutate nothing.
    pub fn set_api_key(&mut self, args: &SetApiKeyArgs) -> bool {
        match Service::from_name_case_insensitive(&args.service) {
            Some(Service::Microsoft) => {
                self.microsoft.set_api_key(args.key.clone());
                true
            }
            Some(Service::DeepL) => {
                self.deepl.set_api_key(args.key.clone());
                true
            }
            Some(Service::Google) => {
                self.google.set_api_key(args.key.clone());
                true
            }
            Some(Service::Youdao) => {
                self.youdao.set_api_key(args.key.clone());
                true
            }
            None => false,
        }
    }

    /// Detect-language block: always returns a displayable string
    pub async fn detect_language(&self, args: &DetectLanguageArgs) -> String {
        match self.youdao.detect(&args.text).await {
            Ok(code) => code,
            Err(err) => {
                warn!(error = %err, "detect-language block failed");
                "语言检测失败".to_string()
            }
        }
    }
}

impl Default for BetterTranslate {
    fn default() -> Self {
        Self::new(MessageCatalog::new())
    }
}

/// Render a typed error into the display string the host shows the user
fn render_error(err: &TranslateError) -> String {
    match err {
        TranslateError::UnsupportedService(_) => "不支持的翻译服务".to_string(),
        other => format!("翻译错误: {}", failure_text(other)),
    }
}

fn failure_text(err: &TranslateError) -> String {
    match err {
        TranslateError::UnknownLanguage(name) => format!("不支持的语言: {}", name),
        TranslateError::MissingApiKey(service) => {
            format!("请先设置{} API密钥", service.menu_name())
        }
        // DeepL failures surface their underlying reason
        TranslateError::ServiceUnavailable {
            service: Service::DeepL,
            reason,
        } => reason.clone(),
        TranslateError::UnexpectedResponse {
            service: Service::DeepL,
            detail,
        } => detail.clone(),
        // The other providers collapse into a single unavailable message
        TranslateError::ServiceUnavailable { service, .. }
        | TranslateError::UnexpectedResponse { service, .. } => {
            format!("{}翻译服务暂时不可用", display_label(*service))
        }
        TranslateError::DetectionFailed(_) => "语言检测失败".to_string(),
        TranslateError::UnsupportedService(_) => "不支持的翻译服务".to_string(),
    }
}

fn display_label(service: Service) -> &'static str {
    match service {
        Service::Youdao => "有道",
        other => other.menu_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_args(service: &str, text: &str, from: &str, to: &str) -> TranslateArgs {
        TranslateArgs {
            service: service.to_string(),
            text: text.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unsupported_service_returns_fixed_string() {
        let extension = BetterTranslate::default();
        let result = extension
            .translate(&translate_args("Baidu", "Hello World", "英语", "简体中文"))
            .await;
        assert_eq!(result, "不支持的翻译服务");
    }

    #[tokio::test]
    async fn test_unsupported_service_is_independent_of_other_arguments() {
        let extension = BetterTranslate::default();
        let result = extension
            .translate(&translate_args("Baidu", "", "nonsense", ""))
            .await;
        assert_eq!(result, "不支持的翻译服务");
    }

    #[tokio::test]
    async fn test_unknown_language_fails_closed() {
        let extension = BetterTranslate::default();
        let result = extension
            .translate(&translate_args("Google", "Hello World", "泰语", "简体中文"))
            .await;
        assert_eq!(result, "翻译错误: 不支持的语言: 泰语");
    }

    #[tokio::test]
    async fn test_deepl_without_key_reports_missing_key() {
        let extension = BetterTranslate::default();
        let result = extension
            .translate(&translate_args("DeepL", "Hello World", "英语", "简体中文"))
            .await;
        assert_eq!(result, "翻译错误: 请先设置DeepL API密钥");
    }

    #[test]
    fn test_set_api_key_is_case_insensitive() {
        let mut extension = BetterTranslate::default();
        assert!(extension.set_api_key(&SetApiKeyArgs {
            service: "deepl".to_string(),
            key: "k1".to_string(),
        }));
        assert!(extension.set_api_key(&SetApiKeyArgs {
            service: "MICROSOFT".to_string(),
            key: "k2".to_string(),
        }));
        assert!(extension.set_api_key(&SetApiKeyArgs {
            service: "Google".to_string(),
            key: "k3".to_string(),
        }));
        assert!(extension.set_api_key(&SetApiKeyArgs {
            service: "youdao".to_string(),
            key: "k4".to_string(),
        }));
    }

    #[test]
    fn test_set_api_key_rejects_unknown_service() {
        let mut extension = BetterTranslate::default();
        assert!(!extension.set_api_key(&SetApiKeyArgs {
            service: "Baidu".to_string(),
            key: "k".to_string(),
        }));
    }

    #[test]
    fn test_args_deserialize_from_host_records() {
        let args: TranslateArgs = serde_json::from_str(
            r#"{"SERVICE":"Google","TEXT":"Hello World","FROM":"英语","TO":"简体中文"}"#,
        )
        .unwrap();
        assert_eq!(args.service, "Google");
        assert_eq!(args.text, "Hello World");

        let args: SetApiKeyArgs =
            serde_json::from_str(r#"{"SERVICE":"DeepL","KEY":"secret"}"#).unwrap();
        assert_eq!(args.key, "secret");

        let args: DetectLanguageArgs =
            serde_json::from_str(r#"{"TEXT":"Hello World"}"#).unwrap();
        assert_eq!(args.text, "Hello World");
    }

    #[test]
    fn test_render_error_preserves_display_strings() {
        assert_eq!(
            render_error(&TranslateError::UnsupportedService("Baidu".to_string())),
            "不支持的翻译服务"
        );
        assert_eq!(
            render_error(&TranslateError::MissingApiKey(Service::DeepL)),
            "翻译错误: 请先设置DeepL API密钥"
        );
        assert_eq!(
            render_error(&TranslateError::ServiceUnavailable {
                service: Service::Microsoft,
                reason: "HTTP 500".to_string(),
            }),
            "翻译错误: Microsoft翻译服务暂时不可用"
        );
        assert_eq!(
            render_error(&TranslateError::UnexpectedResponse {
                service: Service::Youdao,
                detail: "missing field".to_string(),
            }),
            "翻译错误: 有道翻译服务暂时不可用"
        );
        assert_eq!(
            render_error(&TranslateError::ServiceUnavailable {
                service: Service::DeepL,
                reason: "HTTP 403".to_string(),
            }),
            "翻译错误: HTTP 403"
        );
    }

    #[test]
    fn test_get_info_uses_catalog_locale() {
        let extension = BetterTranslate::with_locale("zh-cn");
        assert_eq!(extension.get_info().name, "更好的翻译");

        let extension = BetterTranslate::default();
        assert_eq!(extension.get_info().name, "Better Translate");
    }
}
