//! Localized block labels
//!
//! The host renders block text from a per-locale message catalog. The
//! catalog is the "format message" capability the extension factory takes:
//! lookup by message id in the active locale, falling back to the id
//! itself when either the locale or the key is unknown.

use std::collections::HashMap;

/// Label set for a single locale, keyed by message id
pub struct LocalizedLabels(pub HashMap<String, String>);

impl LocalizedLabels {
    pub fn new() -> Self {
        LocalizedLabels(HashMap::new())
    }

    pub fn with_label(&mut self, id: &str, label: &str) -> &mut Self {
        self.0.insert(id.to_owned(), label.to_owned());
        self
    }

    pub fn get_label(&self, id: &str) -> Option<&String> {
        self.0.get(id)
    }
}

impl Default for LocalizedLabels {
    fn default() -> Self {
        Self::new()
    }
}

/// Message catalog holding the label sets for every supported locale
///
/// Locales are normalized to lowercase on insert and lookup, so "zh-CN"
/// and "zh-cn" address the same label set.
pub struct MessageCatalog {
    labels: HashMap<String, LocalizedLabels>,
    locale: String,
}

impl MessageCatalog {
    /// Catalog with the built-in `zh-cn` and `en` label sets, locale `en`
    pub fn new() -> Self {
        let mut zh_cn = LocalizedLabels::new();
        zh_cn
            .with_label("BetterTranslate.extensionName", "更好的翻译")
            .with_label(
                "BetterTranslate.translate",
                "使用[SERVICE]翻译[TEXT]从[FROM]到[TO]",
            )
            .with_label("BetterTranslate.setApiKey", "设置[SERVICE]的API密钥为[KEY]")
            .with_label("BetterTranslate.detectLanguage", "检测文本[TEXT]的语言");

        let mut en = LocalizedLabels::new();
        en.with_label("BetterTranslate.extensionName", "Better Translate")
            .with_label(
                "BetterTranslate.translate",
                "translate[TEXT]from[FROM]to[TO]using[SERVICE]",
            )
            .with_label("BetterTranslate.setApiKey", "set[SERVICE]API key to[KEY]")
            .with_label("BetterTranslate.detectLanguage", "detect language of[TEXT]");

        let mut labels = HashMap::new();
        labels.insert("zh-cn".to_string(), zh_cn);
        labels.insert("en".to_string(), en);

        MessageCatalog {
            labels,
            locale: "en".to_string(),
        }
    }

    pub fn with_locale(&mut self, locale: &str) -> &mut Self {
        self.locale = locale.to_lowercase();
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn with_labels_for_locale(&mut self, locale: &str, labels: LocalizedLabels) -> &mut Self {
        self.labels.insert(locale.to_lowercase(), labels);
        self
    }

    /// Look up a message id in the active locale, falling back to the id
    pub fn format_message(&self, id: &str) -> String {
        if let Some(labels) = self.labels.get(&self.locale) {
            return labels.get_label(id).cloned().unwrap_or_else(|| id.to_string());
        }
        id.to_string()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_en_labels() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.format_message("BetterTranslate.extensionName"),
            "Better Translate"
        );
        assert_eq!(
            catalog.format_message("BetterTranslate.translate"),
            "translate[TEXT]from[FROM]to[TO]using[SERVICE]"
        );
    }

    #[test]
    fn test_builtin_zh_cn_labels() {
        let mut catalog = MessageCatalog::new();
        catalog.with_locale("zh-CN");
        assert_eq!(
            catalog.format_message("BetterTranslate.extensionName"),
            "更好的翻译"
        );
        assert_eq!(
            catalog.format_message("BetterTranslate.setApiKey"),
            "设置[SERVICE]的API密钥为[KEY]"
        );
    }

    #[test]
    fn test_unknown_key_falls_back_to_id() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.format_message("BetterTranslate.nonexistent"),
            "BetterTranslate.nonexistent"
        );
    }

    #[test]
    fn test_unknown_locale_falls_back_to_id() {
        let mut catalog = MessageCatalog::new();
        catalog.with_locale("fr");
        assert_eq!(
            catalog.format_message("BetterTranslate.extensionName"),
            "BetterTranslate.extensionName"
        );
    }

    #[test]
    fn test_locale_is_lowercased() {
        let mut catalog = MessageCatalog::new();
        catalog.with_locale("ZH-CN");
        assert_eq!(catalog.locale(), "zh-cn");
    }

    #[test]
    fn test_custom_locale_labels() {
        let mut labels = LocalizedLabels::new();
        labels.with_label("BetterTranslate.extensionName", "Meilleure traduction");

        let mut catalog = MessageCatalog::new();
        catalog
            .with_labels_for_locale("fr", labels)
            .with_locale("fr");
        assert_eq!(
            catalog.format_message("BetterTranslate.extensionName"),
            "Meilleure traduction"
        );
    }
}
