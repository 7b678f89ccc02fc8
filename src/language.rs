//! Static language table for the block menus
//!
//! The language menu offers a fixed set of eight languages. Menu entries
//! are the human-readable names shown in the UI; each maps to the
//! two-letter code the providers expect. Codes are looked up, never
//! computed, and unknown menu names are rejected rather than forwarded.

/// One of the eight languages offered by the language menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    SimplifiedChinese,
    English,
    Japanese,
    Korean,
    French,
    German,
    Spanish,
    Russian,
}

impl Language {
    /// Entries in language-menu order
    pub const ALL: [Language; 8] = [
        Language::SimplifiedChinese,
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Russian,
    ];

    /// Two-letter code sent to the providers
    pub fn code(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "zh",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Russian => "ru",
        }
    }

    /// Human-readable name shown in the language menu
    pub fn menu_name(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "简体中文",
            Language::English => "英语",
            Language::Japanese => "日语",
            Language::Korean => "韩语",
            Language::French => "法语",
            Language::German => "德语",
            Language::Spanish => "西班牙语",
            Language::Russian => "俄语",
        }
    }

    /// Resolve a menu name to a language
    ///
    /// Returns `None` for names outside the table; callers reject those
    /// instead of sending an unresolved code to a provider.
    pub fn from_menu_name(name: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.menu_name() == name)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
