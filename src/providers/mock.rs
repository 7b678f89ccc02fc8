//! Mock provider for testing
//!
//! A deterministic, network-free provider for exercising dispatch and
//! display paths without API access.

use crate::error::{TranslateError, TranslateResult};
use crate::language::Language;
use crate::providers::TranslationProvider;
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock translation modes for different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_zh"
    Suffix,

    /// Predefined mappings: (text, target code) → translation.
    /// Unmapped inputs fall back to the suffix form.
    Mappings(HashMap<(String, String), String>),

    /// Fail with the given error
    Error(TranslateError),

    /// Return the input unchanged
    Echo,
}

#[derive(Debug, Clone)]
pub struct MockProvider {
    mode: MockMode,
}

impl MockProvider {
    pub fn new(mode: MockMode) -> Self {
        Self { mode }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        to: Language,
    ) -> TranslateResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, to.code())),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), to.code().to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, to.code())))
            }
            MockMode::Error(err) => Err(err.clone()),
            MockMode::Echo => Ok(text.to_string()),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
