//! Provider strategies for the translation services
//!
//! Each provider performs exactly one outbound HTTP request per call and
//! reshapes the response into a plain string. Providers share the
//! `TranslationProvider` trait; the extension dispatches to a concrete
//! provider by `Service` variant. Every provider keeps a `base_url`
//! override so tests can point it at a local mock server, and one
//! optional credential slot written by the set-API-key block.

use crate::error::TranslateResult;
use crate::language::Language;
use async_trait::async_trait;

pub mod deepl;
pub mod google;
pub mod microsoft;
pub mod mock;
pub mod youdao;

pub use deepl::DeepLProvider;
pub use google::GoogleProvider;
pub use microsoft::MicrosoftProvider;
pub use mock::{MockMode, MockProvider};
pub use youdao::YoudaoProvider;

/// Interface of one translation provider
///
/// Implementations suspend on a single network round trip; there are no
/// retries and no timeout, so the caller is suspended until the provider
/// answers or the connection fails.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `from` to `to`, returning the plain result
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> TranslateResult<String>;

    /// Name of this provider, for logging
    fn name(&self) -> &str;
}
