//! Multi-provider translation blocks for Scratch-style runtimes
//!
//! This crate implements one extension for a block-based visual
//! programming host. It contributes three blocks — translate text with a
//! selectable provider, store a provider API key, and detect a text's
//! language — each a thin adapter over an outbound HTTP call to a
//! third-party translation service.
//!
//! # Example
//!
//! ```ignore
//! use better_translate::{BetterTranslate, SetApiKeyArgs, TranslateArgs};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut extension = BetterTranslate::with_locale("en");
//!
//!     extension.set_api_key(&SetApiKeyArgs {
//!         service: "DeepL".to_string(),
//!         key: "your-key".to_string(),
//!     });
//!
//!     let result = extension
//!         .translate(&TranslateArgs {
//!             service: "DeepL".to_string(),
//!             text: "Hello World".to_string(),
//!             from: "英语".to_string(),
//!             to: "简体中文".to_string(),
//!         })
//!         .await;
//!
//!     // Either the translation or a displayable error message;
//!     // the block never raises.
//!     println!("{}", result);
//! }
//! ```

pub mod descriptor;
pub mod error;
pub mod extension;
pub mod language;
pub mod messages;
pub mod providers;
pub mod service;


// Re-export main types for convenient access
pub use descriptor::{ArgumentInfo, BlockInfo, BlockType, ExtensionInfo, MenuInfo, Menus};
pub use error::{TranslateError, TranslateResult};
pub use extension::{BetterTranslate, DetectLanguageArgs, SetApiKeyArgs, TranslateArgs};
pub use language::Language;
pub use messages::{LocalizedLabels, MessageCatalog};
pub use providers::{
    DeepLProvider, GoogleProvider, MicrosoftProvider, MockMode, MockProvider, TranslationProvider,
    YoudaoProvider,
};
pub use service::Service;
