use crate::service::Service;

/// Error types for the translation extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Service name outside the closed provider set
    UnsupportedService(String),
    /// Menu language name with no entry in the language table
    UnknownLanguage(String),
    /// Provider requires an API key and none is stored
    MissingApiKey(Service),
    /// Transport failure: network unreachable or non-2xx status
    ServiceUnavailable { service: Service, reason: String },
    /// Response arrived but did not match the documented shape
    UnexpectedResponse { service: Service, detail: String },
    /// Language detection failure of any kind
    DetectionFailed(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::UnsupportedService(name) => {
                write!(f, "Unsupported translation service: {}", name)
            }
            TranslateError::UnknownLanguage(name) => write!(f, "Unknown language name: {}", name),
            TranslateError::MissingApiKey(service) => {
                write!(f, "No API key stored for {}", service)
            }
            TranslateError::ServiceUnavailable { service, reason } => {
                write!(f, "{} is unavailable: {}", service, reason)
            }
            TranslateError::UnexpectedResponse { service, detail } => {
                write!(f, "Unexpected response from {}: {}", service, detail)
            }
            TranslateError::DetectionFailed(msg) => write!(f, "Language detection failed: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
