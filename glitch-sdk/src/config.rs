//! Client configuration.

use crate::error::{SdkError, SdkResult};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Production API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://api.glitch.fun";

/// Configuration for [`GlitchClient`](crate::GlitchClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API origin the `/api/titles/...` paths are appended to.
    pub api_base_url: String,
    /// Request timeout in seconds. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: concat!("glitch-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Default config pointed at another origin (staging, a mock server).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the base URL without trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] if the URL does not parse or is not
    /// http(s).
    pub fn base_url(&self) -> SdkResult<String> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| SdkError::Config(format!("invalid api_base_url {trimmed:?}: {e}")))?;

        match url.scheme() {
            "http" | "https" => Ok(trimmed.to_string()),
            other => Err(SdkError::Config(format!(
                "unsupported api_base_url scheme: {other}"
            ))),
        }
    }
}
