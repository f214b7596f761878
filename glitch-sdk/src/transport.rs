//! Blocking HTTP transport.
//!
//! One POST per call: JSON body, bearer token, no retries. The response body
//! is handed back untouched together with its status code.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::borrow::Cow;
use std::time::Duration;
use tracing::{debug, warn};

/// A raw API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes, exactly as received.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-2xx response into [`SdkError::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Status`] carrying the status and body when the
    /// status is not 2xx.
    pub fn error_for_status(self) -> SdkResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SdkError::Status {
                status: self.status,
                body: self.text().into_owned(),
            })
        }
    }

    /// Body as text. Invalid UTF-8 sequences are shown as U+FFFD; use
    /// [`ApiResponse::body`] for the exact bytes.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Sends JSON bodies over a blocking `reqwest` client.
///
/// Must not be created, used or dropped on an async runtime thread; wrap
/// calls in `spawn_blocking` there.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the timeout and user agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::ClientInit`] if the TLS backend or client cannot
    /// be initialized.
    pub fn new(config: &ClientConfig) -> SdkResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| SdkError::ClientInit(e.to_string()))?;

        Ok(Self { client })
    }

    /// POSTs `body` to `url` with `Authorization: Bearer <token>`.
    ///
    /// Any response, whatever its status, is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Transport`] if no response arrives or its body
    /// cannot be read.
    pub fn post_json(&self, url: &str, bearer_token: &str, body: String) -> SdkResult<ApiResponse> {
        debug!(url, bytes = body.len(), "POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(bearer_token)
            .body(body)
            .send()
            .map_err(|e| {
                let err = SdkError::from(e);
                warn!(url, error = %err, "request failed");
                err
            })?;

        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        if (200..300).contains(&status) {
            debug!(url, status, "response received");
        } else {
            warn!(url, status, "server returned error status");
        }

        Ok(ApiResponse { status, body })
    }
}

/// One-off POST with a client built from [`ClientConfig::default`].
///
/// # Errors
///
/// See [`HttpTransport::new`] and [`HttpTransport::post_json`].
pub fn post_json(url: &str, bearer_token: &str, body: String) -> SdkResult<ApiResponse> {
    HttpTransport::new(&ClientConfig::default())?.post_json(url, bearer_token, body)
}
