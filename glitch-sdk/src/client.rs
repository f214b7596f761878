//! Glitch API entry points.

use crate::config::ClientConfig;
use crate::encode::{fingerprint_install_to_json, install_to_json, purchase_to_json};
use crate::error::SdkResult;
use crate::transport::{ApiResponse, HttpTransport};
use glitch_types::{FingerprintInstall, PurchaseData};
use tracing::info;

const INSTALLS: &str = "installs";
const PURCHASES: &str = "purchases";

/// Client for the title-scoped install and purchase endpoints.
///
/// Every call is a single blocking POST. Nothing is retried, queued or
/// reordered; send the install before its purchases and wait for the
/// install's response to learn the `game_install_id`.
#[derive(Debug, Clone)]
pub struct GlitchClient {
    base_url: String,
    transport: HttpTransport,
}

impl GlitchClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        let base_url = config.base_url()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self {
            base_url,
            transport,
        })
    }

    /// The API origin requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/titles/{title_id}/installs` with just the install id and
    /// platform.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Transport`](crate::SdkError::Transport) if the
    /// request fails before a response arrives.
    pub fn create_install_record(
        &self,
        auth_token: &str,
        title_id: &str,
        user_install_id: &str,
        platform: &str,
    ) -> SdkResult<ApiResponse> {
        let body = install_to_json(user_install_id, platform)?;
        let response = self
            .transport
            .post_json(&self.title_url(title_id, INSTALLS), auth_token, body)?;
        info!(title_id, platform, status = response.status, "install record sent");
        Ok(response)
    }

    /// `POST /api/titles/{title_id}/installs` with fingerprint components.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Transport`](crate::SdkError::Transport) if the
    /// request fails before a response arrives.
    pub fn create_install_record_with_fingerprint(
        &self,
        auth_token: &str,
        title_id: &str,
        install: &FingerprintInstall,
    ) -> SdkResult<ApiResponse> {
        let body = fingerprint_install_to_json(install)?;
        let response = self
            .transport
            .post_json(&self.title_url(title_id, INSTALLS), auth_token, body)?;
        info!(
            title_id,
            platform = %install.platform,
            status = response.status,
            "fingerprinted install record sent"
        );
        Ok(response)
    }

    /// `POST /api/titles/{title_id}/purchases`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Transport`](crate::SdkError::Transport) if the
    /// request fails before a response arrives.
    pub fn record_purchase(
        &self,
        auth_token: &str,
        title_id: &str,
        purchase: &PurchaseData,
    ) -> SdkResult<ApiResponse> {
        let body = purchase_to_json(purchase)?;
        let response = self
            .transport
            .post_json(&self.title_url(title_id, PURCHASES), auth_token, body)?;
        info!(title_id, status = response.status, "purchase sent");
        Ok(response)
    }

    fn title_url(&self, title_id: &str, resource: &str) -> String {
        format!(
            "{}/api/titles/{}/{}",
            self.base_url,
            urlencoding::encode(title_id),
            resource
        )
    }
}

/// [`GlitchClient::create_install_record`] against the production API with
/// a client built for this call only.
///
/// # Errors
///
/// See [`GlitchClient::new`] and [`GlitchClient::create_install_record`].
pub fn create_install_record(
    auth_token: &str,
    title_id: &str,
    user_install_id: &str,
    platform: &str,
) -> SdkResult<ApiResponse> {
    GlitchClient::new(ClientConfig::default())?.create_install_record(
        auth_token,
        title_id,
        user_install_id,
        platform,
    )
}

/// [`GlitchClient::create_install_record_with_fingerprint`] against the
/// production API with a client built for this call only.
///
/// # Errors
///
/// See [`GlitchClient::new`] and
/// [`GlitchClient::create_install_record_with_fingerprint`].
pub fn create_install_record_with_fingerprint(
    auth_token: &str,
    title_id: &str,
    install: &FingerprintInstall,
) -> SdkResult<ApiResponse> {
    GlitchClient::new(ClientConfig::default())?.create_install_record_with_fingerprint(
        auth_token, title_id, install,
    )
}

/// [`GlitchClient::record_purchase`] against the production API with a
/// client built for this call only.
///
/// # Errors
///
/// See [`GlitchClient::new`] and [`GlitchClient::record_purchase`].
pub fn record_purchase(
    auth_token: &str,
    title_id: &str,
    purchase: &PurchaseData,
) -> SdkResult<ApiResponse> {
    GlitchClient::new(ClientConfig::default())?.record_purchase(auth_token, title_id, purchase)
}
