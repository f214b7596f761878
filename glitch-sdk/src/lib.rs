//! Install and revenue tracking for the Glitch analytics API.
//!
//! This crate handles:
//! - Install records, plain or enriched with a device fingerprint
//! - Purchase / revenue events linked to an install
//! - JSON encoding of both
//! - Blocking delivery over HTTPS with a bearer token
//!
//! # Design Principles
//!
//! - **One call, one request**: no retries, batching, queueing or offline
//!   buffering
//! - **Raw responses**: the body comes back verbatim with its status code;
//!   the SDK never parses it
//! - **Typed failures**: transport failures are [`SdkError::Transport`],
//!   HTTP error statuses are visible on [`ApiResponse`] and can be promoted
//!   with [`ApiResponse::error_for_status`]
//!
//! # Example
//!
//! ```no_run
//! use glitch_sdk::{collect_system_fingerprint, generate_keyboard_layout};
//! use glitch_sdk::{ClientConfig, FingerprintInstall, GlitchClient, PurchaseData};
//!
//! # fn main() -> glitch_sdk::SdkResult<()> {
//! let client = GlitchClient::new(ClientConfig::default())?;
//!
//! let mut fingerprint = collect_system_fingerprint();
//! fingerprint.keyboard_layout = generate_keyboard_layout();
//! let install = FingerprintInstall::new("player-42", "steam", fingerprint)
//!     .with_game_version("1.2.0");
//! let response = client.create_install_record_with_fingerprint("token", "title-uuid", &install)?;
//! println!("{}", response.text());
//!
//! let purchase = PurchaseData::new("install-uuid")
//!     .with_amount(9.99, "USD")
//!     .with_quantity(1);
//! client.record_purchase("token", "title-uuid", &purchase)?.error_for_status()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod encode;
mod error;
mod transport;

pub use client::{
    create_install_record, create_install_record_with_fingerprint, record_purchase, GlitchClient,
};
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use encode::{fingerprint_install_to_json, fingerprint_to_json, install_to_json, purchase_to_json};
pub use error::{SdkError, SdkResult};
pub use transport::{post_json, ApiResponse, HttpTransport};

pub use glitch_probe::{collect_system_fingerprint, generate_keyboard_layout, HostProbe, SystemProbe};
pub use glitch_types::{
    qwerty_layout, CanonicalKey, FingerprintComponents, FingerprintInstall, KeyboardLayout,
    PurchaseData,
};
