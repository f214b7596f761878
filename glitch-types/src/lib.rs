//! Core data models for the Glitch telemetry SDK.
//!
//! This crate defines the value objects a game fills in before reporting to
//! the analytics backend:
//! - Device fingerprint components (install enrichment)
//! - Install requests carrying a fingerprint
//! - Purchase / revenue events
//! - The canonical keyboard key set and its US-QWERTY fallback
//!
//! Every field on the records is optional. An empty string, a zero number or
//! an empty collection means "not known" and is left out of the payload.
//! The wire format itself lives in `glitch-sdk`.

mod fingerprint;
mod install;
mod keyboard;
mod purchase;

pub use fingerprint::FingerprintComponents;
pub use install::FingerprintInstall;
pub use keyboard::{qwerty_layout, CanonicalKey, KeyboardLayout};
pub use purchase::PurchaseData;
