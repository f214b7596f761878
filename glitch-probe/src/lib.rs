//! System fingerprint collection.
//!
//! Queries the local machine for the signals that fill a
//! [`FingerprintComponents`]: OS, CPU, memory, display, locale, timezone and
//! desktop client hints.
//!
//! # Contract
//!
//! - **Best effort**: every query is independent; whatever cannot be
//!   determined is left at its default.
//! - **Infallible**: nothing here returns an error or panics. A failed read of
//!   `/proc`, a missing command or an unsupported platform all degrade to
//!   "field absent".
//! - **Local only**: no network access.
//!
//! Platform differences live behind the [`SystemProbe`] trait. [`HostProbe`]
//! is the implementation for the current build target.

mod environment;
mod host;
mod probe;

pub use environment::{timezone_from_zoneinfo_path, Locale};
pub use host::{client_hint_architecture, normalize_resolution, os_bitness, HostProbe};
pub use probe::{SystemProbe, DEFAULT_DEVICE_TYPE, DEFAULT_LANGUAGE};

use glitch_types::{FingerprintComponents, KeyboardLayout};

/// Collects a fingerprint for the current machine.
///
/// The keyboard layout is not included; add it with
/// [`generate_keyboard_layout`] when the game wants it reported.
#[must_use]
pub fn collect_system_fingerprint() -> FingerprintComponents {
    HostProbe::new().collect()
}

/// Maps every canonical key code to the character it produces under the
/// active layout, falling back to US-QWERTY where the platform cannot tell.
#[must_use]
pub fn generate_keyboard_layout() -> KeyboardLayout {
    HostProbe::new().generate_keyboard_layout()
}
