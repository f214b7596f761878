//! Shared test helpers for SDK tests.

#![allow(dead_code)]

use glitch_sdk::{FingerprintComponents, KeyboardLayout};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Runs blocking SDK calls off the async test runtime.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

/// A fingerprint with every field populated.
pub fn full_fingerprint() -> FingerprintComponents {
    FingerprintComponents {
        device_model: "Dell XPS 15".into(),
        device_type: "desktop".into(),
        device_manufacturer: "Dell".into(),
        os_name: "Windows".into(),
        os_version: "10.0.22621".into(),
        display_resolution: "1920x1080".into(),
        display_density: 96,
        cpu_model: "Intel i7".into(),
        cpu_cores: 14,
        gpu_model: "RTX 3060".into(),
        memory_mb: 16384,
        language: "en-US".into(),
        timezone: "America/New_York".into(),
        region: "US".into(),
        form_factors: vec!["Desktop".into()],
        architecture: "x86".into(),
        bitness: "64".into(),
        platform_version: "15.0.0".into(),
        is_wow64: false,
        keyboard_layout: KeyboardLayout::from([
            ("KeyQ".to_string(), "q".to_string()),
            ("KeyW".to_string(), "w".to_string()),
        ]),
        advertising_id: "ad-123".into(),
    }
}
