//! Device fingerprint components.

use crate::keyboard::KeyboardLayout;
use serde::{Deserialize, Serialize};

/// Device and environment signals used for cross-platform install matching.
///
/// All fields are optional; provide what is available on your platform.
/// Empty strings, zero numbers and empty collections are omitted from the
/// payload rather than sent as zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintComponents {
    /// Device model, e.g. "Dell XPS 15".
    pub device_model: String,
    /// "desktop", "mobile", "console", ...
    pub device_type: String,
    /// Device manufacturer, e.g. "Dell".
    pub device_manufacturer: String,

    /// Operating system name, e.g. "Windows".
    pub os_name: String,
    /// Operating system version, e.g. "10.0.22621".
    pub os_version: String,

    /// Primary display resolution as "WxH".
    pub display_resolution: String,
    /// Display density in DPI (0 = unknown).
    pub display_density: u32,

    /// CPU brand string.
    pub cpu_model: String,
    /// Physical core count (0 = unknown).
    pub cpu_cores: u32,
    /// GPU model, e.g. "NVIDIA RTX 3060 6GB".
    pub gpu_model: String,
    /// Total RAM in MiB (0 = unknown).
    pub memory_mb: u32,

    /// BCP-47 language tag, e.g. "en-US".
    pub language: String,
    /// IANA timezone, e.g. "America/New_York".
    pub timezone: String,
    /// Region code, e.g. "US".
    pub region: String,

    /// Client-hint form factors, e.g. `["Desktop"]`.
    pub form_factors: Vec<String>,
    /// Client-hint architecture, e.g. "x86".
    pub architecture: String,
    /// Client-hint bitness, e.g. "64".
    pub bitness: String,
    /// Client-hint platform version.
    pub platform_version: String,
    /// 32-bit process running on a 64-bit OS.
    pub is_wow64: bool,

    /// Physical key code to produced character.
    pub keyboard_layout: KeyboardLayout,

    /// IDFA/AAID if available.
    pub advertising_id: String,
}
