//! The platform-neutral probe interface.

use crate::environment::Locale;
use glitch_types::{qwerty_layout, FingerprintComponents, KeyboardLayout};
use tracing::trace;

/// Device type reported when the probe cannot tell.
pub const DEFAULT_DEVICE_TYPE: &str = "desktop";

/// Language reported when no locale can be read.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// A source of local system facts.
///
/// Every query returns `None` (or an empty value) when the platform cannot
/// answer it, and all queries default to that, so a variant only overrides
/// what it knows. [`SystemProbe::collect`] assembles the results into a
/// fingerprint and never fails.
pub trait SystemProbe {
    fn os_name(&self) -> Option<String> {
        None
    }

    fn os_version(&self) -> Option<String> {
        None
    }

    fn device_type(&self) -> Option<String> {
        None
    }

    fn cpu_model(&self) -> Option<String> {
        None
    }

    fn cpu_cores(&self) -> Option<u32> {
        None
    }

    fn memory_mb(&self) -> Option<u32> {
        None
    }

    /// Primary display resolution as "WxH".
    fn display_resolution(&self) -> Option<String> {
        None
    }

    fn form_factors(&self) -> Vec<String> {
        Vec::new()
    }

    /// Client-hint architecture ("x86", "arm", ...).
    fn architecture(&self) -> Option<String> {
        None
    }

    fn bitness(&self) -> Option<String> {
        None
    }

    /// Client-hint platform version. Defaults to the OS version.
    fn platform_version(&self) -> Option<String> {
        self.os_version()
    }

    fn is_wow64(&self) -> bool {
        false
    }

    fn locale(&self) -> Option<Locale> {
        None
    }

    fn timezone(&self) -> Option<String> {
        None
    }

    /// The active layout over the canonical key set, if the platform exposes one.
    fn keyboard_layout(&self) -> Option<KeyboardLayout> {
        None
    }

    /// Assembles a fingerprint from every query this probe answers.
    ///
    /// Blank answers are treated as absent. `device_type` and `language`
    /// fall back to [`DEFAULT_DEVICE_TYPE`] and [`DEFAULT_LANGUAGE`].
    fn collect(&self) -> FingerprintComponents {
        let locale = self.locale();

        FingerprintComponents {
            device_type: non_blank(self.device_type())
                .unwrap_or_else(|| DEFAULT_DEVICE_TYPE.to_string()),
            os_name: field("os_name", self.os_name()),
            os_version: field("os_version", self.os_version()),
            display_resolution: field("display_resolution", self.display_resolution()),
            cpu_model: field("cpu_model", self.cpu_model()),
            cpu_cores: self.cpu_cores().unwrap_or_default(),
            memory_mb: self.memory_mb().unwrap_or_default(),
            language: locale
                .as_ref()
                .map(Locale::language_tag)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            region: field("region", locale.and_then(|l| l.region)),
            timezone: field("timezone", self.timezone()),
            form_factors: self
                .form_factors()
                .into_iter()
                .filter(|f| !f.trim().is_empty())
                .collect(),
            architecture: field("architecture", self.architecture()),
            bitness: field("bitness", self.bitness()),
            platform_version: field("platform_version", self.platform_version()),
            is_wow64: self.is_wow64(),
            ..FingerprintComponents::default()
        }
    }

    /// Returns the active keyboard layout, or US-QWERTY for every canonical
    /// key when the platform offers nothing.
    fn generate_keyboard_layout(&self) -> KeyboardLayout {
        match self.keyboard_layout() {
            Some(layout) if !layout.is_empty() => layout,
            _ => {
                trace!("no keyboard layout source, using QWERTY fallback");
                qwerty_layout()
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn field(name: &str, value: Option<String>) -> String {
    match non_blank(value) {
        Some(v) => v,
        None => {
            trace!(field = name, "fingerprint field unavailable");
            String::new()
        }
    }
}
