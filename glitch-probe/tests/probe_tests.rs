use glitch_probe::{
    collect_system_fingerprint, generate_keyboard_layout, HostProbe, Locale, SystemProbe,
    DEFAULT_DEVICE_TYPE, DEFAULT_LANGUAGE,
};
use glitch_types::{CanonicalKey, KeyboardLayout};
use pretty_assertions::assert_eq;

/// A probe that knows nothing.
struct BlindProbe;

impl SystemProbe for BlindProbe {}

/// A probe with fixed answers, some of them blank.
struct FixedProbe;

impl SystemProbe for FixedProbe {
    fn os_name(&self) -> Option<String> {
        Some("Linux".into())
    }

    fn os_version(&self) -> Option<String> {
        Some("6.8.0-45-generic\n".into())
    }

    fn device_type(&self) -> Option<String> {
        Some("console".into())
    }

    fn cpu_model(&self) -> Option<String> {
        Some("   ".into())
    }

    fn cpu_cores(&self) -> Option<u32> {
        Some(8)
    }

    fn memory_mb(&self) -> Option<u32> {
        Some(16_000)
    }

    fn display_resolution(&self) -> Option<String> {
        Some("2560x1440".into())
    }

    fn form_factors(&self) -> Vec<String> {
        vec!["Desktop".into(), String::new()]
    }

    fn architecture(&self) -> Option<String> {
        Some("arm".into())
    }

    fn bitness(&self) -> Option<String> {
        Some("64".into())
    }

    fn is_wow64(&self) -> bool {
        true
    }

    fn locale(&self) -> Option<Locale> {
        Locale::parse_posix("de_AT.UTF-8")
    }

    fn timezone(&self) -> Option<String> {
        Some("Europe/Vienna".into())
    }

    fn keyboard_layout(&self) -> Option<KeyboardLayout> {
        Some(KeyboardLayout::from([("KeyY".to_string(), "z".to_string())]))
    }
}

// ── Trait defaults ──────────────────────────────────────────────

#[test]
fn blind_probe_collects_only_defaults() {
    let fp = BlindProbe.collect();
    assert_eq!(fp.device_type, DEFAULT_DEVICE_TYPE);
    assert_eq!(fp.language, DEFAULT_LANGUAGE);
    assert!(fp.os_name.is_empty());
    assert!(fp.os_version.is_empty());
    assert!(fp.platform_version.is_empty());
    assert!(fp.cpu_model.is_empty());
    assert_eq!(fp.cpu_cores, 0);
    assert_eq!(fp.memory_mb, 0);
    assert!(fp.form_factors.is_empty());
    assert!(fp.region.is_empty());
    assert!(fp.timezone.is_empty());
    assert!(!fp.is_wow64);
    assert!(fp.keyboard_layout.is_empty());
}

#[test]
fn blind_probe_falls_back_to_qwerty() {
    let layout = BlindProbe.generate_keyboard_layout();
    assert_eq!(layout.len(), CanonicalKey::ALL.len());
    assert_eq!(layout["KeyQ"], "q");
}

#[test]
fn fixed_probe_fields_flow_into_fingerprint() {
    let fp = FixedProbe.collect();
    assert_eq!(fp.os_name, "Linux");
    assert_eq!(fp.os_version, "6.8.0-45-generic");
    assert_eq!(fp.platform_version, "6.8.0-45-generic");
    assert_eq!(fp.device_type, "console");
    assert_eq!(fp.cpu_cores, 8);
    assert_eq!(fp.memory_mb, 16_000);
    assert_eq!(fp.display_resolution, "2560x1440");
    assert_eq!(fp.form_factors, vec!["Desktop".to_string()]);
    assert_eq!(fp.architecture, "arm");
    assert_eq!(fp.bitness, "64");
    assert!(fp.is_wow64);
    assert_eq!(fp.language, "de-AT");
    assert_eq!(fp.region, "AT");
    assert_eq!(fp.timezone, "Europe/Vienna");
}

#[test]
fn blank_answers_are_absent() {
    let fp = FixedProbe.collect();
    assert!(fp.cpu_model.is_empty());
}

#[test]
fn collect_leaves_layout_to_caller() {
    let fp = FixedProbe.collect();
    assert!(fp.keyboard_layout.is_empty());
}

#[test]
fn probe_layout_wins_over_fallback() {
    let layout = FixedProbe.generate_keyboard_layout();
    assert_eq!(layout.len(), 1);
    assert_eq!(layout["KeyY"], "z");
}

// ── Host probe ──────────────────────────────────────────────────

#[test]
fn host_fingerprint_has_defaults() {
    let fp = collect_system_fingerprint();
    assert!(!fp.device_type.is_empty());
    assert!(!fp.language.is_empty());
    assert!(!fp.architecture.is_empty());
    assert!(fp.bitness == "64" || fp.bitness == "32");
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
#[test]
fn host_fingerprint_on_desktop_os() {
    let fp = collect_system_fingerprint();
    assert!(["Linux", "MacOS", "Windows"].contains(&fp.os_name.as_str()));
    assert_eq!(fp.form_factors, vec!["Desktop".to_string()]);
}

#[test]
fn host_fingerprint_is_stable() {
    let fp1 = collect_system_fingerprint();
    let fp2 = collect_system_fingerprint();
    assert_eq!(fp1.os_name, fp2.os_name);
    assert_eq!(fp1.cpu_model, fp2.cpu_model);
    assert_eq!(fp1.memory_mb, fp2.memory_mb);
}

#[test]
fn host_keyboard_layout_covers_canonical_keys() {
    let layout = generate_keyboard_layout();
    for key in CanonicalKey::ALL {
        let value = layout.get(key.code());
        assert!(
            value.is_some_and(|v| !v.is_empty()),
            "missing {}",
            key.code()
        );
    }
}

#[test]
fn host_probe_reusable() {
    let probe = HostProbe::new();
    let first = probe.collect();
    let second = probe.collect();
    assert_eq!(first.cpu_cores, second.cpu_cores);
}
