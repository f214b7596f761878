//! Probe for the machine the SDK is running on.
//!
//! CPU and memory come from `sysinfo`; the remaining facts are read from
//! platform-specific sources selected at compile time. On Windows the
//! keyboard layout is read through the Win32 keyboard API.

use crate::environment::{timezone_from_env, Locale};
use crate::probe::SystemProbe;
#[cfg(target_os = "windows")]
use glitch_types::KeyboardLayout;
use std::cell::OnceCell;
use std::env;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// [`SystemProbe`] for the current build target.
///
/// The `sysinfo` snapshot is taken on first use, so building a probe just to
/// ask for the keyboard layout costs nothing.
#[derive(Default)]
pub struct HostProbe {
    system: OnceCell<System>,
}

impl HostProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn system(&self) -> &System {
        self.system.get_or_init(|| {
            let refresh_kind = RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::everything())
                .with_memory(MemoryRefreshKind::everything());
            System::new_with_specifics(refresh_kind)
        })
    }
}

impl SystemProbe for HostProbe {
    fn os_name(&self) -> Option<String> {
        match env::consts::OS {
            "windows" => Some("Windows".to_string()),
            "macos" => Some("MacOS".to_string()),
            "linux" => Some("Linux".to_string()),
            _ => System::name(),
        }
    }

    fn os_version(&self) -> Option<String> {
        #[cfg(target_os = "windows")]
        {
            System::os_version()
        }

        #[cfg(not(target_os = "windows"))]
        {
            // Kernel release, as `uname -r` reports it.
            System::kernel_version()
        }
    }

    fn cpu_model(&self) -> Option<String> {
        self.system()
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
    }

    fn cpu_cores(&self) -> Option<u32> {
        self.system()
            .physical_core_count()
            .and_then(|cores| u32::try_from(cores).ok())
            .filter(|&cores| cores > 0)
    }

    fn memory_mb(&self) -> Option<u32> {
        let mb = self.system().total_memory() / BYTES_PER_MB;
        u32::try_from(mb).ok().filter(|&mb| mb > 0)
    }

    fn display_resolution(&self) -> Option<String> {
        let resolution = primary_display_resolution();
        if resolution.is_none() {
            debug!("display resolution unavailable");
        }
        resolution
    }

    fn form_factors(&self) -> Vec<String> {
        if cfg!(any(
            target_os = "windows",
            target_os = "macos",
            target_os = "linux"
        )) {
            vec!["Desktop".to_string()]
        } else {
            Vec::new()
        }
    }

    fn architecture(&self) -> Option<String> {
        Some(client_hint_architecture(env::consts::ARCH))
    }

    fn bitness(&self) -> Option<String> {
        Some(os_bitness(cfg!(target_pointer_width = "64"), self.is_wow64()).to_string())
    }

    fn is_wow64(&self) -> bool {
        #[cfg(all(target_os = "windows", target_pointer_width = "32"))]
        {
            // Set only for 32-bit processes on a 64-bit Windows.
            env::var_os("PROCESSOR_ARCHITEW6432").is_some()
        }

        #[cfg(not(all(target_os = "windows", target_pointer_width = "32")))]
        {
            false
        }
    }

    fn locale(&self) -> Option<Locale> {
        Locale::from_env()
    }

    fn timezone(&self) -> Option<String> {
        timezone_from_env()
    }

    #[cfg(target_os = "windows")]
    fn keyboard_layout(&self) -> Option<KeyboardLayout> {
        let layout = windows_keyboard::active_layout();
        if layout.is_none() {
            debug!("keyboard layout unavailable");
        }
        layout
    }
}

/// Bitness of the operating system, which a WOW64 process does not share.
#[must_use]
pub fn os_bitness(pointer_width_64: bool, is_wow64: bool) -> &'static str {
    if pointer_width_64 || is_wow64 { "64" } else { "32" }
}

/// Maps a Rust target architecture to its User-Agent client-hint value.
#[must_use]
pub fn client_hint_architecture(arch: &str) -> String {
    match arch {
        "x86" | "x86_64" => "x86".to_string(),
        "arm" | "aarch64" => "arm".to_string(),
        other => other.to_string(),
    }
}

/// Normalizes resolution text such as `1920x1080`, `2560 x 1600 Retina` or
/// `1920x1080i` to `WxH`.
#[must_use]
pub fn normalize_resolution(raw: &str) -> Option<String> {
    let (width, height) = raw.split_once('x')?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>()
        .parse()
        .ok()?;

    if width == 0 || height == 0 {
        return None;
    }
    Some(format!("{width}x{height}"))
}

/// Resolution of the first connected display.
fn primary_display_resolution() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        // First mode of the first connected DRM connector.
        let mut connectors: Vec<_> = std::fs::read_dir("/sys/class/drm")
            .ok()?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.join("status").is_file())
            .collect();
        connectors.sort();

        connectors.iter().find_map(|dir| {
            let status = std::fs::read_to_string(dir.join("status")).ok()?;
            if status.trim() != "connected" {
                return None;
            }
            let modes = std::fs::read_to_string(dir.join("modes")).ok()?;
            normalize_resolution(modes.lines().next()?)
        })
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("system_profiler")
            .arg("SPDisplaysDataType")
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| {
                output
                    .lines()
                    .filter_map(|l| l.trim().strip_prefix("Resolution:"))
                    .find_map(normalize_resolution)
            })
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("powershell")
            .args([
                "-NoProfile",
                "-Command",
                "Get-CimInstance Win32_VideoController | \
                 ForEach-Object { \"$($_.CurrentHorizontalResolution)x$($_.CurrentVerticalResolution)\" }",
            ])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| output.lines().find_map(normalize_resolution))
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

#[cfg(target_os = "windows")]
mod windows_keyboard {
    use glitch_types::{CanonicalKey, KeyboardLayout};
    use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
        GetKeyboardLayout, MAPVK_VSC_TO_VK, MapVirtualKeyExW, ToUnicodeEx,
    };

    /// Written for keys that produce no character under the active layout.
    const UNMAPPED: &str = "?";

    /// Keeps `ToUnicodeEx` from consuming pending dead-key state.
    const NO_STATE_CHANGE: u32 = 0x4;

    const BUFFER_LEN: usize = 8;

    /// Unshifted character of every canonical key under the calling
    /// thread's input locale. `None` if no key maps to a virtual key at all.
    pub(super) fn active_layout() -> Option<KeyboardLayout> {
        let hkl = unsafe { GetKeyboardLayout(0) };
        let key_state = [0u8; 256];
        let mut layout = KeyboardLayout::new();
        let mut resolved = 0usize;

        for key in CanonicalKey::ALL {
            let scan_code = key.scan_code();
            let virtual_key = unsafe { MapVirtualKeyExW(scan_code, MAPVK_VSC_TO_VK, hkl) };
            if virtual_key == 0 {
                layout.insert(key.code().to_string(), UNMAPPED.to_string());
                continue;
            }
            resolved += 1;

            let mut buffer = [0u16; BUFFER_LEN];
            let written = unsafe {
                ToUnicodeEx(
                    virtual_key,
                    scan_code,
                    key_state.as_ptr(),
                    buffer.as_mut_ptr(),
                    BUFFER_LEN as i32,
                    NO_STATE_CHANGE,
                    hkl,
                )
            };
            // Dead keys return -1 with their spacing form in the buffer.
            let len = match written {
                n if n < 0 => 1,
                n => usize::try_from(n).unwrap_or(0).min(BUFFER_LEN),
            };
            let produced = String::from_utf16(&buffer[..len])
                .ok()
                .filter(|text| !text.is_empty() && !text.chars().any(char::is_control))
                .unwrap_or_else(|| UNMAPPED.to_string());
            layout.insert(key.code().to_string(), produced);
        }

        (resolved > 0).then_some(layout)
    }
}
