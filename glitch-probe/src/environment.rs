//! Locale and timezone detection from the process environment.

use std::env;
use std::path::Path;

/// Locale environment variables, in POSIX precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A user locale split into language and optional region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Lowercase ISO 639 language code, e.g. "en".
    pub language: String,
    /// Uppercase region code, e.g. "US".
    pub region: Option<String>,
}

impl Locale {
    /// Parses a POSIX locale name such as `en_US.UTF-8` or `de_DE@euro`.
    ///
    /// Returns `None` for the `C` and `POSIX` locales and for anything that
    /// does not start with an alphabetic language code.
    #[must_use]
    pub fn parse_posix(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        // Strip ".codeset" and "@modifier".
        let name = raw
            .split(['.', '@'])
            .next()
            .unwrap_or_default();

        if name.is_empty() || name == "C" || name == "POSIX" {
            return None;
        }

        let mut parts = name.split(['_', '-']);
        let language = parts.next()?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        let region = parts
            .next()
            .filter(|r| !r.is_empty() && r.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(str::to_ascii_uppercase);

        Some(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// Reads the first set locale variable (`LC_ALL`, `LC_MESSAGES`, `LANG`).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        LOCALE_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .and_then(|value| Self::parse_posix(&value))
    }

    /// Returns the BCP-47 tag, e.g. "en-US", or just the language.
    #[must_use]
    pub fn language_tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

/// Extracts an IANA zone name from a path into a zoneinfo database,
/// e.g. `/usr/share/zoneinfo/America/New_York` gives `America/New_York`.
#[must_use]
pub fn timezone_from_zoneinfo_path(path: &Path) -> Option<String> {
    let path = path.to_str()?;
    let (_, zone) = path.split_once("zoneinfo/")?;
    let zone = zone.trim_matches('/');
    if zone.is_empty() {
        None
    } else {
        Some(zone.to_string())
    }
}

/// Reads the timezone from `TZ`, then from the `/etc/localtime` symlink.
pub(crate) fn timezone_from_env() -> Option<String> {
    if let Ok(tz) = env::var("TZ") {
        let tz = tz.trim().trim_start_matches(':');
        if tz.starts_with('/') {
            if let Some(zone) = timezone_from_zoneinfo_path(Path::new(tz)) {
                return Some(zone);
            }
        } else if !tz.is_empty() {
            return Some(tz.to_string());
        }
    }

    #[cfg(unix)]
    {
        std::fs::read_link("/etc/localtime")
            .ok()
            .and_then(|target| timezone_from_zoneinfo_path(&target))
    }

    #[cfg(not(unix))]
    {
        None
    }
}
