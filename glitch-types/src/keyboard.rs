//! Canonical keyboard key set.
//!
//! Key codes follow the W3C `KeyboardEvent.code` names so that layouts
//! reported by native games line up with those reported by browsers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Physical key code to the character it produces, ordered by key code.
pub type KeyboardLayout = BTreeMap<String, String>;

/// A physical key whose produced character identifies the active layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalKey {
    KeyQ,
    KeyW,
    KeyE,
    KeyR,
    KeyT,
    KeyY,
    KeyU,
    KeyI,
    KeyO,
    KeyP,
    KeyA,
    KeyS,
    KeyD,
    KeyF,
    KeyG,
    KeyH,
    KeyJ,
    KeyK,
    KeyL,
    KeyZ,
    KeyX,
    KeyC,
    KeyV,
    KeyB,
    KeyN,
    KeyM,
    Backquote,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,
    Minus,
    Equal,
    BracketLeft,
    BracketRight,
    Backslash,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
}

impl CanonicalKey {
    /// Every canonical key, in keyboard row order.
    pub const ALL: [CanonicalKey; 47] = [
        Self::KeyQ,
        Self::KeyW,
        Self::KeyE,
        Self::KeyR,
        Self::KeyT,
        Self::KeyY,
        Self::KeyU,
        Self::KeyI,
        Self::KeyO,
        Self::KeyP,
        Self::KeyA,
        Self::KeyS,
        Self::KeyD,
        Self::KeyF,
        Self::KeyG,
        Self::KeyH,
        Self::KeyJ,
        Self::KeyK,
        Self::KeyL,
        Self::KeyZ,
        Self::KeyX,
        Self::KeyC,
        Self::KeyV,
        Self::KeyB,
        Self::KeyN,
        Self::KeyM,
        Self::Backquote,
        Self::Digit1,
        Self::Digit2,
        Self::Digit3,
        Self::Digit4,
        Self::Digit5,
        Self::Digit6,
        Self::Digit7,
        Self::Digit8,
        Self::Digit9,
        Self::Digit0,
        Self::Minus,
        Self::Equal,
        Self::BracketLeft,
        Self::BracketRight,
        Self::Backslash,
        Self::Semicolon,
        Self::Quote,
        Self::Comma,
        Self::Period,
        Self::Slash,
    ];

    /// Returns the `KeyboardEvent.code` name of this key.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::KeyQ => "KeyQ",
            Self::KeyW => "KeyW",
            Self::KeyE => "KeyE",
            Self::KeyR => "KeyR",
            Self::KeyT => "KeyT",
            Self::KeyY => "KeyY",
            Self::KeyU => "KeyU",
            Self::KeyI => "KeyI",
            Self::KeyO => "KeyO",
            Self::KeyP => "KeyP",
            Self::KeyA => "KeyA",
            Self::KeyS => "KeyS",
            Self::KeyD => "KeyD",
            Self::KeyF => "KeyF",
            Self::KeyG => "KeyG",
            Self::KeyH => "KeyH",
            Self::KeyJ => "KeyJ",
            Self::KeyK => "KeyK",
            Self::KeyL => "KeyL",
            Self::KeyZ => "KeyZ",
            Self::KeyX => "KeyX",
            Self::KeyC => "KeyC",
            Self::KeyV => "KeyV",
            Self::KeyB => "KeyB",
            Self::KeyN => "KeyN",
            Self::KeyM => "KeyM",
            Self::Backquote => "Backquote",
            Self::Digit1 => "Digit1",
            Self::Digit2 => "Digit2",
            Self::Digit3 => "Digit3",
            Self::Digit4 => "Digit4",
            Self::Digit5 => "Digit5",
            Self::Digit6 => "Digit6",
            Self::Digit7 => "Digit7",
            Self::Digit8 => "Digit8",
            Self::Digit9 => "Digit9",
            Self::Digit0 => "Digit0",
            Self::Minus => "Minus",
            Self::Equal => "Equal",
            Self::BracketLeft => "BracketLeft",
            Self::BracketRight => "BracketRight",
            Self::Backslash => "Backslash",
            Self::Semicolon => "Semicolon",
            Self::Quote => "Quote",
            Self::Comma => "Comma",
            Self::Period => "Period",
            Self::Slash => "Slash",
        }
    }

    /// Returns the character this key produces on an unshifted US-QWERTY layout.
    #[must_use]
    pub fn qwerty(&self) -> &'static str {
        match self {
            Self::KeyQ => "q",
            Self::KeyW => "w",
            Self::KeyE => "e",
            Self::KeyR => "r",
            Self::KeyT => "t",
            Self::KeyY => "y",
            Self::KeyU => "u",
            Self::KeyI => "i",
            Self::KeyO => "o",
            Self::KeyP => "p",
            Self::KeyA => "a",
            Self::KeyS => "s",
            Self::KeyD => "d",
            Self::KeyF => "f",
            Self::KeyG => "g",
            Self::KeyH => "h",
            Self::KeyJ => "j",
            Self::KeyK => "k",
            Self::KeyL => "l",
            Self::KeyZ => "z",
            Self::KeyX => "x",
            Self::KeyC => "c",
            Self::KeyV => "v",
            Self::KeyB => "b",
            Self::KeyN => "n",
            Self::KeyM => "m",
            Self::Backquote => "`",
            Self::Digit1 => "1",
            Self::Digit2 => "2",
            Self::Digit3 => "3",
            Self::Digit4 => "4",
            Self::Digit5 => "5",
            Self::Digit6 => "6",
            Self::Digit7 => "7",
            Self::Digit8 => "8",
            Self::Digit9 => "9",
            Self::Digit0 => "0",
            Self::Minus => "-",
            Self::Equal => "=",
            Self::BracketLeft => "[",
            Self::BracketRight => "]",
            Self::Backslash => "\\",
            Self::Semicolon => ";",
            Self::Quote => "'",
            Self::Comma => ",",
            Self::Period => ".",
            Self::Slash => "/",
        }
    }

    /// Returns the PC/AT set 1 make code of this key's physical position.
    #[must_use]
    pub fn scan_code(&self) -> u32 {
        match self {
            Self::Digit1 => 0x02,
            Self::Digit2 => 0x03,
            Self::Digit3 => 0x04,
            Self::Digit4 => 0x05,
            Self::Digit5 => 0x06,
            Self::Digit6 => 0x07,
            Self::Digit7 => 0x08,
            Self::Digit8 => 0x09,
            Self::Digit9 => 0x0A,
            Self::Digit0 => 0x0B,
            Self::Minus => 0x0C,
            Self::Equal => 0x0D,
            Self::KeyQ => 0x10,
            Self::KeyW => 0x11,
            Self::KeyE => 0x12,
            Self::KeyR => 0x13,
            Self::KeyT => 0x14,
            Self::KeyY => 0x15,
            Self::KeyU => 0x16,
            Self::KeyI => 0x17,
            Self::KeyO => 0x18,
            Self::KeyP => 0x19,
            Self::BracketLeft => 0x1A,
            Self::BracketRight => 0x1B,
            Self::KeyA => 0x1E,
            Self::KeyS => 0x1F,
            Self::KeyD => 0x20,
            Self::KeyF => 0x21,
            Self::KeyG => 0x22,
            Self::KeyH => 0x23,
            Self::KeyJ => 0x24,
            Self::KeyK => 0x25,
            Self::KeyL => 0x26,
            Self::Semicolon => 0x27,
            Self::Quote => 0x28,
            Self::Backquote => 0x29,
            Self::Backslash => 0x2B,
            Self::KeyZ => 0x2C,
            Self::KeyX => 0x2D,
            Self::KeyC => 0x2E,
            Self::KeyV => 0x2F,
            Self::KeyB => 0x30,
            Self::KeyN => 0x31,
            Self::KeyM => 0x32,
            Self::Comma => 0x33,
            Self::Period => 0x34,
            Self::Slash => 0x35,
        }
    }

    /// Parses a `KeyboardEvent.code` name. Returns `None` for keys outside
    /// the canonical set.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.code() == code)
    }
}

/// Builds the US-QWERTY layout for every canonical key.
///
/// Used wherever the platform offers no way to query the active layout.
#[must_use]
pub fn qwerty_layout() -> KeyboardLayout {
    CanonicalKey::ALL
        .iter()
        .map(|key| (key.code().to_string(), key.qwerty().to_string()))
        .collect()
}
